//! Project configuration (`.opsrunner.yaml`)

pub mod loader;
pub mod project;


pub use loader::{load, load_from_file, ConfigError, DEFAULT_CONFIG_FILE};
pub use project::{Codebase, ProjectDefinition, Task};

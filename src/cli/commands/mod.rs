//! Command implementation modules

pub mod docs;
pub mod list;
pub mod run;

pub use docs::run_docs_command;
pub use list::run_list_command;
pub use run::{run_build_command, run_install_command, run_task_command, run_test_command};

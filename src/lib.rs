//! # OpsRunner
//!
//! Runs local devops tasks declared in a YAML file.
//!
//! ## Usage
//!
//! ```bash
//! opsrunner [-f .opsrunner.yaml] run <task>
//! opsrunner build [--no-install]
//! ```
//!
//! ## Modules
//!
//! - `operation` - Operation execution engine: ordered steps, fail-fast, reporting
//! - `environment` - Scoped overrides of the process environment
//! - `subprocess` - Executor capability with a shell implementation and a mock
//! - `output` - Output sinks for progress, relayed step output and summaries
//! - `config` - `.opsrunner.yaml` project definition and loading
//! - `project` - Install, build, test and named-task workflows
//! - `app` - Runtime configuration, logging and fatal error handling
//! - `cli` - Command-line interface
pub mod app;
pub mod cli;
pub mod config;
pub mod environment;
pub mod operation;
pub mod output;
pub mod project;
pub mod subprocess;

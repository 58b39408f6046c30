//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::subprocess::DEFAULT_SHELL;

/// Run local devops tasks with ease
#[derive(Parser, Debug)]
#[command(name = "opsrunner")]
#[command(about = "OpsRunner: Running local devops with ease.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// OpsRunner definition file
    #[arg(short = 'f', long = "file", default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub file: PathBuf,

    /// Shell used to run each step
    #[arg(long, default_value = DEFAULT_SHELL, global = true)]
    pub shell: String,

    /// Directory to run steps in (defaults to current directory)
    #[arg(short = 'C', long = "dir", global = true)]
    pub dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a task defined in the config file
    Run {
        /// Name of the task to run
        task: String,
    },

    /// Install dependencies and run the build operations
    Build {
        /// Skip installing codebase dependencies
        #[arg(long)]
        no_install: bool,
    },

    /// Install codebase dependencies
    Install,

    /// Run the test operations
    Test,

    /// List the tasks defined in the config file
    List,

    /// Generate CLI documentation
    #[command(hide = true)]
    Docs {
        /// Output directory
        #[arg(short, long, default_value = "docs")]
        output: PathBuf,
    },
}

//! Application configuration
//!
//! Runtime settings assembled from command-line flags.

use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::subprocess::DEFAULT_SHELL;

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Project definition file
    pub config_path: PathBuf,
    /// Shell used to run steps
    pub shell: String,
    /// Directory steps run in; the current directory when unset
    pub working_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Set the project definition file
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = path;
        self
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            shell: DEFAULT_SHELL.to_string(),
            working_dir: None,
        }
    }
}

use thiserror::Error;

/// Exit code reported when a step produced no real exit status.
pub const SENTINEL_EXIT_CODE: i32 = -1;

/// Failures of the executor itself, as opposed to a command exiting non-zero.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch '{command}': {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{command}' was cancelled")]
    Cancelled { command: String },

    #[error("I/O error while running '{command}': {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl ExecError {
    /// Exit code to report alongside this error. Always the sentinel, since
    /// none of these failures carry a child exit status.
    pub fn exit_code(&self) -> i32 {
        SENTINEL_EXIT_CODE
    }

    pub fn is_launch_failure(&self) -> bool {
        matches!(self, ExecError::Launch { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ExecError::Cancelled { .. })
    }
}

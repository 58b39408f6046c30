use thiserror::Error;

use super::report::ExecutionReport;
use crate::environment::EnvScopeError;
use crate::subprocess::ExecError;

#[derive(Debug, Error)]
pub enum OperationError {
    /// Overrides could not be applied; no step ran.
    #[error("failed to set temporary env")]
    EnvScoping(#[source] EnvScopeError),

    /// First failing step of a fail-fast operation.
    #[error("error while running step {index} '{command}' (exit code {exit_code})")]
    StepFailed {
        index: usize,
        command: String,
        exit_code: i32,
        #[source]
        source: Option<ExecError>,
    },

    /// Every step ran and at least one failed.
    #[error("failed to run steps: [{}]", .report.failed_steps.join(", "))]
    StepsFailed { report: ExecutionReport },
}

impl OperationError {
    /// Failed step identifiers, in declaration order.
    pub fn failed_steps(&self) -> Vec<&str> {
        match self {
            OperationError::EnvScoping(_) => Vec::new(),
            OperationError::StepFailed { command, .. } => vec![command.as_str()],
            OperationError::StepsFailed { report } => {
                report.failed_steps.iter().map(String::as_str).collect()
            }
        }
    }

    /// True when the failing step could not be started at all.
    pub fn is_launch_failure(&self) -> bool {
        matches!(
            self,
            OperationError::StepFailed {
                source: Some(err),
                ..
            } if err.is_launch_failure()
        )
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            OperationError::StepFailed {
                source: Some(err),
                ..
            } if err.is_cancelled()
        )
    }
}

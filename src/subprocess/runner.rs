use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::error::ExecError;
use crate::operation::Step;

/// Captured outcome of one step that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            ..Self::default()
        }
    }
}

/// Capability that runs a single step.
///
/// Implementations must return promptly with [`ExecError::Cancelled`] when
/// `cancel` fires while a step is in flight.
#[async_trait]
pub trait StepExecutor: Send + Sync {
    async fn exec(
        &self,
        cancel: &CancellationToken,
        step: &Step,
    ) -> Result<ExecutionResult, ExecError>;

    /// Replace the environment used by subsequent invocations with the ambient
    /// environment augmented by `vars`.
    fn add_env(&mut self, vars: HashMap<String, String>);
}

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::error::ExecError;
use super::runner::{ExecutionResult, StepExecutor};
use crate::operation::Step;

/// Scripted [`StepExecutor`] for tests.
///
/// Steps without an expectation succeed with empty output.
#[derive(Clone, Default)]
pub struct MockExecutor {
    expectations: Arc<Mutex<Vec<MockExpectation>>>,
    call_history: Arc<Mutex<Vec<String>>>,
    env_pushes: Arc<Mutex<Vec<HashMap<String, String>>>>,
    observed_keys: Arc<Mutex<Vec<String>>>,
    env_snapshots: Arc<Mutex<Vec<HashMap<String, Option<String>>>>>,
}

#[derive(Clone)]
enum MockResponse {
    Output(ExecutionResult),
    LaunchError,
    WaitForCancel,
}

struct MockExpectation {
    step: String,
    response: MockResponse,
    times_called: usize,
}

pub struct MockStepConfig {
    executor: MockExecutor,
    expectation: MockExpectation,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response for steps whose identifier equals `step`.
    pub fn expect_step(&self, step: &str) -> MockStepConfig {
        MockStepConfig {
            executor: self.clone(),
            expectation: MockExpectation {
                step: step.to_string(),
                response: MockResponse::Output(ExecutionResult {
                    duration: Duration::from_millis(1),
                    ..ExecutionResult::default()
                }),
                times_called: 0,
            },
        }
    }

    /// Record the ambient value of `key` every time a step executes.
    pub fn observe_env(&self, key: &str) {
        self.observed_keys.lock().unwrap().push(key.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.call_history.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.call_history.lock().unwrap().len()
    }

    pub fn verify_called(&self, step: &str, times: usize) -> bool {
        let history = self.call_history.lock().unwrap();
        history.iter().filter(|call| call.as_str() == step).count() == times
    }

    /// How many executed steps were answered by the expectation for `step`.
    /// Zero when no expectation was scripted.
    pub fn expectation_hits(&self, step: &str) -> usize {
        let expectations = self.expectations.lock().unwrap();
        expectations
            .iter()
            .find(|expectation| expectation.step == step)
            .map_or(0, |expectation| expectation.times_called)
    }

    pub fn env_pushes(&self) -> Vec<HashMap<String, String>> {
        self.env_pushes.lock().unwrap().clone()
    }

    /// Ambient values of the observed keys, one map per executed step.
    pub fn env_snapshots(&self) -> Vec<HashMap<String, Option<String>>> {
        self.env_snapshots.lock().unwrap().clone()
    }

    fn snapshot_env(&self) {
        let keys = self.observed_keys.lock().unwrap();
        if keys.is_empty() {
            return;
        }
        let snapshot = keys
            .iter()
            .map(|key| (key.clone(), std::env::var(key).ok()))
            .collect();
        self.env_snapshots.lock().unwrap().push(snapshot);
    }

    fn response_for(&self, step: &str) -> Option<MockResponse> {
        let mut expectations = self.expectations.lock().unwrap();
        expectations
            .iter_mut()
            .find(|expectation| expectation.step == step)
            .map(|expectation| {
                expectation.times_called += 1;
                expectation.response.clone()
            })
    }
}

#[async_trait]
impl StepExecutor for MockExecutor {
    async fn exec(
        &self,
        cancel: &CancellationToken,
        step: &Step,
    ) -> Result<ExecutionResult, ExecError> {
        let identifier = step.identifier();
        self.call_history.lock().unwrap().push(identifier.clone());
        self.snapshot_env();

        if cancel.is_cancelled() {
            return Err(ExecError::Cancelled {
                command: identifier,
            });
        }

        match self.response_for(&identifier) {
            None => Ok(ExecutionResult {
                duration: Duration::from_millis(1),
                ..ExecutionResult::default()
            }),
            Some(MockResponse::Output(result)) => Ok(result),
            Some(MockResponse::LaunchError) => Err(ExecError::Launch {
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{identifier}: command not found"),
                ),
                command: identifier,
            }),
            Some(MockResponse::WaitForCancel) => {
                cancel.cancelled().await;
                Err(ExecError::Cancelled {
                    command: identifier,
                })
            }
        }
    }

    fn add_env(&mut self, vars: HashMap<String, String>) {
        self.env_pushes.lock().unwrap().push(vars);
    }
}

impl MockStepConfig {
    fn output(&mut self) -> &mut ExecutionResult {
        if !matches!(self.expectation.response, MockResponse::Output(_)) {
            self.expectation.response = MockResponse::Output(ExecutionResult::default());
        }
        match &mut self.expectation.response {
            MockResponse::Output(result) => result,
            _ => unreachable!("response was just set to Output"),
        }
    }

    pub fn returns_exit_code(mut self, code: i32) -> Self {
        self.output().exit_code = code;
        self
    }

    pub fn returns_stdout(mut self, stdout: &str) -> Self {
        self.output().stdout = stdout.to_string();
        self
    }

    pub fn returns_stderr(mut self, stderr: &str) -> Self {
        self.output().stderr = stderr.to_string();
        self
    }

    /// Fail as if the command could not be started.
    pub fn returns_launch_error(mut self) -> Self {
        self.expectation.response = MockResponse::LaunchError;
        self
    }

    /// Block until the cancellation token fires, then report cancellation.
    pub fn waits_for_cancel(mut self) -> Self {
        self.expectation.response = MockResponse::WaitForCancel;
        self
    }

    pub fn finish(self) {
        self.executor
            .expectations
            .lock()
            .unwrap()
            .push(self.expectation);
    }
}

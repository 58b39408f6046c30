//! Operation execution engine
//!
//! An [`Operation`] is an ordered list of [`Step`]s, optional environment
//! overrides, and a fail-fast flag. [`Operation::run`] drives the steps
//! through a [`StepExecutor`], one at a time and in declaration order.
//!
//! Environment overrides are applied to the process environment for the
//! duration of the run and reverted on every exit path. Two runs with
//! overrides must not overlap within one process.

mod error;
mod report;
mod scalar;
mod step;


pub use error::OperationError;
pub use report::ExecutionReport;
pub use step::Step;

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use crate::environment;
use crate::output::OutputSink;
use crate::subprocess::{ExecError, ExecutionResult, StepExecutor};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default, deserialize_with = "scalar::deserialize_string_map")]
    pub env: HashMap<String, String>,
    #[serde(default)]
    pub fail_fast: bool,
}

impl Operation {
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Step>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run every step and report the outcome.
    ///
    /// A step fails when the executor returns an error or a non-zero exit
    /// code. With `fail_fast` the first failure ends the run; otherwise all
    /// steps run and failures are collected into
    /// [`OperationError::StepsFailed`].
    pub async fn run<E>(
        &self,
        executor: &mut E,
        cancel: &CancellationToken,
        sink: &mut dyn OutputSink,
    ) -> Result<ExecutionReport, OperationError>
    where
        E: StepExecutor + ?Sized,
    {
        let mut restore = match environment::scope(&self.env) {
            Ok(restore) => restore,
            Err(mut err) => {
                err.restore_partial();
                return Err(OperationError::EnvScoping(err));
            }
        };
        if !self.env.is_empty() {
            trace!(
                "Loaded {} additional environment variable(s): {:?}",
                self.env.len(),
                restore.keys().collect::<Vec<_>>()
            );
        }

        let outcome = self.run_steps(executor, cancel, sink).await;
        restore.restore();
        outcome
    }

    async fn run_steps<E>(
        &self,
        executor: &mut E,
        cancel: &CancellationToken,
        sink: &mut dyn OutputSink,
    ) -> Result<ExecutionReport, OperationError>
    where
        E: StepExecutor + ?Sized,
    {
        let started = Instant::now();
        executor.add_env(self.env.clone());

        info!("Running {} step(s)", self.steps.len());
        sink.separator();

        let mut failed_steps = Vec::new();
        for (idx, step) in self.steps.iter().enumerate() {
            let index = idx + 1;
            sink.step_started(index, step);

            let (exit_code, cause) = match executor.exec(cancel, step).await {
                Ok(result) => {
                    relay_output(sink, &result);
                    (result.exit_code, None)
                }
                Err(err) => (err.exit_code(), Some(err)),
            };

            if exit_code == 0 && cause.is_none() {
                debug!("Step {} succeeded: {}", index, step);
                continue;
            }
            log_failure(index, step, exit_code, cause.as_ref());

            if self.fail_fast {
                sink.separator();
                return Err(OperationError::StepFailed {
                    index,
                    command: step.identifier(),
                    exit_code,
                    source: cause,
                });
            }
            failed_steps.push(step.identifier());
        }

        let report = ExecutionReport {
            steps: self.steps.len(),
            elapsed: started.elapsed(),
            failed_steps,
        };
        sink.separator();

        if !report.succeeded() {
            return Err(OperationError::StepsFailed { report });
        }

        sink.summary(report.steps, report.elapsed);
        info!("Ran {} step(s) in {} ms", report.steps, report.elapsed_ms());
        Ok(report)
    }
}

fn relay_output(sink: &mut dyn OutputSink, result: &ExecutionResult) {
    if !result.stdout.is_empty() {
        sink.stdout(&result.stdout);
    }
    if !result.stderr.is_empty() {
        sink.stderr(&result.stderr);
    }
}

fn log_failure(index: usize, step: &Step, exit_code: i32, cause: Option<&ExecError>) {
    match cause {
        Some(err) if err.is_launch_failure() => {
            warn!("Step {} could not be launched: {}", index, err)
        }
        Some(err) => warn!("Step {} failed: {}", index, err),
        None => warn!("Step {} exited with code {}: {}", index, exit_code, step),
    }
}

use async_trait::async_trait;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tokio_util::sync::CancellationToken;

use super::error::{ExecError, SENTINEL_EXIT_CODE};
use super::runner::{ExecutionResult, StepExecutor};
use crate::operation::Step;

pub const DEFAULT_SHELL: &str = "sh";

/// Runs each step as `<shell> -c "<command> <args>"` in a child process.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
    working_dir: Option<PathBuf>,
    env: Option<HashMap<OsString, OsString>>,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            working_dir: None,
            env: None,
        }
    }

    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Child environment built by the last `add_env` call, if any.
    pub fn env(&self) -> Option<&HashMap<OsString, OsString>> {
        self.env.as_ref()
    }

    fn configure_command(&self, command_line: &str) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.shell);
        cmd.arg("-c").arg(command_line);

        if let Some(env) = &self.env {
            cmd.env_clear();
            cmd.envs(env);
        }
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }

    fn exit_code(status: std::process::ExitStatus) -> i32 {
        match status.code() {
            Some(code) => code,
            None => {
                tracing::warn!("Child terminated without an exit code: {}", status);
                SENTINEL_EXIT_CODE
            }
        }
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StepExecutor for ShellExecutor {
    async fn exec(
        &self,
        cancel: &CancellationToken,
        step: &Step,
    ) -> Result<ExecutionResult, ExecError> {
        let command_line = step.identifier();
        if cancel.is_cancelled() {
            return Err(ExecError::Cancelled {
                command: command_line,
            });
        }

        tracing::debug!("Executing step via {}: {}", self.shell, command_line);
        let started = Instant::now();

        let child = self
            .configure_command(&command_line)
            .spawn()
            .map_err(|source| ExecError::Launch {
                command: command_line.clone(),
                source,
            })?;

        // Dropping the pending wait kills the child (kill_on_drop).
        let output = tokio::select! {
            output = child.wait_with_output() => output.map_err(|source| ExecError::Io {
                command: command_line.clone(),
                source,
            })?,
            _ = cancel.cancelled() => {
                tracing::warn!("Cancelled while running: {}", command_line);
                return Err(ExecError::Cancelled { command: command_line });
            }
        };

        let result = ExecutionResult {
            exit_code: Self::exit_code(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            duration: started.elapsed(),
        };

        tracing::debug!(
            "Step finished with exit code {} in {:?}: {}",
            result.exit_code,
            result.duration,
            command_line
        );
        tracing::trace!("Stdout length: {} bytes", result.stdout.len());
        tracing::trace!("Stderr length: {} bytes", result.stderr.len());

        Ok(result)
    }

    fn add_env(&mut self, vars: HashMap<String, String>) {
        // Ambient values may not be UTF-8; they pass through untouched.
        let mut env: HashMap<OsString, OsString> = std::env::vars_os().collect();
        tracing::trace!("Adding {} variable(s) to executor environment", vars.len());
        env.extend(
            vars.into_iter()
                .map(|(key, value)| (OsString::from(key), OsString::from(value))),
        );
        self.env = Some(env);
    }
}

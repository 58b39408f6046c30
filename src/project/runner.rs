use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::error::ProjectError;
use crate::config::{Codebase, ProjectDefinition};
use crate::operation::{ExecutionReport, Operation};
use crate::output::OutputSink;
use crate::subprocess::StepExecutor;

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub no_install: bool,
}

/// Install steps for a codebase: its own `install` operation when it has
/// steps, otherwise the default for its language.
pub fn default_install(codebase: &Codebase) -> Result<Operation, ProjectError> {
    if let Some(install) = codebase.install.as_ref().filter(|op| !op.is_empty()) {
        return Ok(install.clone());
    }

    let language = codebase
        .language
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or(ProjectError::MissingLanguage)?;

    match language.to_lowercase().as_str() {
        "go" => {
            debug!("Using Go installation steps");
            Ok(Operation::new(["go mod tidy"]))
        }
        "python" => {
            debug!("Using Python installation steps");
            let deps = codebase
                .dependencies
                .as_deref()
                .filter(|d| !d.trim().is_empty())
                .ok_or_else(|| ProjectError::MissingDependencies(language.to_string()))?;
            Ok(Operation::new([format!("pip install -r {deps}").as_str()]))
        }
        other => Err(ProjectError::UnsupportedLanguage(other.to_string())),
    }
}

/// Runs project operations against one executor and output sink.
pub struct ProjectRunner<E, S> {
    executor: E,
    sink: S,
    cancel: CancellationToken,
}

impl<E, S> ProjectRunner<E, S>
where
    E: StepExecutor,
    S: OutputSink,
{
    pub fn new(executor: E, sink: S) -> Self {
        Self {
            executor,
            sink,
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    async fn run(
        &mut self,
        operation: &Operation,
    ) -> Result<ExecutionReport, crate::operation::OperationError> {
        operation
            .run(&mut self.executor, &self.cancel, &mut self.sink)
            .await
    }

    pub async fn install(&mut self, codebase: &Codebase) -> Result<ExecutionReport, ProjectError> {
        let operation = default_install(codebase)?;
        self.run(&operation).await.map_err(ProjectError::Install)
    }

    /// Install dependencies (unless skipped) and run the build operation.
    pub async fn build(
        &mut self,
        project: &ProjectDefinition,
        opts: BuildOptions,
    ) -> Result<ExecutionReport, ProjectError> {
        let codebase = project
            .codebase
            .as_ref()
            .ok_or(ProjectError::MissingCodebase)?;
        let started = Instant::now();

        if opts.no_install {
            info!("Skipping codebase dependency installation");
        } else {
            debug!("Installing codebase dependencies");
            self.install(codebase).await?;
        }

        if codebase.build.is_empty() {
            warn!("No build steps defined in the configuration.");
        }
        let report = self
            .run(&codebase.build)
            .await
            .map_err(ProjectError::Build)?;

        info!(
            "Build completed successfully in {}ms",
            started.elapsed().as_millis()
        );
        Ok(report)
    }

    pub async fn test(
        &mut self,
        project: &ProjectDefinition,
    ) -> Result<ExecutionReport, ProjectError> {
        let codebase = project
            .codebase
            .as_ref()
            .ok_or(ProjectError::MissingCodebase)?;
        if codebase.test.is_empty() {
            warn!("No test steps defined in the configuration.");
        }
        self.run(&codebase.test).await.map_err(ProjectError::Test)
    }

    pub async fn run_task(
        &mut self,
        project: &ProjectDefinition,
        name: &str,
    ) -> Result<ExecutionReport, ProjectError> {
        let task = project
            .task(name)
            .ok_or_else(|| ProjectError::UnknownTask {
                name: name.to_string(),
                available: project.task_names().join(", "),
            })?;

        info!("Running task '{}'", name);
        self.run(&task.operation)
            .await
            .map_err(|source| ProjectError::Task {
                name: name.to_string(),
                source,
            })
    }
}

//! Commands that execute operations: run, build, install, test.

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;

use crate::app::AppConfig;
use crate::config::{self, ProjectDefinition};
use crate::output::ConsoleSink;
use crate::project::{BuildOptions, ProjectError, ProjectRunner};
use crate::subprocess::ShellExecutor;

type ConsoleRunner = ProjectRunner<ShellExecutor, ConsoleSink>;

async fn load_project(config: &AppConfig) -> Result<ProjectDefinition> {
    config::load_from_file(&config.config_path)
        .await
        .context("failed to load config from file")
}

fn console_runner(config: &AppConfig, cancel: CancellationToken) -> ConsoleRunner {
    let mut executor = ShellExecutor::new().with_shell(config.shell.as_str());
    if let Some(dir) = &config.working_dir {
        executor = executor.with_working_dir(dir);
    }
    ProjectRunner::new(executor, ConsoleSink::new()).with_cancellation(cancel)
}

pub async fn run_task_command(
    config: &AppConfig,
    task: &str,
    cancel: CancellationToken,
) -> Result<()> {
    let project = load_project(config).await?;
    console_runner(config, cancel)
        .run_task(&project, task)
        .await?;
    Ok(())
}

pub async fn run_build_command(
    config: &AppConfig,
    no_install: bool,
    cancel: CancellationToken,
) -> Result<()> {
    let project = load_project(config).await?;
    console_runner(config, cancel)
        .build(&project, BuildOptions { no_install })
        .await
        .context("build failed")?;
    Ok(())
}

pub async fn run_install_command(config: &AppConfig, cancel: CancellationToken) -> Result<()> {
    let project = load_project(config).await?;
    let codebase = project
        .codebase
        .as_ref()
        .ok_or(ProjectError::MissingCodebase)?;
    console_runner(config, cancel).install(codebase).await?;
    Ok(())
}

pub async fn run_test_command(config: &AppConfig, cancel: CancellationToken) -> Result<()> {
    let project = load_project(config).await?;
    console_runner(config, cancel).test(&project).await?;
    Ok(())
}

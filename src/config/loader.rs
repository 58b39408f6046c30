use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use super::project::ProjectDefinition;
use crate::operation::Operation;

pub const DEFAULT_CONFIG_FILE: &str = ".opsrunner.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Decode and validate a project definition from `reader`.
pub fn load<R: Read>(reader: R) -> Result<ProjectDefinition, ConfigError> {
    let project: ProjectDefinition = serde_yaml::from_reader(reader)?;
    validate(&project)?;
    Ok(project)
}

pub async fn load_from_file(path: &Path) -> Result<ProjectDefinition, ConfigError> {
    debug!("Loading configuration from {}", path.display());
    let content = tokio::fs::read(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    load(content.as_slice())
}

fn validate(project: &ProjectDefinition) -> Result<(), ConfigError> {
    for (name, task) in &project.tasks {
        if name.trim().is_empty() {
            return Err(ConfigError::Invalid("task names must not be empty".into()));
        }
        validate_operation(&format!("task '{name}'"), &task.operation)?;
    }

    if let Some(codebase) = &project.codebase {
        if let Some(install) = &codebase.install {
            validate_operation("codebase.install", install)?;
        }
        validate_operation("codebase.build", &codebase.build)?;
        validate_operation("codebase.test", &codebase.test)?;
    }
    Ok(())
}

fn validate_operation(owner: &str, operation: &Operation) -> Result<(), ConfigError> {
    for (idx, step) in operation.steps.iter().enumerate() {
        if step.command().trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{owner}: step {} has an empty command",
                idx + 1
            )));
        }
    }
    Ok(())
}

use thiserror::Error;

use crate::operation::OperationError;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("no codebase section is defined in the configuration")]
    MissingCodebase,

    #[error("codebase language is not defined")]
    MissingLanguage,

    #[error("unsupported codebase language: {0}")]
    UnsupportedLanguage(String),

    #[error("codebase language '{0}' requires a dependencies file")]
    MissingDependencies(String),

    #[error("unknown task '{name}' (available: {available})")]
    UnknownTask { name: String, available: String },

    #[error("failed to install codebase dependencies")]
    Install(#[source] OperationError),

    #[error("failed to run build steps")]
    Build(#[source] OperationError),

    #[error("failed to run test steps")]
    Test(#[source] OperationError),

    #[error("task '{name}' failed")]
    Task {
        name: String,
        #[source]
        source: OperationError,
    },
}

impl ProjectError {
    /// The underlying operation failure, if this error wraps one.
    pub fn operation_error(&self) -> Option<&OperationError> {
        match self {
            ProjectError::Install(err) | ProjectError::Build(err) | ProjectError::Test(err) => {
                Some(err)
            }
            ProjectError::Task { source, .. } => Some(source),
            _ => None,
        }
    }
}

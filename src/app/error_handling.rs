//! Error handling utilities

use tracing::error;

use crate::config::ConfigError;
use crate::project::ProjectError;

const GENERAL_ERROR: i32 = 1;
const ARGUMENT_ERROR: i32 = 2;

/// Process exit code for an error surfaced by a command.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    let usage = error.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<ProjectError>(),
            Some(ProjectError::UnknownTask { .. })
        ) || matches!(
            cause.downcast_ref::<ConfigError>(),
            Some(ConfigError::Read { .. })
        )
    });
    if usage {
        ARGUMENT_ERROR
    } else {
        GENERAL_ERROR
    }
}

/// Print a fatal error and exit.
///
/// With `verbose >= 1` the whole cause chain is printed.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    if verbose >= 1 {
        eprintln!("Error: {error}");
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    } else {
        eprintln!("Error: {error:#}");
    }

    std::process::exit(exit_code_for(&error))
}

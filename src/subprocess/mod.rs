//! Executor capability used by operations to run their steps.
//!
//! [`StepExecutor`] is the only seam the operation engine depends on.
//! [`ShellExecutor`] spawns real processes; [`MockExecutor`] scripts outcomes
//! for tests.

pub mod error;
pub mod mock;
pub mod runner;
pub mod shell;


pub use error::{ExecError, SENTINEL_EXIT_CODE};
pub use mock::{MockExecutor, MockStepConfig};
pub use runner::{ExecutionResult, StepExecutor};
pub use shell::{ShellExecutor, DEFAULT_SHELL};

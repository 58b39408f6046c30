//! Project-level workflows: install, build, test and named tasks.

mod error;
mod runner;

#[cfg(test)]
mod tests;

pub use error::ProjectError;
pub use runner::{default_install, BuildOptions, ProjectRunner};

//! Scoped overrides of the process environment.
//!
//! The process environment is global. At most one operation run may hold an
//! [`EnvRestore`] at a time; nothing here serializes concurrent scopes.

mod scope;

#[cfg(test)]
mod tests;

pub use scope::{scope, EnvRestore, EnvScopeError};

/// Serializes tests that touch the process environment.
#[cfg(test)]
pub(crate) fn test_env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

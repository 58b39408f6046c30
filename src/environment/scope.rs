use std::collections::HashMap;
use std::ffi::OsString;
use thiserror::Error;

/// Failure to apply an override. Carries the restore action for the keys
/// that were applied before the failure.
#[derive(Debug, Error)]
pub enum EnvScopeError {
    #[error("cannot set environment variable '{key}': {reason}")]
    InvalidVariable {
        key: String,
        reason: &'static str,
        restore: EnvRestore,
    },
}

impl EnvScopeError {
    pub fn key(&self) -> &str {
        match self {
            EnvScopeError::InvalidVariable { key, .. } => key,
        }
    }

    /// Revert the keys applied before the failure.
    pub fn restore_partial(&mut self) {
        match self {
            EnvScopeError::InvalidVariable { restore, .. } => restore.restore(),
        }
    }

    /// Take the partial restore action out of the error.
    pub fn into_restore(self) -> EnvRestore {
        match self {
            EnvScopeError::InvalidVariable { restore, .. } => restore,
        }
    }
}

/// Reverts every variable touched by [`scope`] to its prior state.
///
/// `restore` is idempotent. Dropping an unrestored guard restores as well, so
/// the environment is reverted even if the owning future is dropped mid-run.
#[derive(Debug, Default)]
#[must_use = "dropping the restore action reverts the environment immediately"]
pub struct EnvRestore {
    originals: Vec<(String, Option<OsString>)>,
    restored: bool,
}

impl EnvRestore {
    fn noop() -> Self {
        Self {
            originals: Vec::new(),
            restored: true,
        }
    }

    /// Keys this action will revert.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.originals.iter().map(|(key, _)| key.as_str())
    }

    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        for (key, original) in self.originals.iter().rev() {
            match original {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        tracing::debug!("Restored {} env(s)", self.originals.len());
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        if !self.restored {
            tracing::trace!("Restoring environment on drop");
            self.restore();
        }
    }
}

/// `std::env::set_var` panics on these inputs; report them as errors instead.
fn validate(key: &str, value: &str) -> Result<(), &'static str> {
    if key.is_empty() {
        return Err("name is empty");
    }
    if key.contains('=') {
        return Err("name contains '='");
    }
    if key.contains('\0') {
        return Err("name contains a NUL byte");
    }
    if value.contains('\0') {
        return Err("value contains a NUL byte");
    }
    Ok(())
}

/// Apply `overrides` to the process environment.
///
/// Keys are applied in sorted order. On failure the returned error holds a
/// restore action covering the keys applied so far.
pub fn scope(overrides: &HashMap<String, String>) -> Result<EnvRestore, EnvScopeError> {
    if overrides.is_empty() {
        return Ok(EnvRestore::noop());
    }

    let mut keys: Vec<&String> = overrides.keys().collect();
    keys.sort();

    let mut restore = EnvRestore::default();
    for key in keys {
        let value = &overrides[key];
        if let Err(reason) = validate(key, value) {
            return Err(EnvScopeError::InvalidVariable {
                key: key.clone(),
                reason,
                restore,
            });
        }

        let original = std::env::var_os(key);
        restore.originals.push((key.clone(), original));
        std::env::set_var(key, value);
        tracing::info!("Using env: {}", key);
    }

    Ok(restore)
}

//! Shared test utilities for the quill crates.
//!
//! This module is only compiled in test builds (`#[cfg(test)]`).

/// RAII guard for environment variables in tests.
///
/// Sets an environment variable on creation and restores the original value
/// (or removes the variable) when dropped.
#[derive(Debug)]
pub struct EnvVarGuard {
    key: String,
    original: Option<String>,
}

impl EnvVarGuard {
    /// Set an environment variable, returning a guard that restores it on drop.
    pub fn set(key: &str, value: &str) -> Self {
        let original = std::env::var(key).ok();
        // SAFETY: only QUILL_CONFIG_DIR is touched, and by a single test.
        unsafe { std::env::set_var(key, value) };
        Self {
            key: key.to_string(),
            original,
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        // SAFETY: See EnvVarGuard::set
        match &self.original {
            Some(val) => unsafe { std::env::set_var(&self.key, val) },
            None => unsafe { std::env::remove_var(&self.key) },
        }
    }
}

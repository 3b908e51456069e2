//! In-memory configuration for testing.
//!
//! Provides a [`MemoryConfig`] that implements [`Config`] without touching
//! the filesystem or the environment.

use std::collections::HashMap;

use super::{Config, option};
use crate::errors::{ConfigError, CoreError};

/// In-memory configuration for testing.
///
/// # Examples
///
/// ```
/// use quill_core::config::{Config, MemoryConfig};
///
/// let config = MemoryConfig::new()
///     .with("repo", "sect/quotes")
///     .with("token", "ghp_token123");
///
/// assert_eq!(config.repo().as_deref(), Some("sect/quotes"));
/// let (token, source) = config.token().unwrap();
/// assert_eq!(token, "ghp_token123");
/// assert_eq!(source, "config");
/// ```
#[derive(Debug, Default)]
pub struct MemoryConfig {
    values: HashMap<String, String>,
}

impl MemoryConfig {
    /// Create a new empty in-memory configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter that skips validation.
    #[must_use]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl Config for MemoryConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if option(key).is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn token(&self) -> Option<(String, String)> {
        self.values
            .get("token")
            .filter(|t| !t.is_empty())
            .map(|t| (t.clone(), "config".to_string()))
    }

    fn write(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

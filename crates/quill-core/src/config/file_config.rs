//! File-based configuration implementation.
//!
//! Reads/writes config.yml in the quill config directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{Config, config_dir, option};
use crate::errors::{ConfigError, CoreError};

type EnvLookup = fn(&str) -> Option<String>;

/// File-based configuration backed by a YAML file.
///
/// Lookups consult `QUILL_<KEY>` environment variables before the file.
/// The token additionally falls back to `GITHUB_TOKEN`.
pub struct FileConfig {
    config_path: PathBuf,
    data: ConfigData,
    env: EnvLookup,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    http_timeout: Option<String>,
}

impl ConfigData {
    fn slot(&mut self, key: &str) -> Option<&mut Option<String>> {
        match key {
            "repo" => Some(&mut self.repo),
            "token" => Some(&mut self.token),
            "api_url" => Some(&mut self.api_url),
            "http_timeout" => Some(&mut self.http_timeout),
            _ => None,
        }
    }

    fn value(&self, key: &str) -> Option<&String> {
        match key {
            "repo" => self.repo.as_ref(),
            "token" => self.token.as_ref(),
            "api_url" => self.api_url.as_ref(),
            "http_timeout" => self.http_timeout.as_ref(),
            _ => None,
        }
    }
}

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

impl FileConfig {
    /// Load configuration from the default config directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_dir())
    }

    /// Load configuration from `dir/config.yml`. A missing file is an empty config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join("config.yml");

        let data = if config_path.exists() {
            let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadFile {
                path: config_path.display().to_string(),
                source: e,
            })?;
            if content.trim().is_empty() {
                ConfigData::default()
            } else {
                serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?
            }
        } else {
            ConfigData::default()
        };

        tracing::debug!(path = %config_path.display(), "loaded config");

        Ok(Self {
            config_path,
            data,
            env: process_env,
        })
    }

    /// Replace the environment lookup used for overrides.
    #[must_use]
    pub fn with_env_lookup(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    /// Path of the backing YAML file.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn env_key(key: &str) -> String {
        format!("QUILL_{}", key.to_uppercase())
    }
}

impl std::fmt::Debug for FileConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileConfig")
            .field("config_path", &self.config_path)
            .field("repo", &self.data.repo)
            .field("token", &self.data.token.as_ref().map(|_| "***"))
            .field("api_url", &self.data.api_url)
            .field("http_timeout", &self.data.http_timeout)
            .finish_non_exhaustive()
    }
}

impl Config for FileConfig {
    fn get(&self, key: &str) -> Option<String> {
        if let Some(val) = (self.env)(&Self::env_key(key)) {
            return Some(val);
        }
        self.data.value(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        if option(key).is_none() {
            return Err(ConfigError::UnknownKey(key.to_string()));
        }
        if let Some(slot) = self.data.slot(key) {
            *slot = (!value.is_empty()).then(|| value.to_string());
        }
        Ok(())
    }

    fn token(&self) -> Option<(String, String)> {
        for var in ["QUILL_TOKEN", "GITHUB_TOKEN"] {
            if let Some(token) = (self.env)(var) {
                return Some((token, var.to_string()));
            }
        }
        self.data
            .token
            .as_ref()
            .filter(|t| !t.is_empty())
            .map(|t| (t.clone(), "config".to_string()))
    }

    fn write(&self) -> Result<(), CoreError> {
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml =
            serde_yaml::to_string(&self.data).map_err(|e| ConfigError::Parse(e.to_string()))?;
        fs::write(&self.config_path, yaml).map_err(|e| ConfigError::WriteFile {
            path: self.config_path.display().to_string(),
            source: e,
        })?;

        tracing::debug!(path = %self.config_path.display(), "wrote config");
        Ok(())
    }
}

//! Configuration system for quill.
//!
//! Settings live in `config.yml` inside the config directory. Every key can
//! be overridden by a `QUILL_<KEY>` environment variable.

mod file_config;
mod memory_config;

use std::path::PathBuf;
use std::time::Duration;

pub use file_config::FileConfig;
pub use memory_config::MemoryConfig;

use crate::errors::{ConfigError, CoreError};
use crate::instance;
use crate::repo::Repo;

/// Configuration directory path (usually ~/.config/quill).
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("QUILL_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::config_dir().map_or_else(
        || {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("quill")
        },
        |d| d.join("quill"),
    )
}

/// Configuration trait for accessing settings.
pub trait Config: Send + Sync + std::fmt::Debug {
    /// Get a config value.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a config value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError>;

    /// Get the access token and where it came from. Returns (token, source).
    fn token(&self) -> Option<(String, String)>;

    /// Persist the configuration.
    fn write(&self) -> Result<(), CoreError>;

    /// Get a config value with its default.
    fn get_or_default(&self, key: &str) -> String {
        self.get(key)
            .unwrap_or_else(|| default_for_key(key).to_string())
    }

    /// Default repository, if configured.
    fn repo(&self) -> Option<String> {
        self.get("repo").filter(|r| !r.is_empty())
    }

    /// Explicit API base URL, if configured.
    fn api_url(&self) -> Option<String> {
        self.get("api_url").filter(|u| !u.is_empty())
    }

    /// HTTP request timeout, if configured.
    fn http_timeout(&self) -> Result<Option<Duration>, ConfigError> {
        match self.get("http_timeout") {
            Some(raw) if !raw.is_empty() => parse_timeout(&raw).map(Some),
            _ => Ok(None),
        }
    }
}

/// Known configuration keys with descriptions and defaults.
pub static CONFIG_OPTIONS: &[ConfigOption] = &[
    ConfigOption {
        key: "repo",
        description: "the OWNER/REPO whose issues hold the quotes",
        default_value: "",
    },
    ConfigOption {
        key: "token",
        description: "the access token used to authenticate API requests",
        default_value: "",
    },
    ConfigOption {
        key: "api_url",
        description: "the REST API base URL",
        default_value: instance::DEFAULT_API_URL,
    },
    ConfigOption {
        key: "http_timeout",
        description: "the request timeout in seconds (unset means no timeout)",
        default_value: "",
    },
];

/// A known configuration option.
#[derive(Debug)]
pub struct ConfigOption {
    /// Config key name.
    pub key: &'static str,
    /// Description of what this option does.
    pub description: &'static str,
    /// Default value.
    pub default_value: &'static str,
}

impl ConfigOption {
    /// Get the current value from config, or the default.
    pub fn current_value(&self, config: &dyn Config) -> String {
        config.get_or_default(self.key)
    }

    /// Whether this option holds a credential and must not be echoed.
    pub fn is_secret(&self) -> bool {
        self.key == "token"
    }
}

/// Look up a known option by key.
pub fn option(key: &str) -> Option<&'static ConfigOption> {
    CONFIG_OPTIONS.iter().find(|o| o.key == key)
}

/// Default configuration values.
pub fn default_for_key(key: &str) -> &'static str {
    option(key).map_or("", |o| o.default_value)
}

/// Check that `value` is acceptable for `key` before it is stored.
pub fn validate_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match key {
        "repo" => value
            .parse::<Repo>()
            .map(|_| ())
            .map_err(|e| invalid(&e.to_string())),
        "api_url" => instance::normalize_api_url(value)
            .map(|_| ())
            .ok_or_else(|| invalid("expected an absolute http(s) URL")),
        "http_timeout" => parse_timeout(value).map(|_| ()),
        "token" => Ok(()),
        _ => Err(ConfigError::UnknownKey(key.to_string())),
    }
}

/// Parse a timeout given in whole seconds.
pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            key: "http_timeout".to_string(),
            value: raw.to_string(),
            reason: "expected a positive number of seconds".to_string(),
        }),
    }
}

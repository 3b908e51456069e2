//! Core error types for quill.

/// Errors originating from core operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Configuration file read/write error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path of the config file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write config file.
    #[error("failed to write config file {path}: {source}")]
    WriteFile {
        /// Path of the config file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse config.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Key is not one of the known configuration options.
    #[error("unknown configuration key {0:?}")]
    UnknownKey(String),

    /// Value rejected for a known key.
    #[error("invalid value {value:?} for {key:?}: {reason}")]
    InvalidValue {
        /// Config key.
        key: String,
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Missing required configuration.
    #[error("missing required configuration: {0}")]
    Missing(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_config_error_missing() {
        let err = ConfigError::Missing("repo".to_string());
        assert_eq!(err.to_string(), "missing required configuration: repo");
    }

    #[test]
    fn test_should_display_config_error_parse() {
        let err = ConfigError::Parse("invalid yaml".to_string());
        assert_eq!(err.to_string(), "failed to parse config: invalid yaml");
    }

    #[test]
    fn test_should_display_invalid_value() {
        let err = ConfigError::InvalidValue {
            key: "http_timeout".to_string(),
            value: "soon".to_string(),
            reason: "expected a number of seconds".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"soon\" for \"http_timeout\": expected a number of seconds",
        );
    }

    #[test]
    fn test_should_display_unknown_key() {
        let err = ConfigError::UnknownKey("editor".to_string());
        assert_eq!(err.to_string(), "unknown configuration key \"editor\"");
    }

    #[test]
    fn test_should_display_config_error_read_file() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ConfigError::ReadFile {
            path: "/home/.config/quill/config.yml".to_string(),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/home/.config/quill/config.yml"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_should_display_core_error_from_config() {
        let core_err = CoreError::Config(ConfigError::Missing("repo".to_string()));
        assert_eq!(
            core_err.to_string(),
            "configuration error: missing required configuration: repo",
        );
    }

    #[test]
    fn test_should_convert_io_error_to_core_error() {
        let core_err: CoreError = std::io::Error::other("test").into();
        assert!(matches!(core_err, CoreError::Io(_)));
    }
}

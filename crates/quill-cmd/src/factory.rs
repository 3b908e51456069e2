//! Factory for shared command dependencies.
//!
//! Provides lazy initialization of configuration and API clients, and
//! supports test mode with dependency injection for isolated testing.

use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use secrecy::SecretString;

use quill_api::{Client, IssueTracker};
use quill_core::config::{Config, FileConfig};
use quill_core::instance;
use quill_core::iostreams::{IOStreams, TestOutput};
use quill_core::repo::Repo;

/// Shared factory providing lazily-initialized dependencies to all commands.
///
/// In production mode, dependencies are created from the real system.
/// In test mode, dependencies can be injected for isolated testing.
pub struct Factory {
    /// Application version.
    pub app_version: String,
    /// I/O streams.
    pub io: IOStreams,
    /// Configuration (lazily loaded).
    config: OnceLock<Mutex<Box<dyn Config>>>,

    // Test overrides
    http_override: Option<reqwest::Client>,
    api_url_override: Option<String>,
    token_override: Option<SecretString>,
}

impl std::fmt::Debug for Factory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory")
            .field("app_version", &self.app_version)
            .field("api_url_override", &self.api_url_override)
            .finish_non_exhaustive()
    }
}

impl Factory {
    /// Create a new factory with the given version.
    pub fn new(app_version: String) -> Self {
        Self::with_io(app_version, IOStreams::system())
    }

    fn with_io(app_version: String, io: IOStreams) -> Self {
        Self {
            app_version,
            io,
            config: OnceLock::new(),
            http_override: None,
            api_url_override: None,
            token_override: None,
        }
    }

    /// Create a test factory with captured I/O.
    ///
    /// Returns the factory and a `TestOutput` for reading captured
    /// stdout/stderr. Pair it with [`Factory::with_config`] to avoid
    /// touching the real config file.
    pub fn test() -> (Self, TestOutput) {
        let (io, output) = IOStreams::test_with_output();
        (Self::with_io("test".to_string(), io), output)
    }

    /// Like [`Factory::test`], with `input` readable from stdin.
    pub fn test_with_input(input: &str) -> (Self, TestOutput) {
        let (io, output) = IOStreams::test_with_input(input);
        (Self::with_io("test".to_string(), io), output)
    }

    /// Set a custom reqwest HTTP client (e.g., backed by wiremock).
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_override = Some(client);
        self
    }

    /// Send all API requests to this base URL, ignoring config.
    #[must_use]
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url_override = Some(url.into());
        self
    }

    /// Set a test auth token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token_override = Some(SecretString::from(token.into()));
        self
    }

    /// Set a config override for testing.
    #[must_use]
    pub fn with_config(self, config: Box<dyn Config>) -> Self {
        let _ = self.config.set(Mutex::new(config));
        self
    }

    /// Get the configuration, loading it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if config cannot be loaded.
    pub fn config(&self) -> Result<&Mutex<Box<dyn Config>>> {
        if let Some(cfg) = self.config.get() {
            return Ok(cfg);
        }
        let cfg = FileConfig::load().context("failed to load configuration")?;
        let boxed: Box<dyn Config> = Box::new(cfg);
        // Ignore set error - another thread may have set it first
        let _ = self.config.set(Mutex::new(boxed));
        self.config
            .get()
            .ok_or_else(|| anyhow::anyhow!("failed to initialize config"))
    }

    /// Resolve the repository from the `-R` flag or the `repo` config key.
    ///
    /// # Errors
    ///
    /// Returns an error if neither is set or the value does not parse.
    pub fn resolve_repo(&self, flag: Option<&str>) -> Result<Repo> {
        let raw = match flag {
            Some(r) => r.to_string(),
            None => {
                let cfg_lock = self.config()?;
                let cfg = cfg_lock
                    .lock()
                    .map_err(|e| anyhow::anyhow!("config lock: {e}"))?;
                cfg.repo().ok_or_else(|| {
                    anyhow::anyhow!(
                        "no repository given: pass -R OWNER/REPO or run `quill config set repo OWNER/REPO`"
                    )
                })?
            }
        };
        raw.parse::<Repo>()
            .with_context(|| format!("invalid repository {raw:?}"))
    }

    /// Build an API client for `repo`.
    ///
    /// The base URL comes from the test override, then the `api_url`
    /// config key, then the repository's host.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built or config is invalid.
    pub fn api_client(&self, repo: &Repo) -> Result<Client> {
        let cfg_lock = self.config()?;
        let cfg = cfg_lock
            .lock()
            .map_err(|e| anyhow::anyhow!("config lock: {e}"))?;

        let http = if let Some(ref client) = self.http_override {
            client.clone()
        } else {
            let opts = quill_api::http::HttpClientOptions {
                app_version: self.app_version.clone(),
                timeout: cfg.http_timeout()?,
            };
            quill_api::http::build_client(&opts).context("failed to build HTTP client")?
        };

        let token = self
            .token_override
            .clone()
            .or_else(|| cfg.token().map(|(t, _)| SecretString::from(t)));

        let base = match (&self.api_url_override, cfg.api_url()) {
            (Some(url), _) => url.clone(),
            (None, Some(raw)) => instance::normalize_api_url(&raw)
                .ok_or_else(|| anyhow::anyhow!("invalid api_url {raw:?} in configuration"))?,
            (None, None) => repo.api_url(),
        };

        tracing::debug!(base = %base, authenticated = token.is_some(), "API client ready");
        Ok(Client::new(http, token).with_url_override(base))
    }

    /// Build the issue tracker for the repository named by `repo_flag`
    /// (or the configured default).
    ///
    /// # Errors
    ///
    /// Returns an error if the repository or the API client cannot be resolved.
    pub fn tracker(&self, repo_flag: Option<&str>) -> Result<IssueTracker> {
        let repo = self.resolve_repo(repo_flag)?;
        let client = self.api_client(&repo)?;
        Ok(IssueTracker::new(client, repo))
    }
}

//! REST transport for the GitHub API.
//!
//! Resolves paths against the API base URL, applies the standard headers,
//! and turns non-success responses into [`ApiError::Http`].

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::errors::ApiError;
use quill_core::instance;

/// Media type requested on every call.
pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// GitHub API client wrapping reqwest with auth and error handling.
///
/// Tokens are stored as [`SecretString`] to prevent accidental logging or
/// exposure through `Debug` output.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    token: Option<SecretString>,
    base_url: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client for `https://api.github.com/`.
    ///
    /// Without a token no `Authorization` header is sent.
    pub fn new(http: reqwest::Client, token: Option<SecretString>) -> Self {
        Self {
            http,
            token,
            base_url: instance::DEFAULT_API_URL.to_string(),
        }
    }

    /// Route every request to another API base, e.g. a GitHub Enterprise
    /// host or a mock server. A trailing slash is added when missing.
    #[must_use]
    pub fn with_url_override(mut self, url: impl Into<String>) -> Self {
        let mut url = url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// API base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry an `Authorization` header.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn authed_request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, url)
            .header(ACCEPT, ACCEPT_V3)
            .header(CONTENT_TYPE, "application/json");
        if let Some(ref token) = self.token {
            req = req.header(AUTHORIZATION, format!("token {}", token.expose_secret()));
        }
        req
    }

    /// Execute a REST API request and decode the JSON response.
    ///
    /// `path` is relative to the API base unless it is an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns an error on network failure, non-success status, or a body
    /// that does not decode into `T`.
    pub async fn rest<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T, ApiError> {
        let url = self.resolve_rest_url(path);
        debug!(%method, %url, "REST request");

        let mut req = self.authed_request(method, &url);
        if let Some(body) = body {
            req = req.json(body);
        }
        let resp = Self::check_response(req.send().await?).await?;
        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        debug!(status = status.as_u16(), "REST response");
        if status.is_success() {
            return Ok(resp);
        }

        let text = resp.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &text))
    }

    fn resolve_rest_url(&self, path: &str) -> String {
        if path.starts_with("https://") || path.starts_with("http://") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path.trim_start_matches('/'))
        }
    }
}

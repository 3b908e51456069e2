//! HTTP client construction.
//!
//! Provides the User-Agent default header and the optional request timeout.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use tracing::debug;

/// Options for constructing an HTTP client.
#[derive(Debug, Default)]
pub struct HttpClientOptions {
    /// Application version for User-Agent.
    pub app_version: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

/// User-Agent value sent with every request.
pub fn user_agent(app_version: &str) -> String {
    format!("quill/{app_version}")
}

/// Build a reqwest client with default configuration.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed.
pub fn build_client(opts: &HttpClientOptions) -> Result<reqwest::Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    if let Ok(ua) = HeaderValue::from_str(&user_agent(&opts.app_version)) {
        headers.insert(header::USER_AGENT, ua);
    }

    let mut builder = reqwest::Client::builder().default_headers(headers);
    if let Some(timeout) = opts.timeout {
        debug!(?timeout, "HTTP timeout configured");
        builder = builder.timeout(timeout);
    }

    builder.build()
}

//! GitHub instance handling: hostnames and REST API base URLs.

use url::Url;

/// Known GitHub cloud hostname.
pub const GITHUB_COM: &str = "github.com";

/// REST API base for github.com.
pub const DEFAULT_API_URL: &str = "https://api.github.com/";

/// GitHub localhost for development.
const LOCALHOST: &str = "github.localhost";

/// Normalize a GitHub hostname by removing protocol and trailing slashes.
pub fn normalize_hostname(host: &str) -> String {
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);

    host.trim_end_matches('/').to_lowercase()
}

/// Check if a hostname is a GitHub.com cloud instance.
pub fn is_github_com(host: &str) -> bool {
    let normalized = normalize_hostname(host);
    normalized == GITHUB_COM || normalized == LOCALHOST
}

/// Get the REST API base URL for a given hostname.
pub fn rest_url(host: &str) -> String {
    let normalized = normalize_hostname(host);
    if is_github_com(&normalized) {
        DEFAULT_API_URL.to_string()
    } else {
        format!("https://{normalized}/api/v3/")
    }
}

/// Validate a user-supplied API base URL and make sure it ends with `/`.
///
/// Returns `None` for anything that is not an absolute http(s) URL.
pub fn normalize_api_url(raw: &str) -> Option<String> {
    let parsed = Url::parse(raw.trim()).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return None;
    }
    let mut url = parsed.to_string();
    if !url.ends_with('/') {
        url.push('/');
    }
    Some(url)
}

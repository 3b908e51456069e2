//! Repository that backs a quote collection.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::instance::{self, GITHUB_COM};

/// A GitHub repository identified by owner, name, and host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repo {
    owner: String,
    name: String,
    host: String,
}

impl Repo {
    /// Create a new repo on github.com.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            host: GITHUB_COM.to_string(),
        }
    }

    /// Create a new repo with a specific host.
    pub fn with_host(
        owner: impl Into<String>,
        name: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            host: instance::normalize_hostname(&host.into()),
        }
    }

    /// Parse a "OWNER/REPO" or "HOST/OWNER/REPO" string.
    pub fn from_full_name(nwo: &str) -> Result<Self, RepoParseError> {
        let parts: Vec<&str> = nwo.split('/').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(RepoParseError::InvalidFormat(nwo.to_string()));
        }
        match parts.as_slice() {
            [owner, name] => Ok(Self::new(*owner, *name)),
            [host, owner, name] => Ok(Self::with_host(*owner, *name, *host)),
            _ => Err(RepoParseError::InvalidFormat(nwo.to_string())),
        }
    }

    /// Parse a repository from its web URL, e.g. `https://github.com/sect/quotes`.
    pub fn from_url(u: &Url) -> Result<Self, RepoParseError> {
        let host = u
            .host_str()
            .ok_or_else(|| RepoParseError::InvalidUrl(u.to_string()))?;

        let path = u.path().trim_start_matches('/').trim_end_matches(".git");
        let parts: Vec<&str> = path.split('/').collect();

        match parts.as_slice() {
            [owner, name, ..] if !owner.is_empty() && !name.is_empty() => {
                Ok(Self::with_host(*owner, *name, host))
            }
            _ => Err(RepoParseError::InvalidUrl(u.to_string())),
        }
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// GitHub hostname.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Full name as "OWNER/REPO".
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// REST API base URL for this repository's host.
    pub fn api_url(&self) -> String {
        instance::rest_url(&self.host)
    }
}

impl FromStr for Repo {
    type Err = RepoParseError;

    /// Accepts `OWNER/REPO`, `HOST/OWNER/REPO`, or an http(s) URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with("https://") || s.starts_with("http://") {
            let u = Url::parse(s).map_err(|_| RepoParseError::InvalidUrl(s.to_string()))?;
            return Self::from_url(&u);
        }
        Self::from_full_name(s)
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if instance::is_github_com(&self.host) {
            write!(f, "{}/{}", self.owner, self.name)
        } else {
            write!(f, "{}/{}/{}", self.host, self.owner, self.name)
        }
    }
}

/// Errors from parsing repository references.
#[derive(Debug, thiserror::Error)]
pub enum RepoParseError {
    /// String does not match expected format.
    #[error("expected OWNER/REPO or HOST/OWNER/REPO format, got {0:?}")]
    InvalidFormat(String),
    /// URL does not contain repository information.
    #[error("cannot extract repository from URL: {0}")]
    InvalidUrl(String),
}

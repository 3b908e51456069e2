//! API error types.

/// Errors returned by the REST transport and the issue tracker.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Input rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Network/transport error.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse API response: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Build an HTTP error, pulling `message` out of a JSON error body when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| body.trim().to_string());
        Self::Http { status, message }
    }

    /// Check if this is a 404 Not Found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }

    /// Check if this is a 401 Unauthorized error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }

    /// HTTP status code, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

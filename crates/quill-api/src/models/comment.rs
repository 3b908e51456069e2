//! Issue comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::issue::{User, login_or_ghost};

/// Comment object as returned by the REST API.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueComment {
    /// Database id.
    pub id: u64,
    /// Author info.
    #[serde(default)]
    pub user: Option<User>,
    /// Body text.
    #[serde(default)]
    pub body: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

/// A comment on a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Comment id.
    pub id: u64,
    /// Author login.
    pub author: String,
    /// Body text, empty when the API sent none.
    pub body: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<IssueComment> for Comment {
    fn from(c: IssueComment) -> Self {
        Self {
            id: c.id,
            author: login_or_ghost(c.user.as_ref()).to_string(),
            body: c.body.unwrap_or_default(),
            created_at: c.created_at,
        }
    }
}

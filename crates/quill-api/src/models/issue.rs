//! Issue objects as returned by the REST API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Login shown when the API reports no user (deleted accounts).
pub const GHOST_LOGIN: &str = "ghost";

/// The subset of an API issue object that quotes are built from.
///
/// Other fields in the payload are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    /// Database id.
    pub id: u64,
    /// Issue number within the repository.
    pub number: u64,
    /// Title.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub body: Option<String>,
    /// Author info.
    #[serde(default)]
    pub user: Option<User>,
    /// Number of comments.
    #[serde(default)]
    pub comments: u64,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Reaction rollup.
    #[serde(default)]
    pub reactions: Option<Reactions>,
}

impl Issue {
    /// Login of the author, or [`GHOST_LOGIN`] when the account is gone.
    pub fn author(&self) -> &str {
        login_or_ghost(self.user.as_ref())
    }
}

pub(crate) fn login_or_ghost(user: Option<&User>) -> &str {
    user.map_or(GHOST_LOGIN, |u| u.login.as_str())
}

/// A GitHub user reference.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Login name.
    pub login: String,
}

/// Reaction counts attached to an issue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Reactions {
    /// Number of 👍 reactions.
    #[serde(rename = "+1", default)]
    pub plus_one: u64,
    /// Number of 👎 reactions.
    #[serde(rename = "-1", default)]
    pub minus_one: u64,
}

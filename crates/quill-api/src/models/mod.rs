//! Wire models and the projections built from them.

pub mod comment;
pub mod issue;
pub mod quote;
pub mod reaction;

pub use comment::{Comment, IssueComment};
pub use issue::{Issue, Reactions, User};
pub use quote::{Quote, Votes};
pub use reaction::{ReactionKind, ReactionParseError};

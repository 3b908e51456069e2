//! Quotes: the read-only projection of an issue labeled `quote`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use quill_core::fields::parse_quote_fields;

use super::issue::Issue;

/// Up/down vote tally taken from the `+1` and `-1` reactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Votes {
    /// Count of `+1` reactions.
    pub upvotes: u64,
    /// Count of `-1` reactions.
    pub downvotes: u64,
}

impl Votes {
    /// Upvotes minus downvotes.
    pub fn score(&self) -> i64 {
        i64::try_from(self.upvotes).unwrap_or(i64::MAX)
            - i64::try_from(self.downvotes).unwrap_or(i64::MAX)
    }
}

/// A quote derived from an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// Issue id.
    pub id: u64,
    /// Issue number.
    pub number: u64,
    /// The quote itself (issue title).
    pub text: String,
    /// Submitter login.
    pub author: String,
    /// Provenance, or the raw body when no source line is present.
    pub source: String,
    /// Category, or `"unknown"`.
    pub school: String,
    /// Vote tally.
    pub votes: Votes,
    /// Number of comments.
    pub comments_count: u64,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Issue> for Quote {
    fn from(issue: Issue) -> Self {
        let body = issue.body.as_deref();
        let fields = parse_quote_fields(body.unwrap_or_default());
        let votes = issue
            .reactions
            .as_ref()
            .map(|r| Votes {
                upvotes: r.plus_one,
                downvotes: r.minus_one,
            })
            .unwrap_or_default();

        Self {
            id: issue.id,
            number: issue.number,
            author: issue.author().to_string(),
            source: fields.source_or(body),
            school: fields.school_or_unknown(),
            votes,
            comments_count: issue.comments,
            created_at: issue.created_at,
            text: issue.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn issue(body: serde_json::Value, reactions: Option<serde_json::Value>) -> Issue {
        let mut v = json!({
            "id": 9001,
            "number": 5,
            "title": "A journey of a thousand li begins with a single step",
            "body": body,
            "user": {"login": "laozi"},
            "comments": 2,
            "created_at": "2024-01-15T12:00:00Z",
        });
        if let Some(r) = reactions {
            v["reactions"] = r;
        }
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_should_project_fields_from_body() {
        let q = Quote::from(issue(
            json!("source: Tao Te Ching\ncategory: Taoism\n\nChapter 64"),
            Some(json!({"+1": 3, "-1": 1})),
        ));

        assert_eq!(q.id, 9001);
        assert_eq!(q.number, 5);
        assert_eq!(q.text, "A journey of a thousand li begins with a single step");
        assert_eq!(q.author, "laozi");
        assert_eq!(q.source, "Tao Te Ching");
        assert_eq!(q.school, "Taoism");
        assert_eq!(
            q.votes,
            Votes {
                upvotes: 3,
                downvotes: 1
            }
        );
        assert_eq!(q.votes.score(), 2);
        assert_eq!(q.comments_count, 2);
    }

    #[test]
    fn test_should_fall_back_to_raw_body_and_unknown() {
        let q = Quote::from(issue(json!("just some words"), None));
        assert_eq!(q.source, "just some words");
        assert_eq!(q.school, "unknown");
        assert_eq!(q.votes, Votes::default());
    }

    #[test]
    fn test_should_fall_back_to_empty_source_without_body() {
        let q = Quote::from(issue(json!(null), None));
        assert_eq!(q.source, "");
        assert_eq!(q.school, "unknown");
    }

    #[test]
    fn test_should_read_legacy_prefixes() {
        let q = Quote::from(issue(json!("出处: 道德经\n门派: 道家"), None));
        assert_eq!(q.source, "道德经");
        assert_eq!(q.school, "道家");
    }

    #[test]
    fn test_should_serialize_with_nested_votes() {
        let q = Quote::from(issue(json!("category: Zen"), Some(json!({"+1": 1}))));
        let v = serde_json::to_value(&q).unwrap();
        assert_eq!(v["votes"], json!({"upvotes": 1, "downvotes": 0}));
        assert_eq!(v["school"], "Zen");
        assert_eq!(v["source"], "category: Zen");
        assert_eq!(v["created_at"], "2024-01-15T12:00:00Z");
    }
}

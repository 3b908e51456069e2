//! Reaction kinds accepted by the reactions endpoint.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// An emoji reaction token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReactionKind {
    /// 👍, counted as an upvote.
    #[serde(rename = "+1")]
    PlusOne,
    /// 👎, counted as a downvote.
    #[serde(rename = "-1")]
    MinusOne,
    /// 😄
    #[serde(rename = "laugh")]
    Laugh,
    /// 😕
    #[serde(rename = "confused")]
    Confused,
    /// ❤️
    #[serde(rename = "heart")]
    Heart,
    /// 🎉
    #[serde(rename = "hooray")]
    Hooray,
    /// 🚀
    #[serde(rename = "rocket")]
    Rocket,
    /// 👀
    #[serde(rename = "eyes")]
    Eyes,
}

impl ReactionKind {
    /// Every kind, in the order the API documents them.
    pub const ALL: [Self; 8] = [
        Self::PlusOne,
        Self::MinusOne,
        Self::Laugh,
        Self::Confused,
        Self::Heart,
        Self::Hooray,
        Self::Rocket,
        Self::Eyes,
    ];

    /// Token sent as `content`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlusOne => "+1",
            Self::MinusOne => "-1",
            Self::Laugh => "laugh",
            Self::Confused => "confused",
            Self::Heart => "heart",
            Self::Hooray => "hooray",
            Self::Rocket => "rocket",
            Self::Eyes => "eyes",
        }
    }
}

impl fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReactionKind {
    type Err = ReactionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        match token.as_str() {
            "up" => return Ok(Self::PlusOne),
            "down" => return Ok(Self::MinusOne),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == token)
            .ok_or_else(|| ReactionParseError(s.to_string()))
    }
}

/// Unrecognized reaction token.
#[derive(Debug, thiserror::Error)]
#[error("unknown reaction {0:?}, expected one of: +1, -1, laugh, confused, heart, hooray, rocket, eyes")]
pub struct ReactionParseError(pub String);

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("+1", ReactionKind::PlusOne)]
    #[case("up", ReactionKind::PlusOne)]
    #[case("-1", ReactionKind::MinusOne)]
    #[case("DOWN", ReactionKind::MinusOne)]
    #[case(" heart ", ReactionKind::Heart)]
    #[case("rocket", ReactionKind::Rocket)]
    fn test_should_parse_reaction(#[case] input: &str, #[case] expected: ReactionKind) {
        assert_eq!(input.parse::<ReactionKind>().unwrap(), expected);
    }

    #[rstest]
    #[case("thumbs")]
    #[case("")]
    #[case("+2")]
    fn test_should_reject_unknown_reaction(#[case] input: &str) {
        let err = input.parse::<ReactionKind>().unwrap_err();
        assert!(err.to_string().contains("expected one of"));
    }

    #[test]
    fn test_should_serialize_as_api_token() {
        for kind in ReactionKind::ALL {
            let v = serde_json::to_value(kind).unwrap();
            assert_eq!(v, serde_json::Value::String(kind.to_string()));
            assert_eq!(kind.as_str().parse::<ReactionKind>().unwrap(), kind);
        }
    }
}

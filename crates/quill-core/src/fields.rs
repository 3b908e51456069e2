//! Convention-based field extraction from issue bodies.
//!
//! A quote issue carries its provenance and category as labelled lines in
//! the body, for example:
//!
//! ```text
//! source: Zhuangzi, chapter 2
//! category: Daoist
//!
//! Longer commentary goes here.
//! ```
//!
//! Parsing is best effort: unknown lines are ignored and missing labels
//! simply leave the field unset.

/// Line prefixes that introduce the source field.
pub const SOURCE_PREFIXES: &[&str] = &["source:", "出处:"];

/// Line prefixes that introduce the category (school) field.
pub const SCHOOL_PREFIXES: &[&str] = &["category:", "门派:"];

/// Fallback school when the body carries no category line.
pub const UNKNOWN_SCHOOL: &str = "unknown";

/// Labelled fields found in an issue body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFields {
    /// Trimmed value of the last source line, if any.
    pub source: Option<String>,
    /// Trimmed value of the last category line, if any.
    pub school: Option<String>,
}

impl QuoteFields {
    /// Source to display, falling back to the whole body.
    ///
    /// An empty labelled value counts as missing.
    pub fn source_or(&self, body: Option<&str>) -> String {
        match self.source.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => body.unwrap_or_default().to_string(),
        }
    }

    /// School to display, falling back to [`UNKNOWN_SCHOOL`].
    pub fn school_or_unknown(&self) -> String {
        match self.school.as_deref() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => UNKNOWN_SCHOOL.to_string(),
        }
    }
}

/// Scan `body` line by line for the source and category labels.
///
/// A line is matched against the source prefixes first, so a single line
/// never sets both fields. Later matches overwrite earlier ones.
pub fn parse_quote_fields(body: &str) -> QuoteFields {
    let mut fields = QuoteFields::default();

    for line in body.lines() {
        if let Some(value) = strip_any_prefix(line, SOURCE_PREFIXES) {
            fields.source = Some(value.trim().to_string());
        } else if let Some(value) = strip_any_prefix(line, SCHOOL_PREFIXES) {
            fields.school = Some(value.trim().to_string());
        }
    }

    fields
}

fn strip_any_prefix<'a>(line: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|p| line.strip_prefix(p))
}

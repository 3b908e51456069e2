//! Text formatting helpers for terminal output.

use chrono::{DateTime, Utc};

/// Truncate a string to a maximum display width, appending "..." if truncated.
pub fn truncate(text: &str, max_width: usize) -> String {
    if max_width < 4 {
        return text.chars().take(max_width).collect();
    }

    let char_count: usize = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_width - 3).collect();
    format!("{truncated}...")
}

/// Format a duration as a human-readable fuzzy time string.
pub fn fuzzy_ago(duration: chrono::Duration) -> String {
    let seconds = duration.num_seconds();

    if seconds < 60 {
        return "less than a minute ago".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return pluralize(minutes, "minute", "minutes") + " ago";
    }

    let hours = minutes / 60;
    if hours < 24 {
        return pluralize(hours, "hour", "hours") + " ago";
    }

    let days = hours / 24;
    if days < 30 {
        return pluralize(days, "day", "days") + " ago";
    }

    let months = days / 30;
    if months < 12 {
        return pluralize(months, "month", "months") + " ago";
    }

    let years = months / 12;
    pluralize(years, "year", "years") + " ago"
}

/// Format a timestamp for display: fuzzy on a TTY, RFC 3339 otherwise.
pub fn relative_time_str(t: &DateTime<Utc>, is_tty: bool) -> String {
    if is_tty {
        let duration = Utc::now().signed_duration_since(*t);
        fuzzy_ago(duration)
    } else {
        t.to_rfc3339()
    }
}

/// Simple English pluralization.
pub fn pluralize(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Collapse runs of whitespace (including newlines) into single spaces.
///
/// Quote text and comment bodies are multi-line; table cells are not.
pub fn single_line(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }

    result.trim().to_string()
}

/// Display a URL without its scheme or trailing slash.
pub fn display_url(url: &str) -> String {
    let url = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    url.trim_end_matches('/').to_string()
}

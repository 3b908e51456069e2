//! Body text input shared by commands that send prose.

use std::path::Path;

use anyhow::{Context, Result};

use quill_core::iostreams::IOStreams;

/// Resolve a body from `--body`, or from `--body-file` where `-` reads stdin.
///
/// Returns `None` when neither flag was given.
pub(crate) fn read_body(
    ios: &IOStreams,
    body: Option<&str>,
    body_file: Option<&Path>,
) -> Result<Option<String>> {
    if let Some(text) = body {
        return Ok(Some(text.to_string()));
    }
    let Some(path) = body_file else {
        return Ok(None);
    };
    let text = if path == Path::new("-") {
        ios.read_stdin().context("failed to read from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read file: {}", path.display()))?
    };
    Ok(Some(text))
}

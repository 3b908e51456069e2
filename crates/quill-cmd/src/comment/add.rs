//! `quill comment add` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use quill_core::{ios_eprintln, ios_println};

use crate::body::read_body;

/// Add a comment to a quote.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Issue number of the quote.
    #[arg(value_name = "NUMBER")]
    number: u64,

    /// Repository in OWNER/REPO format.
    #[arg(short = 'R', long)]
    repo: Option<String>,

    /// Comment body text.
    #[arg(short, long, conflicts_with = "body_file", required_unless_present = "body_file")]
    body: Option<String>,

    /// Read body text from file (use "-" to read from standard input).
    #[arg(short = 'F', long, conflicts_with = "body")]
    body_file: Option<PathBuf>,
}

impl AddArgs {
    /// Run the comment add command.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is empty or unreadable, or the API
    /// request fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> Result<()> {
        let ios = &factory.io;
        let body = read_body(ios, self.body.as_deref(), self.body_file.as_deref())?
            .unwrap_or_default();
        if body.trim().is_empty() {
            anyhow::bail!("comment body cannot be empty");
        }

        let tracker = factory.tracker(self.repo.as_deref())?;
        let comment = tracker
            .try_add_comment(self.number, &body)
            .await
            .inspect_err(|e| crate::hints::explain(&factory.io, e))
            .with_context(|| format!("failed to comment on #{}", self.number))?;

        let cs = ios.color_scheme();
        ios_eprintln!(
            ios,
            "{} Commented on #{} in {}",
            cs.success_icon(),
            self.number,
            cs.bold(&tracker.repo().full_name()),
        );
        ios_println!(ios, "{}", comment.id);
        Ok(())
    }
}

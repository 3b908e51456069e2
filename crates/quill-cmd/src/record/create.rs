//! `quill record create` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use quill_core::text;
use quill_core::{ios_eprintln, ios_println};

use crate::body::read_body;

/// Create a new record.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Title for the record.
    #[arg(short, long)]
    title: String,

    /// Body text for the record.
    #[arg(short, long, conflicts_with = "body_file", required_unless_present = "body_file")]
    body: Option<String>,

    /// Read body text from file (use "-" to read from standard input).
    #[arg(short = 'F', long, conflicts_with = "body")]
    body_file: Option<PathBuf>,

    /// Repository in OWNER/REPO format.
    #[arg(short = 'R', long)]
    repo: Option<String>,
}

impl CreateArgs {
    /// Run the record create command.
    ///
    /// # Errors
    ///
    /// Returns an error if the title is empty, the body cannot be read, or
    /// the API request fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> Result<()> {
        if self.title.trim().is_empty() {
            anyhow::bail!("title cannot be blank");
        }
        let ios = &factory.io;
        let body = read_body(ios, self.body.as_deref(), self.body_file.as_deref())?
            .unwrap_or_default();

        let tracker = factory.tracker(self.repo.as_deref())?;
        let created = tracker
            .try_create_record(&self.title, &body)
            .await
            .inspect_err(|e| crate::hints::explain(&factory.io, e))
            .context("failed to create record")?;

        let number = created.get("number").and_then(Value::as_u64).unwrap_or(0);
        let cs = ios.color_scheme();
        ios_eprintln!(
            ios,
            "{} Created record #{number} in {}",
            cs.success_icon(),
            cs.bold(&tracker.repo().full_name()),
        );
        ios_println!(ios, "{}", text::display_url(super::html_url(&created)));
        Ok(())
    }
}

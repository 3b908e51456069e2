//! `quill record edit` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use quill_core::text;
use quill_core::{ios_eprintln, ios_println};

use crate::body::read_body;

/// Replace the title and body of a record.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Issue number of the record.
    #[arg(value_name = "NUMBER")]
    number: u64,

    /// New title.
    #[arg(short, long)]
    title: String,

    /// New body text.
    #[arg(short, long, conflicts_with = "body_file", required_unless_present = "body_file")]
    body: Option<String>,

    /// Read body text from file (use "-" to read from standard input).
    #[arg(short = 'F', long, conflicts_with = "body")]
    body_file: Option<PathBuf>,

    /// Repository in OWNER/REPO format.
    #[arg(short = 'R', long)]
    repo: Option<String>,
}

impl EditArgs {
    /// Run the record edit command.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be read or the API request fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> Result<()> {
        let ios = &factory.io;
        let body = read_body(ios, self.body.as_deref(), self.body_file.as_deref())?
            .unwrap_or_default();

        let tracker = factory.tracker(self.repo.as_deref())?;
        let updated = tracker
            .try_update_record(self.number, &self.title, &body)
            .await
            .inspect_err(|e| crate::hints::explain(&factory.io, e))
            .with_context(|| format!("failed to edit record #{}", self.number))?;

        let cs = ios.color_scheme();
        ios_eprintln!(
            ios,
            "{} Edited record #{} in {}",
            cs.success_icon(),
            self.number,
            cs.bold(&tracker.repo().full_name()),
        );
        ios_println!(ios, "{}", text::display_url(super::html_url(&updated)));
        Ok(())
    }
}

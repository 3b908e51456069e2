//! `quill comment list` command.

use anyhow::{Context, Result};
use clap::Args;

use quill_core::text;
use quill_core::{ios_eprintln, ios_println};

/// List the comments on a quote.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Issue number of the quote.
    #[arg(value_name = "NUMBER")]
    number: u64,

    /// Repository in OWNER/REPO format.
    #[arg(short = 'R', long)]
    repo: Option<String>,

    /// Output JSON.
    #[arg(long)]
    json: bool,
}

impl ListArgs {
    /// Run the comment list command.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be resolved or the API
    /// request fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> Result<()> {
        let tracker = factory.tracker(self.repo.as_deref())?;
        let comments = tracker
            .try_list_comments(self.number)
            .await
            .inspect_err(|e| crate::hints::explain(&factory.io, e))
            .with_context(|| format!("failed to list comments on #{}", self.number))?;

        let ios = &factory.io;

        if self.json {
            let json_output =
                serde_json::to_string_pretty(&comments).context("failed to serialize JSON")?;
            ios_println!(ios, "{json_output}");
            return Ok(());
        }

        if comments.is_empty() {
            ios_eprintln!(ios, "No comments on #{}", self.number);
            return Ok(());
        }

        let cs = ios.color_scheme();
        let is_tty = ios.is_stdout_tty();
        for (i, comment) in comments.iter().enumerate() {
            if i > 0 {
                ios_println!(ios);
            }
            ios_println!(
                ios,
                "{} {}",
                cs.bold(&comment.author),
                cs.gray(&text::relative_time_str(&comment.created_at, is_tty)),
            );
            ios_println!(ios, "{}", comment.body.trim_end());
        }
        Ok(())
    }
}

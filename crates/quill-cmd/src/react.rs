//! `quill react` command.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use quill_api::models::ReactionKind;
use quill_core::{ios_eprintln, ios_println};

/// React to a quote. `+1` and `-1` count as votes.
#[derive(Debug, Args)]
pub struct ReactArgs {
    /// Issue number of the quote.
    #[arg(value_name = "NUMBER")]
    number: u64,

    /// Reaction: +1, -1, laugh, confused, heart, hooray, rocket, eyes (or up/down).
    #[arg(value_name = "KIND", default_value = "+1", allow_hyphen_values = true)]
    kind: ReactionKind,

    /// Repository in OWNER/REPO format.
    #[arg(short = 'R', long)]
    repo: Option<String>,
}

impl ReactArgs {
    /// Run the react command.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be resolved or the API
    /// request fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> Result<()> {
        let tracker = factory.tracker(self.repo.as_deref())?;
        let reaction = tracker
            .try_add_reaction(self.number, self.kind)
            .await
            .inspect_err(|e| crate::hints::explain(&factory.io, e))
            .with_context(|| format!("failed to react to #{}", self.number))?;

        let ios = &factory.io;
        let cs = ios.color_scheme();
        ios_eprintln!(
            ios,
            "{} Reacted {} to #{} in {}",
            cs.success_icon(),
            self.kind,
            self.number,
            cs.bold(&tracker.repo().full_name()),
        );
        if let Some(id) = reaction.get("id").and_then(Value::as_u64) {
            ios_println!(ios, "{id}");
        }
        Ok(())
    }
}

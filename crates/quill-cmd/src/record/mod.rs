//! Record commands (`quill record`).
//!
//! Records are issues labeled `record`. Closing one is the closest the
//! issues API offers to deleting it.

pub mod close;
pub mod create;
pub mod edit;

use clap::Subcommand;
use serde_json::Value;

/// Create, edit, and close records.
#[derive(Debug, Subcommand)]
pub enum RecordCommand {
    /// Close a record.
    Close(close::CloseArgs),
    /// Create a new record.
    Create(create::CreateArgs),
    /// Replace the title and body of a record.
    Edit(edit::EditArgs),
}

impl RecordCommand {
    /// Run the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> anyhow::Result<()> {
        match self {
            Self::Close(args) => args.run(factory).await,
            Self::Create(args) => args.run(factory).await,
            Self::Edit(args) => args.run(factory).await,
        }
    }
}

fn html_url(issue: &Value) -> &str {
    issue.get("html_url").and_then(Value::as_str).unwrap_or("")
}

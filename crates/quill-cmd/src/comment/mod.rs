//! Comment commands (`quill comment`).

pub mod add;
pub mod list;

use clap::Subcommand;

/// Read and write comments on a quote.
#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    /// Add a comment to a quote.
    Add(add::AddArgs),
    /// List the comments on a quote.
    List(list::ListArgs),
}

impl CommentCommand {
    /// Run the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> anyhow::Result<()> {
        match self {
            Self::Add(args) => args.run(factory).await,
            Self::List(args) => args.run(factory).await,
        }
    }
}

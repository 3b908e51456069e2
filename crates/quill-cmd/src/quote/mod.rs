//! Quote commands (`quill quote`).

pub mod list;

use clap::Subcommand;

/// Browse quotes.
#[derive(Debug, Subcommand)]
pub enum QuoteCommand {
    /// List open quotes in a repository.
    List(list::ListArgs),
}

impl QuoteCommand {
    /// Run the selected subcommand.
    ///
    /// # Errors
    ///
    /// Returns an error if the subcommand fails.
    pub async fn run(&self, factory: &crate::factory::Factory) -> anyhow::Result<()> {
        match self {
            Self::List(args) => args.run(factory).await,
        }
    }
}

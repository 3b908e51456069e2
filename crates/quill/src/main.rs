//! quill - keep quotes and personal records in GitHub issues.
//!
//! Quotes are open issues labeled `quote`; records are issues labeled
//! `record`.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use quill_cmd::factory::Factory;

mod exit_codes {
    pub const OK: i32 = 0;
    pub const ERROR: i32 = 1;
}

/// Browse quotes and keep records in GitHub issues.
#[derive(Debug, Parser)]
#[command(
    name = "quill",
    version,
    about = "Browse quotes and keep records in GitHub issues",
    long_about = "Browse quotes, vote and comment on them, and keep personal records, \
                  all stored as issues in a GitHub repository."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Read and write comments on a quote.
    #[command(subcommand)]
    Comment(quill_cmd::comment::CommentCommand),
    /// Manage configuration for quill.
    #[command(subcommand)]
    Config(quill_cmd::config::ConfigCommand),
    /// Browse quotes.
    #[command(subcommand)]
    Quote(quill_cmd::quote::QuoteCommand),
    /// React to a quote (`+1` and `-1` count as votes).
    React(quill_cmd::react::ReactArgs),
    /// Create, edit, and close records.
    #[command(subcommand)]
    Record(quill_cmd::record::RecordCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("QUILL_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let factory = Factory::new(env!("CARGO_PKG_VERSION").to_string());

    let exit_code = if let Some(cmd) = cli.command {
        match run_command(cmd, &factory).await {
            Ok(()) => exit_codes::OK,
            Err(e) => {
                tracing::error!("{e:#}");
                exit_codes::ERROR
            }
        }
    } else {
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        exit_codes::OK
    };

    std::process::exit(exit_code);
}

async fn run_command(cmd: Commands, factory: &Factory) -> anyhow::Result<()> {
    match cmd {
        Commands::Comment(sub) => sub.run(factory).await,
        Commands::Config(sub) => sub.run(factory),
        Commands::Quote(sub) => sub.run(factory).await,
        Commands::React(args) => args.run(factory).await,
        Commands::Record(sub) => sub.run(factory).await,
    }
}

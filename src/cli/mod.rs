//! CLI adapter for coderank
//!
//! Provides the command-line interface over `core/`. Argument parsing,
//! output formatting and exit codes live here; the core never prints.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// coderank - BM25 code search
///
/// Indexes a directory tree in memory and ranks files against a
/// free-text query. Nothing is written to disk.
#[derive(Parser, Debug)]
#[command(name = "coderank")]
#[command(author = "RHOBIMD HEALTH")]
#[command(version)]
#[command(about = "In-memory BM25 code search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Log debug details to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log line format (stderr)
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank files under a path against a query
    Search(commands::SearchArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  coderank completions bash > ~/.local/share/bash-completion/completions/coderank
    ///   zsh:   coderank completions zsh > ~/.zfunc/_coderank
    ///   fish:  coderank completions fish > ~/.config/fish/completions/coderank.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::CodeSearch;
    use std::sync::Arc;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    config.log_config();

    let service = Arc::new(CodeSearch::new(config));

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &service, cli.format).await,
        Commands::ShowConfig(args) => {
            commands::config::execute(args, &service, cli.format).await
        }
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

/// Process exit code for an error returned by [`run`]
///
/// 124 for an expired `--timeout-secs` deadline (as `timeout(1)` does),
/// 2 for rejected input or configuration, 1 otherwise.
pub fn exit_code(err: &(dyn std::error::Error + 'static)) -> i32 {
    match err.downcast_ref::<crate::core::error::CodeRankError>() {
        Some(e) if e.is_timeout() => 124,
        Some(e) if e.is_bad_request() => 2,
        _ => 1,
    }
}

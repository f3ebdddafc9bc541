//! coderank CLI - rank files in a directory tree against a query
//!
//! # Examples
//!
//! ```bash
//! # Search the current directory
//! coderank search "tokenize input"
//!
//! # Only Python files, top 5, as JSON
//! coderank --format json search "def parse" src/ -i '*.py' -n 5
//!
//! # Show configuration
//! coderank show-config
//! ```

use clap::Parser;
use coderank::cli::{exit_code, output, run, Cli, LogFormat};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(cli: &Cli) {
    let default_directive = if cli.verbose {
        "coderank=debug"
    } else {
        "coderank=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // stdout carries results; logs go to stderr
    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(exit_code(e.as_ref()));
    }
}

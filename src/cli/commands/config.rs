//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::CodeSearch;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// File the configuration was loaded from, `None` for defaults
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: Config,
}

impl ConfigResponse {
    /// Describe `config` as loaded from the file `Config::load` resolves
    pub fn resolve(config: Config) -> Self {
        Self {
            config_file: Config::config_file().map(|p| p.to_string_lossy().into_owned()),
            config,
        }
    }
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    service: &Arc<CodeSearch>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse::resolve(service.config().clone());

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            println!("Configuration:");
            match &response.config_file {
                Some(path) => println!("  config_file: {path}"),
                None => println!(
                    "  config_file: none ({} not found, using defaults)",
                    Config::default_config_file().display()
                ),
            }
            println!("  engine:");
            println!("    k1: {}", config.engine.k1);
            println!("    b: {}", config.engine.b);
            println!("  search:");
            println!("    max_results: {}", config.search.max_results);
            println!("    max_query_length: {}", config.search.max_query_length);
            println!("  indexing:");
            println!(
                "    include_patterns: {:?}",
                config.indexing.include_patterns
            );
            println!(
                "    exclude_patterns: {:?}",
                config.indexing.exclude_patterns
            );
            println!("    parallel_reads: {}", config.indexing.parallel_reads);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

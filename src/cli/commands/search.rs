//! Search command - rank files under a path against a query

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::error::CodeRankError;
use crate::core::services::CodeSearch;
use crate::core::types::{SearchOptions, SearchRequest, SearchResponse};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text query (punctuation is ignored, matching is case-insensitive)
    pub query: String,

    /// File or directory to search
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Only search files whose name matches this glob (repeatable)
    #[arg(long, short = 'i')]
    pub include: Vec<String>,

    /// Skip files whose name matches this glob (repeatable)
    #[arg(long, short = 'e')]
    pub exclude: Vec<String>,

    /// Maximum number of results; 0 or negative for all
    #[arg(long, short = 'n', allow_negative_numbers = true)]
    pub max_results: Option<i64>,

    /// Give up after this many seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Only print file paths
    #[arg(long)]
    pub files_only: bool,
}

impl SearchArgs {
    /// Build the core request, falling back to configured defaults
    pub fn to_request(&self, service: &CodeSearch) -> SearchRequest {
        let defaults = service.default_options();
        let options = SearchOptions {
            include_globs: (!self.include.is_empty()).then(|| self.include.clone()),
            exclude_globs: (!self.exclude.is_empty()).then(|| self.exclude.clone()),
            max_results: self.max_results.unwrap_or(defaults.max_results),
        };
        SearchRequest::new(self.query.clone(), self.path.clone()).with_options(options)
    }
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    service: &Arc<CodeSearch>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let max_len = service.config().search.max_query_length;
    if args.query.chars().count() > max_len {
        return Err(CodeRankError::InvalidQuery(format!(
            "Query exceeds maximum length of {max_len} characters"
        ))
        .into());
    }

    let request = args.to_request(service);
    let response = match args.timeout_secs {
        Some(secs) => {
            service
                .search_with_deadline(request, Duration::from_secs(secs))
                .await?
        }
        None => service.search(&request)?,
    };

    match format {
        OutputFormat::Human => print_human(&response, args.files_only),
        OutputFormat::Json => output::print_output(&response, format),
    }

    Ok(())
}

fn print_human(response: &SearchResponse, files_only: bool) {
    if files_only {
        for hit in &response.results {
            println!("{}", colors::file_path(&hit.path));
        }
        return;
    }

    if response.results.is_empty() {
        println!(
            "No results found for '{}' in {}",
            colors::label(&response.query),
            colors::file_path(&response.root)
        );
    } else {
        println!(
            "Found {} result(s) for '{}' in {}:\n",
            colors::number(&response.count.to_string()),
            colors::label(&response.query),
            colors::file_path(&response.root)
        );

        for (i, hit) in response.results.iter().enumerate() {
            println!("{}", output::format_hit(i + 1, hit));
        }
        println!();
    }

    if response.total_matches > response.count {
        println!(
            "{}",
            colors::dim(&format!(
                "{} more match(es) not shown",
                response.total_matches - response.count
            ))
        );
    }
    println!(
        "{}",
        colors::dim(&format!(
            "{} file(s) indexed, {} skipped in {}",
            response.stats.files_indexed,
            response.stats.files_skipped,
            output::format_duration(response.duration_ms as f64 / 1000.0)
        ))
    );
    if response.stats.lossy_decodes > 0 {
        output::print_warning(&format!(
            "{} file(s) contained invalid UTF-8 and were indexed partially",
            response.stats.lossy_decodes
        ));
    }
}

//! Output formatting for CLI commands
//!
//! Results go to stdout, either as colored text or as pretty JSON.
//! Warnings and errors go to stderr. Coloring is handled by `colored`,
//! which honors NO_COLOR and non-tty output.

use crate::cli::OutputFormat;
use crate::core::types::SearchHit;

/// Styles shared by every command
pub mod colors {
    use colored::{ColoredString, Colorize};

    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// BM25 scores
    pub fn score(s: &str) -> ColoredString {
        s.magenta()
    }

    /// 1-based position in the ranking
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Format an elapsed time in seconds: `250ms`, `1.50s`, `2m 5.0s`
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let rest = secs - mins * 60.0;
        format!("{mins:.0}m {rest:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        format!("{:.0}ms", secs * 1000.0)
    }
}

/// Score with four decimals, the precision shown in rankings
pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}

/// One ranking line: `[1] src/lib.rs (score: 1.2345)`
pub fn format_hit(position: usize, hit: &SearchHit) -> String {
    format!(
        "[{}] {} {}",
        colors::rank(&position.to_string()),
        colors::file_path(&hit.path),
        colors::score(&format!("(score: {})", format_score(hit.score)))
    )
}

/// Print any serializable response as pretty JSON.
///
/// Human output is command specific, so callers only route JSON here;
/// a human request still falls back to JSON rather than printing nothing.
pub fn print_output<T: serde::Serialize>(data: &T, format: OutputFormat) {
    if format == OutputFormat::Human {
        tracing::debug!("No human renderer given, printing JSON");
    }
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Failed to serialize output: {e}")),
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

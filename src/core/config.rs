//! Configuration management for coderank.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! Nothing here is read implicitly by the engine: callers load a
//! `Config` and pass the relevant sections down explicitly.

use crate::core::error::{CodeRankError, Result};
use crate::core::types::DEFAULT_MAX_RESULTS;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub indexing: IndexingConfig,
}

/// BM25 parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Term-frequency saturation
    #[serde(default = "default_k1")]
    pub k1: f64,

    /// Length-normalization strength (0 disables it)
    #[serde(default = "default_b")]
    pub b: f64,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results; non-positive means unlimited
    #[serde(default = "default_max_results")]
    pub max_results: i64,

    /// Maximum query string length accepted by the CLI
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Corpus building configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Filename globs a file must match (any of) when non-empty
    #[serde(default)]
    pub include_patterns: Vec<String>,

    /// Filename globs a file must not match
    #[serde(default)]
    pub exclude_patterns: Vec<String>,

    /// Read file contents on the rayon thread pool
    #[serde(default = "default_parallel_reads")]
    pub parallel_reads: bool,
}

// Default value functions
fn default_k1() -> f64 {
    1.5
}

fn default_b() -> f64 {
    0.75
}

fn default_max_results() -> i64 {
    DEFAULT_MAX_RESULTS
}

fn default_max_query_length() -> usize {
    1000
}

fn default_parallel_reads() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            k1: default_k1(),
            b: default_b(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            parallel_reads: default_parallel_reads(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CodeRankError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`$XDG_CONFIG_HOME/coderank/config.toml`)
    pub fn default_config_file() -> PathBuf {
        let base = env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .ok()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("coderank").join("config.toml")
    }

    /// The file [`Config::load`] reads, if any.
    ///
    /// Lookup order:
    /// 1. CODERANK_CONFIG env var (used even when missing, so loading fails)
    /// 2. XDG config file (~/.config/coderank/config.toml)
    /// 3. ./coderank.toml
    ///
    /// `None` means defaults are used.
    pub fn config_file() -> Option<PathBuf> {
        if let Ok(config_path) = env::var("CODERANK_CONFIG") {
            return Some(PathBuf::from(config_path));
        }
        let xdg_config = Self::default_config_file();
        if xdg_config.exists() {
            return Some(xdg_config);
        }
        let local = PathBuf::from("coderank.toml");
        local.exists().then_some(local)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// The TOML file is the one [`Config::config_file`] resolves.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_file() {
            Some(path) => {
                tracing::debug!("Loading config from {:?}", path);
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    ///
    /// Values that fail to parse are ignored.
    pub fn merge_env(&mut self) {
        if let Ok(k1) = env::var("CODERANK_K1") {
            if let Ok(k1) = k1.parse() {
                self.engine.k1 = k1;
            }
        }
        if let Ok(b) = env::var("CODERANK_B") {
            if let Ok(b) = b.parse() {
                self.engine.b = b;
            }
        }

        if let Ok(max_results) = env::var("CODERANK_MAX_RESULTS") {
            if let Ok(n) = max_results.parse() {
                self.search.max_results = n;
            }
        }
        if let Ok(max_query_len) = env::var("CODERANK_MAX_QUERY_LENGTH") {
            if let Ok(len) = max_query_len.parse() {
                self.search.max_query_length = len;
            }
        }

        if let Ok(parallel) = env::var("CODERANK_PARALLEL_READS") {
            if let Ok(p) = parallel.parse() {
                self.indexing.parallel_reads = p;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.engine.k1.is_finite() || self.engine.k1 < 0.0 {
            return Err(CodeRankError::ConfigError(format!(
                "k1 must be a non-negative number, got {}",
                self.engine.k1
            )));
        }

        if !self.engine.b.is_finite() || !(0.0..=1.0).contains(&self.engine.b) {
            return Err(CodeRankError::ConfigError(format!(
                "b must be between 0 and 1, got {}",
                self.engine.b
            )));
        }

        if self.search.max_query_length == 0 {
            return Err(CodeRankError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  k1: {}", self.engine.k1);
        tracing::info!("  b: {}", self.engine.b);
        tracing::info!("  Max results: {}", self.search.max_results);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!(
            "  Include patterns: {:?}",
            self.indexing.include_patterns
        );
        tracing::info!(
            "  Exclude patterns: {:?}",
            self.indexing.exclude_patterns
        );
        tracing::info!("  Parallel reads: {}", self.indexing.parallel_reads);
    }
}

//! Core domain types shared by the engine, the corpus builder and
//! the CLI adapter.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default number of results returned by a search
pub const DEFAULT_MAX_RESULTS: i64 = 20;

/// A document fed to the search engine: an identifier (the file path
/// relative to the search root) and its full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub content: String,
}

impl Document {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
        }
    }

    /// Length used for BM25 normalization: characters, not tokens
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

impl<I: Into<String>, C: Into<String>> From<(I, C)> for Document {
    fn from((id, content): (I, C)) -> Self {
        Self::new(id, content)
    }
}

/// A single ranked match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Path relative to the search root
    pub path: String,
    pub score: f64,
}

impl SearchHit {
    pub fn new(path: impl Into<String>, score: f64) -> Self {
        Self {
            path: path.into(),
            score,
        }
    }
}

/// Statistics gathered while building a corpus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusStats {
    /// Files that passed the include/exclude filters
    pub files_seen: usize,
    /// Files whose content made it into the corpus
    pub files_indexed: usize,
    /// Files that could not be opened at all
    pub files_skipped: usize,
    /// Files indexed with invalid UTF-8 sequences dropped
    pub lossy_decodes: usize,
    pub duration_ms: u64,
}

/// Per-request search options.
///
/// `None` for a pattern list uses the configured patterns
/// (`indexing.include_patterns` / `indexing.exclude_patterns`); an
/// explicit empty list means no filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub include_globs: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_globs: Option<Vec<String>>,
    /// Non-positive means unlimited
    #[serde(default = "default_max_results")]
    pub max_results: i64,
}

fn default_max_results() -> i64 {
    DEFAULT_MAX_RESULTS
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_globs: None,
            exclude_globs: None,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include<I, S>(mut self, globs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_globs = Some(globs.into_iter().map(Into::into).collect());
        self
    }

    pub fn exclude<I, S>(mut self, globs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_globs = Some(globs.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_results(mut self, max_results: i64) -> Self {
        self.max_results = max_results;
        self
    }
}

/// A complete search request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub root: PathBuf,
    #[serde(default)]
    pub options: SearchOptions,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            query: query.into(),
            root: root.into(),
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }
}

/// Search response with ranking and corpus statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub root: String,
    pub results: Vec<SearchHit>,
    /// Number of returned results
    pub count: usize,
    /// Number of documents with a score, before truncation
    pub total_matches: usize,
    pub stats: CorpusStats,
    pub duration_ms: u64,
}

impl SearchResponse {
    /// An empty response for the given request
    pub fn empty(request: &SearchRequest) -> Self {
        Self {
            query: request.query.clone(),
            root: request.root.display().to_string(),
            results: Vec::new(),
            count: 0,
            total_matches: 0,
            stats: CorpusStats::default(),
            duration_ms: 0,
        }
    }

    /// The ranking as plain `(path, score)` pairs
    pub fn into_pairs(self) -> Vec<(String, f64)> {
        self.results.into_iter().map(|h| (h.path, h.score)).collect()
    }
}

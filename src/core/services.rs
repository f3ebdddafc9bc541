//! Code search service
//!
//! Ties the corpus builder, the engine and result assembly together.
//! One engine is built per request and dropped afterwards.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::config::Config;
use crate::core::error::{CodeRankError, Result};
use crate::core::indexer::CorpusBuilder;
use crate::core::search::{rank, SearchEngine};
use crate::core::tokenizer::tokenize;
use crate::core::types::{SearchOptions, SearchRequest, SearchResponse};

/// Search service holding the configuration every request starts from
#[derive(Debug, Clone, Default)]
pub struct CodeSearch {
    config: Arc<Config>,
}

impl CodeSearch {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Request options seeded with the configured limit and patterns
    pub fn default_options(&self) -> SearchOptions {
        SearchOptions {
            include_globs: None,
            exclude_globs: None,
            max_results: self.config.search.max_results,
        }
    }

    /// Corpus builder for a request; unset pattern lists fall back to
    /// the configured ones
    pub fn builder_for(&self, options: &SearchOptions) -> CorpusBuilder {
        let indexing = &self.config.indexing;
        CorpusBuilder::new(
            options
                .include_globs
                .clone()
                .unwrap_or_else(|| indexing.include_patterns.clone()),
            options
                .exclude_globs
                .clone()
                .unwrap_or_else(|| indexing.exclude_patterns.clone()),
            indexing.parallel_reads,
        )
    }

    /// Run a search: build the corpus, index it, score and rank.
    ///
    /// An empty query or a missing root gives an empty response before
    /// anything else is looked at. Ordinary input never fails.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        self.search_cancellable(request, &AtomicBool::new(false))
    }

    fn search_cancellable(
        &self,
        request: &SearchRequest,
        cancel: &AtomicBool,
    ) -> Result<SearchResponse> {
        let start = Instant::now();
        let mut response = SearchResponse::empty(request);

        if tokenize(&request.query).is_empty() || !request.root.exists() {
            tracing::debug!(
                "Nothing to search: query {:?}, root {:?}",
                request.query,
                request.root
            );
            return Ok(response);
        }

        let corpus = self
            .builder_for(&request.options)
            .build_cancellable(&request.root, cancel);
        response.stats = corpus.stats;
        if corpus.documents.is_empty() || cancel.load(Ordering::Relaxed) {
            response.duration_ms = start.elapsed().as_millis() as u64;
            return Ok(response);
        }

        let mut engine = SearchEngine::new(&self.config.engine);
        engine.bulk_index(corpus.documents);

        let scores = engine.search(&request.query);
        response.total_matches = scores.len();
        response.results = rank(scores, request.options.max_results);
        response.count = response.results.len();
        response.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Search {:?}: {} of {} matches across {} documents in {}ms",
            request.query,
            response.count,
            response.total_matches,
            engine.document_count(),
            response.duration_ms
        );

        Ok(response)
    }

    /// Run a search on the blocking pool, giving up after `deadline`.
    ///
    /// On expiry the walk is told to stop, partial results are discarded
    /// and `SearchTimedOut` is returned.
    pub async fn search_with_deadline(
        &self,
        request: SearchRequest,
        deadline: Duration,
    ) -> Result<SearchResponse> {
        let cancel = Arc::new(AtomicBool::new(false));
        let service = self.clone();
        let task_cancel = Arc::clone(&cancel);

        let task = tokio::task::spawn_blocking(move || {
            service.search_cancellable(&request, &task_cancel)
        });

        match tokio::time::timeout(deadline, task).await {
            Ok(Ok(result)) => result,
            Ok(Err(e)) => Err(CodeRankError::SearchAborted(e.to_string())),
            Err(_) => {
                cancel.store(true, Ordering::Relaxed);
                tracing::warn!("Search timed out after {:?}", deadline);
                Err(CodeRankError::SearchTimedOut(deadline))
            }
        }
    }
}

/// Search `root` for `query` with default engine settings.
///
/// Returns `(relative path, score)` pairs, best first, at most
/// `options.max_results` of them (all when non-positive). Paths are
/// relative to `root`; when `root` is itself a file, its single hit is
/// named by the file name (`"solo.py"`), not `"."`.
///
/// Returns `Ok` for every query, root and pattern; unreadable files and
/// malformed patterns degrade instead of failing.
pub fn code_search(
    query: &str,
    root: impl AsRef<Path>,
    options: &SearchOptions,
) -> Result<Vec<(String, f64)>> {
    let request =
        SearchRequest::new(query, root.as_ref().to_path_buf()).with_options(options.clone());
    let response = CodeSearch::default().search(&request)?;
    Ok(response.into_pairs())
}

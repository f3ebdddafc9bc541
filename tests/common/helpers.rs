// Test helper functions

use coderank::core::config::Config;
use coderank::core::services::CodeSearch;
use coderank::{SearchHit, SearchOptions, SearchRequest, SearchResponse};
use std::path::Path;

/// Create a search service with default configuration
#[allow(dead_code)] // Used in integration tests
pub fn create_test_service() -> CodeSearch {
    CodeSearch::new(Config::default())
}

/// Run a search over a repository with the given options
#[allow(dead_code)] // Used in integration tests
pub fn search_repo(root: &Path, query: &str, options: SearchOptions) -> SearchResponse {
    create_test_service()
        .search(&SearchRequest::new(query, root).with_options(options))
        .expect("Search failed")
}

/// Paths of the hits, in rank order
#[allow(dead_code)] // Used in integration tests
pub fn paths(hits: &[SearchHit]) -> Vec<&str> {
    hits.iter().map(|h| h.path.as_str()).collect()
}

/// Assert that hits are sorted by descending score
#[allow(dead_code)] // Used in integration tests
pub fn assert_descending(hits: &[SearchHit]) {
    for pair in hits.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "Expected descending scores, got {} then {}",
            pair[0].score,
            pair[1].score
        );
    }
}

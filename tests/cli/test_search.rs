//! Tests for the search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Valid queries with results
//! - Empty results and missing roots
//! - Query length and pattern errors
//! - Deadlines and output format variations

use crate::common::TestRepo;
use coderank::cli::commands::search::{execute, SearchArgs};
use coderank::cli::OutputFormat;
use coderank::{CodeRankError, CodeSearch, Config};
use std::path::Path;
use std::sync::Arc;

fn service() -> Arc<CodeSearch> {
    Arc::new(CodeSearch::new(Config::default()))
}

fn args(query: &str, path: &Path) -> SearchArgs {
    SearchArgs {
        query: query.to_string(),
        path: path.to_path_buf(),
        include: vec![],
        exclude: vec![],
        max_results: None,
        timeout_secs: None,
        files_only: false,
    }
}

/// Test search with valid query returning results
#[tokio::test]
async fn test_search_valid_query_human() {
    let repo = TestRepo::small();

    let result = execute(args("helper", repo.path()), &service(), OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search with valid query in JSON format
#[tokio::test]
async fn test_search_valid_query_json() {
    let repo = TestRepo::small();
    let mut args = args("fn main", repo.path());
    args.max_results = Some(3);

    let result = execute(args, &service(), OutputFormat::Json).await;
    assert!(
        result.is_ok(),
        "JSON search should succeed: {:?}",
        result.err()
    );
}

/// Test search with no matches
#[tokio::test]
async fn test_search_empty_results() {
    let repo = TestRepo::small();

    let result = execute(
        args("nonexistent_symbol_xyz", repo.path()),
        &service(),
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_ok(), "Search with no results should succeed");
}

/// Test search over a path that does not exist
#[tokio::test]
async fn test_search_missing_root() {
    let result = execute(
        args("anything", Path::new("/nonexistent/coderank/root")),
        &service(),
        OutputFormat::Json,
    )
    .await;
    assert!(result.is_ok(), "Missing root yields an empty result");
}

/// Test files-only output with filters
#[tokio::test]
async fn test_search_files_only_with_filters() {
    let repo = TestRepo::small();
    let mut args = args("pub fn", repo.path());
    args.include = vec!["*.rs".to_string()];
    args.exclude = vec!["db.rs".to_string()];
    args.files_only = true;
    args.max_results = Some(-1);

    let result = execute(args, &service(), OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test search with patterns the glob syntax alone would reject
#[tokio::test]
async fn test_search_fnmatch_patterns_accepted() {
    let repo = TestRepo::small();
    let mut args = args("fn", repo.path());
    args.include = vec!["[unclosed".to_string(), "main**.rs".to_string()];
    args.exclude = vec!["[draft".to_string()];

    let result = execute(args, &service(), OutputFormat::Json).await;
    assert!(result.is_ok(), "fnmatch patterns should be accepted: {:?}", result.err());
}

/// Test that an empty query succeeds whatever the patterns
#[tokio::test]
async fn test_search_empty_query_with_bracket_pattern() {
    let repo = TestRepo::small();
    let mut args = args("", repo.path());
    args.include = vec!["[oops".to_string()];

    let result = execute(args, &service(), OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test search with a query over the configured length
#[tokio::test]
async fn test_search_query_too_long() {
    let repo = TestRepo::small();
    let mut config = Config::default();
    config.search.max_query_length = 10;
    let service = Arc::new(CodeSearch::new(config));

    let err = execute(args("a query longer than ten", repo.path()), &service, OutputFormat::Human)
        .await
        .expect_err("Long query should fail");
    assert!(matches!(
        err.downcast_ref::<CodeRankError>(),
        Some(CodeRankError::InvalidQuery(_))
    ));
    assert_eq!(coderank::cli::exit_code(err.as_ref()), 2);
}

/// Test search with a generous deadline
#[tokio::test]
async fn test_search_with_timeout() {
    let repo = TestRepo::medium();
    let mut args = args("func_7", repo.path());
    args.timeout_secs = Some(60);

    let result = execute(args, &service(), OutputFormat::Json).await;
    assert!(result.is_ok(), "Search within deadline should succeed");
}

/// Test that arguments fall back to the configured defaults
#[test]
fn test_to_request_uses_config_defaults() {
    let mut config = Config::default();
    config.search.max_results = 3;
    let service = CodeSearch::new(config);

    let request = args("foo", Path::new("src")).to_request(&service);
    assert_eq!(request.options.max_results, 3);
    assert!(request.options.include_globs.is_none());
    assert!(request.options.exclude_globs.is_none());

    let mut explicit = args("foo", Path::new("src"));
    explicit.max_results = Some(0);
    explicit.include = vec!["*.py".to_string()];
    let request = explicit.to_request(&service);
    assert_eq!(request.options.max_results, 0);
    assert_eq!(request.options.include_globs, Some(vec!["*.py".to_string()]));
}

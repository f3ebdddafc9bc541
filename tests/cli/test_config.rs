//! Tests for the show-config CLI command

use coderank::cli::commands::config::{execute, ConfigArgs, ConfigResponse};
use coderank::cli::OutputFormat;
use coderank::{CodeSearch, Config};
use serial_test::serial;
use std::sync::Arc;

/// Test show-config in human format
#[tokio::test]
async fn test_config_human() {
    let service = Arc::new(CodeSearch::new(Config::default()));

    let result = execute(ConfigArgs {}, &service, OutputFormat::Human).await;
    assert!(result.is_ok(), "show-config should succeed: {:?}", result.err());
}

/// Test show-config in JSON format
#[tokio::test]
async fn test_config_json() {
    let mut config = Config::default();
    config.indexing.include_patterns = vec!["*.rs".to_string()];
    let service = Arc::new(CodeSearch::new(config));

    let result = execute(ConfigArgs {}, &service, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Test that the JSON response flattens the config sections
#[test]
fn test_config_response_shape() {
    let response = ConfigResponse {
        config_file: Some("/tmp/coderank/config.toml".to_string()),
        config: Config::default(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["config_file"], "/tmp/coderank/config.toml");
    assert_eq!(json["engine"]["k1"], 1.5);
    assert_eq!(json["engine"]["b"], 0.75);
    assert_eq!(json["search"]["max_results"], 20);
    assert_eq!(json["indexing"]["parallel_reads"], true);
}

/// The reported file is the one an explicit override selects
#[test]
#[serial]
fn test_config_response_reports_override_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[engine]\nk1 = 1.1\n").unwrap();

    std::env::set_var("CODERANK_CONFIG", &path);
    let response = ConfigResponse::resolve(Config::default());
    std::env::remove_var("CODERANK_CONFIG");

    assert_eq!(
        response.config_file.as_deref(),
        Some(path.to_string_lossy().as_ref())
    );
}

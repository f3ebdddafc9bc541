//! Core domain logic (protocol-agnostic)
//!
//! This module contains all search logic that is independent of the
//! CLI adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **tokenizer**: Punctuation stripping and lowercasing
//! - **search**: Inverted index, BM25 scoring and ranking
//! - **indexer**: File walking and corpus building
//! - **services**: The `code_search` entry points

pub mod config;
pub mod error;
pub mod indexer;
pub mod search;
pub mod services;
pub mod tokenizer;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{CodeRankError, Result};
pub use services::{code_search, CodeSearch};

//! coderank - in-memory BM25 code search
//!
//! Indexes a directory tree of text files into a from-scratch inverted
//! index and ranks files against a free-text query with BM25. Nothing
//! is persisted: every search builds its own index.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, tokenizer
//!   - search (inverted index, BM25, ranking)
//!   - indexer (file walking, tolerant reading, corpus building)
//!   - services (`code_search` entry points)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Example
//!
//! ```no_run
//! use coderank::{code_search, SearchOptions};
//!
//! let options = SearchOptions::default().include(["*.rs"]).max_results(5);
//! for (path, score) in code_search("parse config", ".", &options)? {
//!     println!("{score:.3} {path}");
//! }
//! # Ok::<(), coderank::CodeRankError>(())
//! ```

// Core domain logic (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::{Config, EngineConfig};
pub use crate::core::error::{CodeRankError, Result};
pub use crate::core::search::{rank, ScoreMap, SearchEngine};
pub use crate::core::services::{code_search, CodeSearch};
pub use crate::core::tokenizer::{normalize, tokenize};
pub use crate::core::types::*;

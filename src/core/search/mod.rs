//! Search module for BM25 full-text search.
//!
//! A from-scratch inverted index with BM25 scoring, plus the result
//! assembly that turns accumulated scores into a ranked list.

mod engine;
mod ranking;

pub use engine::{PostingList, ScoreMap, SearchEngine};
pub use ranking::{limit, rank};

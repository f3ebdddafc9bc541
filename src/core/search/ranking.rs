//! Result assembly: sort accumulated scores and truncate.

use std::cmp::Ordering;

use crate::core::search::engine::ScoreMap;
use crate::core::types::SearchHit;

/// Sort scores descending and keep at most `max_results` hits.
///
/// The sort is stable, so documents with equal scores stay in the order
/// they were first scored. A non-positive `max_results` keeps every hit.
pub fn rank(scores: ScoreMap, max_results: i64) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = scores
        .into_vec()
        .into_iter()
        .map(|(path, score)| SearchHit { path, score })
        .collect();

    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    if let Some(limit) = limit(max_results) {
        hits.truncate(limit);
    }
    hits
}

/// Result limit for a raw `max_results` value, `None` meaning unlimited
pub fn limit(max_results: i64) -> Option<usize> {
    if max_results > 0 {
        Some(usize::try_from(max_results).unwrap_or(usize::MAX))
    } else {
        None
    }
}

// Integration tests for BM25 scoring through the public engine API

use coderank::{rank, EngineConfig, SearchEngine};

const EPS: f64 = 1e-9;

fn engine(docs: &[(&str, &str)]) -> SearchEngine {
    let mut engine = SearchEngine::new(&EngineConfig::default());
    engine.bulk_index(docs.iter().copied());
    engine
}

#[test]
fn test_repeated_term_scores_at_least_as_high() {
    // Same character length, one vs two occurrences
    let engine = engine(&[
        ("once.txt", "foo xyz"),
        ("twice.txt", "foo foo"),
        ("filler.txt", "abc def"),
    ]);

    let scores = engine.search("foo");
    assert!(scores.get("twice.txt").unwrap() >= scores.get("once.txt").unwrap());
}

#[test]
fn test_absent_token_has_zero_idf_and_no_scores() {
    let engine = engine(&[("a.rs", "alpha"), ("b.rs", "beta")]);

    assert_eq!(engine.idf("gamma"), 0.0);
    assert!(engine.bm25("gamma").is_empty());
    assert!(engine.search("gamma").is_empty());
}

#[test]
fn test_ubiquitous_token_contributes_little() {
    let engine = engine(&[
        ("a.rs", "common rare"),
        ("b.rs", "common other"),
        ("c.rs", "common thing"),
        ("d.rs", "common stuff"),
    ]);

    let common = engine.idf("common");
    let rare = engine.idf("rare");
    assert!(common > 0.0, "Smoothed IDF stays positive");
    assert!(common < rare);
    // ln(0.5 / 4.5 + 1)
    assert!((common - (1.0f64 + 0.5 / 4.5).ln()).abs() < EPS);
}

#[test]
fn test_length_uses_characters_not_tokens() {
    // Same token count, very different character lengths
    let engine = engine(&[
        ("short.txt", "foo a"),
        ("long.txt", "foo aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa"),
    ]);

    let scores = engine.search("foo");
    assert!(scores.get("short.txt").unwrap() > scores.get("long.txt").unwrap());
    assert!((engine.average_document_length() - (5.0 + 44.0) / 2.0).abs() < EPS);
}

#[test]
fn test_reindexing_same_id_is_additive() {
    let mut engine = engine(&[("a.rs", "foo"), ("b.rs", "bar")]);
    let before = engine.search("foo").get("a.rs").unwrap();

    engine.index("a.rs", "foo");
    let after = engine.search("foo").get("a.rs").unwrap();

    assert_eq!(engine.document_count(), 2);
    assert_eq!(engine.postings("foo"), vec![("a.rs", 2)]);
    assert!(after > before, "Accumulated frequency raises the score");
}

#[test]
fn test_disjunctive_scores_sum() {
    let engine = engine(&[("a", "red green"), ("b", "red blue"), ("c", "green blue")]);

    let combined = engine.search("red green");
    let red = engine.search("red");
    let green = engine.search("green");

    for id in ["a", "b", "c"] {
        let expected = red.get(id).unwrap_or(0.0) + green.get(id).unwrap_or(0.0);
        assert!((combined.get(id).unwrap() - expected).abs() < EPS);
    }
}

#[test]
fn test_rank_over_engine_scores() {
    let engine = engine(&[("x", "foo"), ("y", "foo foo"), ("z", "foo foo foo")]);

    let hits = rank(engine.search("foo"), 2);

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].path, "z");
    assert_eq!(hits[1].path, "y");
}

#[test]
fn test_custom_engine_config() {
    let config = EngineConfig { k1: 0.0, b: 0.75 };
    let mut engine = SearchEngine::new(&config);
    engine.bulk_index([("a", "foo"), ("b", "foo foo foo"), ("c", "bar")]);

    // k1 = 0 ignores term frequency entirely
    let scores = engine.search("foo");
    assert!((scores.get("a").unwrap() - scores.get("b").unwrap()).abs() < EPS);
    assert!((scores.get("a").unwrap() - engine.idf("foo")).abs() < EPS);
}

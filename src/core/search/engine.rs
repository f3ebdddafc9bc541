//! In-memory inverted index with BM25 scoring.
//!
//! The engine owns every indexed document and a token → posting list
//! map. It is built fresh for each request and never persisted.
//!
//! Indexing is additive: indexing the same identifier twice overwrites
//! the stored content but keeps the postings recorded for the earlier
//! content, so term frequencies accumulate. Document length for
//! normalization is the character count of the current content, not
//! its token count.

use std::collections::HashMap;

use crate::core::config::EngineConfig;
use crate::core::tokenizer::{normalize, tokenize};
use crate::core::types::Document;

/// Position of a document in insertion order
type DocId = usize;

#[derive(Debug, Clone)]
struct StoredDocument {
    id: String,
    content: String,
    char_len: usize,
}

/// Occurrence counts of one token, per document.
///
/// Iterates in the order documents first received the token.
#[derive(Debug, Clone, Default)]
pub struct PostingList {
    order: Vec<DocId>,
    counts: HashMap<DocId, u32>,
}

impl PostingList {
    fn increment(&mut self, doc: DocId) {
        let count = self.counts.entry(doc).or_insert_with(|| {
            self.order.push(doc);
            0
        });
        *count += 1;
    }

    /// Number of distinct documents containing the token
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn iter(&self) -> impl Iterator<Item = (DocId, u32)> + '_ {
        self.order
            .iter()
            .map(move |doc| (*doc, self.counts.get(doc).copied().unwrap_or(0)))
    }
}

/// Accumulated per-document scores in first-scored order.
///
/// Unsorted: ranking happens in [`crate::core::search::rank`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreMap {
    entries: Vec<(String, f64)>,
}

impl ScoreMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score of a document, `None` if it matched no query token
    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(doc, _)| doc == id)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(id, score)| (id.as_str(), *score))
    }

    pub fn into_vec(self) -> Vec<(String, f64)> {
        self.entries
    }
}

/// BM25 search engine over an in-memory inverted index
#[derive(Debug, Clone)]
pub struct SearchEngine {
    k1: f64,
    b: f64,
    documents: Vec<StoredDocument>,
    positions: HashMap<String, DocId>,
    index: HashMap<String, PostingList>,
    total_chars: u64,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl SearchEngine {
    /// Create an empty engine with the given BM25 parameters
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_params(config.k1, config.b)
    }

    /// Create an empty engine with explicit `k1` and `b`
    pub fn with_params(k1: f64, b: f64) -> Self {
        Self {
            k1,
            b,
            documents: Vec::new(),
            positions: HashMap::new(),
            index: HashMap::new(),
            total_chars: 0,
        }
    }

    pub fn k1(&self) -> f64 {
        self.k1
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Index a document.
    ///
    /// Stores (or overwrites) the content under `id`, then adds one
    /// occurrence per token to the postings. Never fails.
    pub fn index(&mut self, id: impl Into<String>, content: impl Into<String>) {
        let id = id.into();
        let content = content.into();
        let char_len = content.chars().count();
        let tokens = tokenize(&content);

        let doc = match self.positions.get(&id) {
            Some(&doc) => {
                let stored = &mut self.documents[doc];
                self.total_chars -= stored.char_len as u64;
                stored.content = content;
                stored.char_len = char_len;
                doc
            }
            None => {
                let doc = self.documents.len();
                self.positions.insert(id.clone(), doc);
                self.documents.push(StoredDocument {
                    id,
                    content,
                    char_len,
                });
                doc
            }
        };
        self.total_chars += char_len as u64;

        for token in tokens.iter() {
            match self.index.get_mut(token) {
                Some(postings) => postings.increment(doc),
                None => {
                    let mut postings = PostingList::default();
                    postings.increment(doc);
                    self.index.insert(token.to_string(), postings);
                }
            }
        }
    }

    /// Index documents one by one, in the given order
    pub fn bulk_index<I>(&mut self, documents: I)
    where
        I: IntoIterator,
        I::Item: Into<Document>,
    {
        for document in documents {
            let Document { id, content } = document.into();
            self.index(id, content);
        }
    }

    /// Number of distinct document identifiers
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Document identifiers in first-indexed order
    pub fn document_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.documents.iter().map(|d| d.id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Current stored content of a document
    pub fn content(&self, id: &str) -> Option<&str> {
        self.positions
            .get(id)
            .map(|&doc| self.documents[doc].content.as_str())
    }

    /// Number of distinct tokens in the index
    pub fn term_count(&self) -> usize {
        self.index.len()
    }

    /// Average document length in characters, `0.0` for an empty corpus
    pub fn average_document_length(&self) -> f64 {
        if self.documents.is_empty() {
            return 0.0;
        }
        self.total_chars as f64 / self.documents.len() as f64
    }

    fn posting_list(&self, token: &str) -> Option<&PostingList> {
        self.index.get(&normalize(token))
    }

    /// Occurrence counts of a token per document.
    ///
    /// The token is normalized first. Unknown tokens yield an empty list.
    pub fn postings(&self, token: &str) -> Vec<(&str, u32)> {
        self.posting_list(token)
            .map(|postings| {
                postings
                    .iter()
                    .map(|(doc, count)| (self.documents[doc].id.as_str(), count))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Smoothed inverse document frequency: `ln((N - n + 0.5) / (n + 0.5) + 1)`.
    ///
    /// `0.0` when the token appears in no document.
    pub fn idf(&self, token: &str) -> f64 {
        let n = self.posting_list(token).map_or(0, PostingList::len);
        self.idf_for(n)
    }

    fn idf_for(&self, n: usize) -> f64 {
        if n == 0 {
            return 0.0;
        }
        let total = self.documents.len() as f64;
        let n = n as f64;
        ((total - n + 0.5) / (n + 0.5) + 1.0).ln()
    }

    /// BM25 contribution of one token to every document containing it
    pub fn bm25(&self, token: &str) -> Vec<(&str, f64)> {
        self.bm25_by_doc(token)
            .into_iter()
            .map(|(doc, score)| (self.documents[doc].id.as_str(), score))
            .collect()
    }

    fn bm25_by_doc(&self, token: &str) -> Vec<(DocId, f64)> {
        let avdl = self.average_document_length();
        if avdl == 0.0 {
            return Vec::new();
        }
        let Some(postings) = self.posting_list(token) else {
            return Vec::new();
        };

        let idf = self.idf_for(postings.len());
        postings
            .iter()
            .map(|(doc, freq)| {
                let freq = f64::from(freq);
                let doc_len = self.documents[doc].char_len as f64;
                let numerator = freq * (self.k1 + 1.0);
                let denominator =
                    freq + self.k1 * (1.0 - self.b + self.b * doc_len / avdl);
                (doc, idf * numerator / denominator)
            })
            .collect()
    }

    /// Score every document against a free-text query.
    ///
    /// Per-token BM25 contributions are summed per document. The result
    /// is unsorted and keeps the order in which documents were first
    /// scored.
    pub fn search(&self, query: &str) -> ScoreMap {
        let mut order: Vec<(DocId, f64)> = Vec::new();
        let mut slots: HashMap<DocId, usize> = HashMap::new();

        for token in tokenize(query).iter() {
            for (doc, score) in self.bm25_by_doc(token) {
                match slots.get(&doc) {
                    Some(&slot) => order[slot].1 += score,
                    None => {
                        slots.insert(doc, order.len());
                        order.push((doc, score));
                    }
                }
            }
        }

        ScoreMap {
            entries: order
                .into_iter()
                .map(|(doc, score)| (self.documents[doc].id.clone(), score))
                .collect(),
        }
    }
}

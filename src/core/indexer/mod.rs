//! Corpus construction.
//!
//! Turns a root path into `(identifier, content)` documents:
//!
//! - Lazy file system walking with filename-glob filtering
//! - Tolerant UTF-8 reading (invalid sequences dropped, never fatal)
//! - Identifiers relative to the search root
//!
//! Walk errors (permission denied and similar) skip the affected
//! entry or subtree and the walk continues.

pub mod pipeline;
pub mod reader;
pub mod walker;

pub use pipeline::{Corpus, CorpusBuilder};
pub use reader::{read_text, DecodedText};
pub use walker::{FileFilter, FileWalker, Walk};

//! Corpus building pipeline.
//!
//! Coordinates the file-to-document workflow:
//! 1. Walk the root (or accept a single file) through the filename filter
//! 2. Read each candidate as text, tolerating invalid UTF-8
//! 3. Name each document by its path relative to the root
//!
//! Files that cannot be opened are skipped; nothing here fails for
//! ordinary input.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::core::config::IndexingConfig;
use crate::core::indexer::reader::{read_text, DecodedText};
use crate::core::indexer::{FileFilter, FileWalker};
use crate::core::types::{CorpusStats, Document};

/// Documents collected from a root, in walk order
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub documents: Vec<Document>,
    pub stats: CorpusStats,
}

impl Corpus {
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

/// Builds a [`Corpus`] from a directory tree or a single file
#[derive(Debug, Clone)]
pub struct CorpusBuilder {
    walker: FileWalker,
    parallel_reads: bool,
}

impl CorpusBuilder {
    /// Create a builder with explicit filename patterns
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Filename globs to include (empty = all)
    /// * `exclude_patterns` - Filename globs to exclude
    /// * `parallel_reads` - Read files on the rayon thread pool
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        parallel_reads: bool,
    ) -> Self {
        Self {
            walker: FileWalker::new(FileFilter::new(include_patterns, exclude_patterns)),
            parallel_reads,
        }
    }

    /// Create a builder from the indexing section of the config
    pub fn from_config(config: &IndexingConfig) -> Self {
        Self::new(
            config.include_patterns.clone(),
            config.exclude_patterns.clone(),
            config.parallel_reads,
        )
    }

    pub fn walker(&self) -> &FileWalker {
        &self.walker
    }

    /// Walk `root` and read every matching file.
    ///
    /// A missing root produces an empty corpus.
    pub fn build(&self, root: &Path) -> Corpus {
        self.build_cancellable(root, &AtomicBool::new(false))
    }

    /// Like [`CorpusBuilder::build`], but stops walking and reading once
    /// `cancel` is set. The corpus is then incomplete.
    pub fn build_cancellable(&self, root: &Path, cancel: &AtomicBool) -> Corpus {
        let start = Instant::now();
        let cancelled = || cancel.load(Ordering::Relaxed);
        let base = identifier_base(root);

        tracing::debug!("Collecting files from {:?}", root);
        let mut stats = CorpusStats::default();
        let mut documents = Vec::new();

        let mut record = |path: &Path, read: std::io::Result<DecodedText>| {
            stats.files_seen += 1;
            match read {
                Ok(decoded) => {
                    if decoded.lossy {
                        tracing::debug!("Dropped invalid UTF-8 in {:?}", path);
                        stats.lossy_decodes += 1;
                    }
                    stats.files_indexed += 1;
                    documents.push(Document {
                        id: display_path(path, base),
                        content: decoded.content,
                    });
                }
                Err(e) => {
                    tracing::debug!("Skipping unreadable file {:?}: {}", path, e);
                    stats.files_skipped += 1;
                }
            }
        };

        if self.parallel_reads {
            let files: Vec<PathBuf> = self
                .walker
                .walk(root)
                .take_while(|_| !cancelled())
                .collect();
            // Indexed collect keeps walk order
            let reads: Vec<Option<std::io::Result<DecodedText>>> = files
                .par_iter()
                .map(|path| (!cancelled()).then(|| read_text(path)))
                .collect();
            for (path, read) in files.iter().zip(reads) {
                if let Some(read) = read {
                    record(path, read);
                }
            }
        } else {
            for path in self.walker.walk(root).take_while(|_| !cancelled()) {
                let read = read_text(&path);
                record(&path, read);
            }
        }

        if cancelled() {
            tracing::debug!("Corpus build for {:?} cancelled", root);
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Corpus built: {} files indexed, {} skipped, {} lossy in {}ms",
            stats.files_indexed,
            stats.files_skipped,
            stats.lossy_decodes,
            stats.duration_ms
        );

        Corpus { documents, stats }
    }
}

/// Directory identifiers are made relative to: the root itself, or the
/// parent directory when the root is a single file
fn identifier_base(root: &Path) -> &Path {
    if root.is_file() {
        root.parent().unwrap_or(root)
    } else {
        root
    }
}

/// Path of `path` relative to `base`, or the full path when it lies
/// outside `base`
pub fn display_path(path: &Path, base: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(relative) if !relative.as_os_str().is_empty() => {
            relative.to_string_lossy().into_owned()
        }
        _ => path.to_string_lossy().into_owned(),
    }
}

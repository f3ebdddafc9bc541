//! File system walker with filename-glob filtering.
//!
//! Yields candidate files lazily, one path at a time, so large trees
//! are never materialized up front. Symbolic links are skipped and
//! unreadable directories are logged and passed over without
//! stopping the walk.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Include/exclude predicate over file names.
///
/// Patterns are matched against the file name only, never the full
/// path. A file passes when it matches at least one include pattern
/// (or there are none) and matches no exclude pattern.
///
/// Patterns use shell `fnmatch` rules and are never rejected: an
/// unclosed `[` is a literal bracket and `**` is the same as `*`.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    include_patterns: Vec<Pattern>,
    exclude_patterns: Vec<Pattern>,
}

/// Rewrite an `fnmatch` pattern into `glob` syntax
fn fnmatch_to_glob(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 2);
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' => {
                out.push('*');
                while chars.get(i + 1) == Some(&'*') {
                    i += 1;
                }
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    out.extend(&chars[i..=end]);
                    i = end;
                }
                None => out.push_str("[[]"),
            },
            ']' => out.push_str("[]]"),
            c => out.push(c),
        }
        i += 1;
    }
    out
}

/// Index of the `]` closing the class opened at `start`. A `]` right
/// after `[` or `[!` is a member, not the end.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    (j..chars.len()).find(|&k| chars[k] == ']')
}

fn compile(patterns: Vec<String>) -> Vec<Pattern> {
    patterns
        .into_iter()
        .filter_map(|raw| {
            let translated = fnmatch_to_glob(&raw);
            Pattern::new(&translated)
                .or_else(|e| {
                    tracing::debug!("Matching {:?} literally: {}", raw, e);
                    Pattern::new(&Pattern::escape(&raw))
                })
                .map_err(|e| tracing::warn!("Ignoring pattern {:?}: {}", raw, e))
                .ok()
        })
        .collect()
}

impl FileFilter {
    /// Create a filter from `fnmatch`-style patterns
    pub fn new(include_patterns: Vec<String>, exclude_patterns: Vec<String>) -> Self {
        Self {
            include_patterns: compile(include_patterns),
            exclude_patterns: compile(exclude_patterns),
        }
    }

    /// A filter that accepts every file
    pub fn allow_all() -> Self {
        Self::default()
    }

    /// Check a path's file name against the patterns
    pub fn matches(&self, path: &Path) -> bool {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => return false,
        };
        self.matches_name(&name)
    }

    /// Check a bare file name against the patterns
    pub fn matches_name(&self, name: &str) -> bool {
        let included = self.include_patterns.is_empty()
            || self.include_patterns.iter().any(|p| p.matches(name));

        included && !self.exclude_patterns.iter().any(|p| p.matches(name))
    }
}

/// File system walker applying a [`FileFilter`]
#[derive(Debug, Clone, Default)]
pub struct FileWalker {
    filter: FileFilter,
}

impl FileWalker {
    pub fn new(filter: FileFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    /// Lazily enumerate candidate files under `root`.
    ///
    /// A regular-file root yields itself when it passes the filter. A
    /// directory root is walked recursively; directories and symbolic
    /// links are never yielded. A missing root yields nothing.
    pub fn walk(&self, root: &Path) -> Walk<'_> {
        let state = if root.is_file() {
            WalkState::Single(Some(root.to_path_buf()))
        } else if root.is_dir() {
            WalkState::Tree(WalkDir::new(root).follow_links(false).into_iter())
        } else {
            WalkState::Done
        };

        Walk {
            filter: &self.filter,
            state,
        }
    }

    /// Collect all matching files from `root`
    pub fn collect_files(&self, root: &Path) -> Vec<PathBuf> {
        self.walk(root).collect()
    }
}

enum WalkState {
    Single(Option<PathBuf>),
    Tree(walkdir::IntoIter),
    Done,
}

/// Iterator returned by [`FileWalker::walk`]
pub struct Walk<'a> {
    filter: &'a FileFilter,
    state: WalkState,
}

impl Iterator for Walk<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        match &mut self.state {
            WalkState::Single(path) => {
                let path = path.take()?;
                self.state = WalkState::Done;
                self.filter.matches(&path).then_some(path)
            }
            WalkState::Tree(entries) => {
                for entry in entries.by_ref() {
                    let entry = match entry {
                        Ok(entry) => entry,
                        Err(e) => {
                            // Permission denied and friends: skip the subtree
                            tracing::warn!("Walk error: {}", e);
                            continue;
                        }
                    };

                    let file_type = entry.file_type();
                    if file_type.is_symlink() {
                        tracing::debug!("Skipping symlink: {:?}", entry.path());
                        continue;
                    }
                    if !file_type.is_file() {
                        continue;
                    }
                    if self.filter.matches(entry.path()) {
                        return Some(entry.into_path());
                    }
                }
                self.state = WalkState::Done;
                None
            }
            WalkState::Done => None,
        }
    }
}

//! Text normalization and tokenization.
//!
//! Normalization replaces every ASCII punctuation character with a
//! space, collapses whitespace runs to a single space, trims and
//! lowercases. Tokens are the single-space separated pieces of the
//! normalized string. No stemming and no stop words: `the` and `a` are
//! tokens like any other.

/// Unicode whitespace plus the ASCII information separators
/// (`\x1c`..=`\x1f`), which also split words.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// Normalize a string for indexing and lookup.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for c in input.chars() {
        if c.is_ascii_punctuation() || is_separator(c) {
            // Leading separators never emit a space
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c);
    }

    // Whole-string lowercasing applies context rules like final sigma
    if out.is_ascii() {
        out.make_ascii_lowercase();
        out
    } else {
        out.to_lowercase()
    }
}

/// Normalized text with an iterator over its non-empty tokens.
///
/// Owns the normalized buffer so callers can hold `&str` tokens
/// without one allocation per token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    buffer: String,
}

impl Tokens {
    /// The normalized text the tokens are sliced from
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Iterate over non-empty tokens in order of appearance
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.buffer.split(' ').filter(|t| !t.is_empty())
    }

    /// Number of non-empty tokens
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns `true` if there are no tokens
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// Normalize `text` and expose its tokens.
pub fn tokenize(text: &str) -> Tokens {
    Tokens {
        buffer: normalize(text),
    }
}

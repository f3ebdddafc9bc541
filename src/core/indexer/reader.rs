//! Tolerant text file reading.
//!
//! Files are decoded as UTF-8. Invalid byte sequences are dropped
//! instead of failing the read, so a corrupt file degrades to partial
//! content. Line endings are normalized to `\n` (`\r\n` and lone `\r`),
//! matching a text-mode read, before the content is indexed.

use std::fs;
use std::io;
use std::path::Path;

/// Decoded file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub content: String,
    /// Invalid UTF-8 sequences were dropped
    pub lossy: bool,
}

/// Read a file as text.
///
/// Only fails when the file cannot be read at all.
pub fn read_text(path: &Path) -> io::Result<DecodedText> {
    let bytes = fs::read(path)?;
    Ok(decode(bytes))
}

/// Decode bytes as UTF-8, dropping invalid sequences
pub fn decode(bytes: Vec<u8>) -> DecodedText {
    let (text, lossy) = match String::from_utf8(bytes) {
        Ok(text) => (text, false),
        Err(e) => {
            let bytes = e.into_bytes();
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
            }
            (text, true)
        }
    };

    DecodedText {
        content: normalize_newlines(text),
        lossy,
    }
}

/// Translate `\r\n` and lone `\r` into `\n`
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    out
}

//! Positional integer token reader and path resolution.

use crate::error::MssError;
use std::path::{Path, PathBuf};
use std::str::SplitWhitespace;

/// Resolves an instance path.
///
/// Absolute paths are returned unchanged; relative paths are joined onto
/// `base_dir`.
pub fn resolve_path(path: impl AsRef<Path>, base_dir: &Path) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Sequential reader over a whitespace-separated integer stream.
///
/// Every read names the field it fills so that an exhausted or malformed
/// stream reports where parsing stopped.
pub struct TokenReader<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> TokenReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: text.split_whitespace(),
        }
    }

    /// Reads the next token as a signed integer.
    pub fn next_i64(&mut self, field: &'static str) -> Result<i64, MssError> {
        let token = self
            .tokens
            .next()
            .ok_or(MssError::InsufficientData { field })?;
        token.parse().map_err(|_| MssError::InvalidToken {
            field,
            token: token.to_string(),
        })
    }

    /// Reads the next token as a count or index (non-negative).
    pub fn next_count(&mut self, field: &'static str) -> Result<usize, MssError> {
        let value = self.next_i64(field)?;
        usize::try_from(value).map_err(|_| MssError::InvalidToken {
            field,
            token: value.to_string(),
        })
    }

    /// Reads `n` signed integers.
    pub fn take_i64(&mut self, n: usize, field: &'static str) -> Result<Vec<i64>, MssError> {
        (0..n).map(|_| self.next_i64(field)).collect()
    }

    /// Reads `n` counts or indices.
    pub fn take_counts(&mut self, n: usize, field: &'static str) -> Result<Vec<usize>, MssError> {
        (0..n).map(|_| self.next_count(field)).collect()
    }
}

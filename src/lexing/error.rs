//! Error types for tokenization

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use super::tokens::ScanError;

/// A fatal tokenization failure. No tokens are produced when this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeError {
    /// What went wrong
    pub message: String,
    /// Absolute byte offset where scanning failed
    pub offset: usize,
    /// Source text around `offset`, bounded by the configured radius
    pub snippet: String,
    /// File identifier the offset refers to
    pub file: Arc<str>,
}

impl TokenizeError {
    /// Build an error at `offset`, capturing up to `radius` characters of
    /// context on each side.
    pub fn at(
        message: impl Into<String>,
        source: &str,
        offset: usize,
        radius: usize,
        file: Arc<str>,
    ) -> Self {
        Self {
            message: message.into(),
            offset,
            snippet: snippet_around(source, offset, radius).to_string(),
            file,
        }
    }

    pub(crate) fn from_scan(
        error: ScanError,
        source: &str,
        span: Range<usize>,
        radius: usize,
        file: Arc<str>,
    ) -> Self {
        match error {
            ScanError::UnterminatedString { opened_at } => Self::at(
                format!("unterminated string literal opened at {}", opened_at),
                source,
                span.end,
                radius,
                file,
            ),
            ScanError::Unrecognized => Self::at(
                format!("unrecognized input {:?}", &source[span.clone()]),
                source,
                span.start,
                radius,
                file,
            ),
        }
    }
}

impl fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error in {} at {} near {:?}: {}",
            self.file, self.offset, self.snippet, self.message
        )
    }
}

impl std::error::Error for TokenizeError {}

/// Slice of `source` spanning `radius` characters before and after `offset`.
///
/// Offsets are bytes, the radius counts chars, so the window never splits a
/// multi-byte character.
pub(crate) fn snippet_around(source: &str, offset: usize, radius: usize) -> &str {
    let offset = offset.min(source.len());
    let start = source[..offset]
        .char_indices()
        .rev()
        .nth(radius.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let start = if radius == 0 { offset } else { start };
    let end = source[offset..]
        .char_indices()
        .nth(radius)
        .map(|(i, _)| offset + i)
        .unwrap_or(source.len());
    &source[start..end]
}

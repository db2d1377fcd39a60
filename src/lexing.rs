//! Lexing module
//!
//! Converts raw source text into an ordered, immutable [`TokenSequence`].
//!
//! The scan is a single `logos` pass. Five token kinds come out of it:
//!
//! - `Space`: runs of space, tab, CR and LF
//! - `Number`: decimal digits (any script), optionally followed by a dot and more digits
//! - `Identifier`: a letter followed by letters, numerics or `_`
//! - `String`: single or double quoted, with `\n`, `\t`, `\r` escapes decoded
//! - `Operator`: one character, or one of the fixed two-character operators
//!
//! Token spans cover the source exactly: concatenating the source slice of
//! every span gives back the input. A scan that cannot complete (an
//! unterminated string) fails the whole call; there is no partial output.

pub mod error;
pub mod lexer_impl;
pub mod tokens;

pub use error::TokenizeError;
pub use lexer_impl::{tokenize, tokenize_with_config, TokenSequence};
pub use tokens::{SourceSpan, Token, TokenKind, TWO_CHAR_OPERATORS};

//! # syntax-match
//!
//! A two-stage text matching engine.
//!
//! 1. [`lexing`] turns source text into a [`TokenSequence`] of typed tokens.
//! 2. [`matching`] walks that sequence with a tree of [`Matcher`]s and lazily
//!    enumerates every derivation the grammar admits.
//!
//! ```text
//! let tokens = tokenize("A/+/B+C", ".")?;
//! let grammar = grammars::operator_chain();
//! let mut cursor = tokens.cursor();
//! for value in grammar.matches(&mut cursor) {
//!     println!("{}", formats::pretty(&value));
//! }
//! ```
//!
//! ## Testing
//!
//! The [testing] module carries fluent assertions for token sequences and
//! derivation lists; integration tests under `tests/` use them throughout.

pub mod config;
pub mod formats;
pub mod grammars;
pub mod lexing;
pub mod matching;
pub mod testing;

pub use lexing::{tokenize, tokenize_with_config, SourceSpan, Token, TokenKind, TokenSequence, TokenizeError};
pub use matching::{Cursor, Derivation, Derivations, Matcher, Matches, Pattern, Transform, Value};

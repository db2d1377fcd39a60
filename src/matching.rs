//! Matching module
//!
//! A backtracking combinator engine over a [`TokenSequence`](crate::TokenSequence).
//!
//! A grammar is a tree of [`Matcher`]s built from seven closed cases:
//!
//! - leaves: `Kind`, `Value`, `KindValue`, `End`
//! - composites: `Alternation`, `Repetition`, `Sequence`
//!
//! Matching a tree against a [`Cursor`] enumerates every derivation lazily.
//! [`Matcher::derive`] hands out `(value, reached cursor)` pairs and never
//! touches the caller's cursor; [`Matcher::matches`] is the committing view
//! that advances the caller's cursor to each derivation's position as its value
//! is yielded.
//!
//! Enumeration order is fixed per matcher:
//!
//! - alternation: branches in listed order, each branch in its own order
//! - repetition: longest repetition first, the empty match (if any) last
//! - sequence: left-to-right, depth-first
//!
//! Running off the end of the tokens is never an error during matching; the
//! affected branch simply produces nothing.

pub mod cursor;
pub mod derivation;
pub mod matcher;
pub mod value;

pub use cursor::Cursor;
pub use derivation::{Derivation, Derivations, Matches};
pub use matcher::{Matcher, Pattern, Transform};
pub use value::Value;

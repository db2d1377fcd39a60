//! Testing utilities
//!
//! Fluent assertions for token sequences and derivation lists. They give
//! readable failure messages (the whole rendered sequence, not just an index)
//! and keep tests short:
//!
//! ```rust,ignore
//! let tokens = tokenize("a[10] += \"Hello\"", ".")?;
//! assert_tokens(&tokens)
//!     .count(8)
//!     .token(5, |t| t.kind(TokenKind::Operator).text("+="));
//! ```

mod derivation_assertions;
mod token_assertions;

pub use derivation_assertions::{assert_derivations, DerivationsAssertion};
pub use token_assertions::{assert_tokens, TokenAssertion, TokenSequenceAssertion};

//! Position marker over a shared token sequence

use crate::lexing::{Token, TokenSequence};

/// A cheap-to-clone position in a [`TokenSequence`].
///
/// Clones share the token storage but own their index, so advancing one never
/// moves another. The index is always within `0..=len`; `len` means the
/// cursor is exhausted, which is a normal state, not an error.
#[derive(Debug, Clone)]
pub struct Cursor {
    tokens: TokenSequence,
    index: usize,
}

impl Cursor {
    /// A cursor at the start of `tokens`
    pub fn new(tokens: TokenSequence) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn tokens(&self) -> &TokenSequence {
        &self.tokens
    }

    pub fn is_exhausted(&self) -> bool {
        self.index == self.tokens.len()
    }

    /// The token under the cursor, or `None` at end of stream.
    ///
    /// This is the soft check matchers use; reaching the end while searching
    /// just ends a branch.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    /// The token under the cursor.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is exhausted. Callers are expected to check
    /// [`Cursor::is_exhausted`] or use [`Cursor::peek`] first.
    pub fn current(&self) -> &Token {
        match self.peek() {
            Some(token) => token,
            None => panic!(
                "read past end of token stream at position {} (length {})",
                self.index,
                self.tokens.len()
            ),
        }
    }

    /// Move one token forward.
    ///
    /// # Panics
    ///
    /// Panics when the cursor is already exhausted.
    pub fn advance(&mut self) {
        assert!(
            !self.is_exhausted(),
            "advanced past end of token stream (length {})",
            self.tokens.len()
        );
        self.index += 1;
    }

    /// Tokens from the cursor to the end of the stream
    pub fn remaining(&self) -> &[Token] {
        &self.tokens.as_slice()[self.index..]
    }

    /// Take over the position reached by a trial cursor over the same tokens.
    pub fn commit(&mut self, reached: &Cursor) {
        debug_assert!(
            self.tokens.shares_storage(&reached.tokens),
            "committed a cursor from a different token sequence"
        );
        self.index = reached.index;
    }
}

#[cfg(test)]
mod tests {
    use crate::lexing::{tokenize, TokenKind};

    #[test]
    fn test_clone_is_independent() {
        let tokens = tokenize("a b", ".").unwrap();
        let mut original = tokens.cursor();
        let mut copy = original.clone();
        copy.advance();
        copy.advance();
        assert_eq!(original.position(), 0);
        assert_eq!(copy.position(), 2);
        original.advance();
        assert_eq!(copy.position(), 2);
    }

    #[test]
    fn test_exhaustion() {
        let tokens = tokenize("a", ".").unwrap();
        let mut cursor = tokens.cursor();
        assert!(!cursor.is_exhausted());
        assert_eq!(cursor.current().kind(), TokenKind::Identifier);
        cursor.advance();
        assert!(cursor.is_exhausted());
        assert!(cursor.peek().is_none());
        assert!(cursor.remaining().is_empty());
    }

    #[test]
    fn test_empty_sequence_starts_exhausted() {
        let tokens = tokenize("", ".").unwrap();
        assert!(tokens.cursor().is_exhausted());
    }

    #[test]
    #[should_panic(expected = "read past end of token stream")]
    fn test_current_past_end_panics() {
        let tokens = tokenize("", ".").unwrap();
        let cursor = tokens.cursor();
        let _ = cursor.current();
    }

    #[test]
    #[should_panic(expected = "advanced past end")]
    fn test_advance_past_end_panics() {
        let tokens = tokenize("a", ".").unwrap();
        let mut cursor = tokens.cursor();
        cursor.advance();
        cursor.advance();
    }

    #[test]
    fn test_commit_takes_position() {
        let tokens = tokenize("a+b", ".").unwrap();
        let mut authoritative = tokens.cursor();
        let mut trial = authoritative.clone();
        trial.advance();
        trial.advance();
        assert_eq!(authoritative.position(), 0);
        authoritative.commit(&trial);
        assert_eq!(authoritative.position(), 2);
        assert_eq!(authoritative.current().text(), "b");
        assert_eq!(authoritative.remaining().len(), 1);
    }
}

//! Fluent assertion API for token sequences

use crate::formats::pretty_token;
use crate::lexing::{Token, TokenKind, TokenSequence};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a token sequence
pub fn assert_tokens(tokens: &TokenSequence) -> TokenSequenceAssertion<'_> {
    TokenSequenceAssertion { tokens }
}

fn summarize(tokens: &TokenSequence) -> String {
    tokens.iter().map(pretty_token).collect::<Vec<_>>().join(", ")
}

// ============================================================================
// Sequence Assertions
// ============================================================================

pub struct TokenSequenceAssertion<'a> {
    tokens: &'a TokenSequence,
}

impl<'a> TokenSequenceAssertion<'a> {
    /// Assert the number of tokens
    pub fn count(self, expected: usize) -> Self {
        let actual = self.tokens.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} tokens, found {}: [{}]",
            expected,
            actual,
            summarize(self.tokens)
        );
        self
    }

    /// Assert the kind of every token, in order
    pub fn kinds(self, expected: &[TokenKind]) -> Self {
        let actual: Vec<TokenKind> = self.tokens.iter().map(Token::kind).collect();
        assert_eq!(
            actual,
            expected,
            "Token kinds differ: [{}]",
            summarize(self.tokens)
        );
        self
    }

    /// Assert the text of every token, in order
    pub fn texts(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.tokens.iter().map(Token::text).collect();
        assert_eq!(actual, expected, "Token texts differ");
        self
    }

    /// Assert on a specific token by index
    pub fn token<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(TokenAssertion<'a>) -> TokenAssertion<'a>,
    {
        assert!(
            index < self.tokens.len(),
            "Token index {} out of bounds (sequence has {} tokens: [{}])",
            index,
            self.tokens.len(),
            summarize(self.tokens)
        );
        assertion(TokenAssertion {
            token: &self.tokens[index],
            context: format!("tokens[{}]", index),
        });
        self
    }

    /// Assert that the raw span slices reassemble `source` exactly
    pub fn covers(self, source: &str) -> Self {
        let mut next = 0;
        for (i, token) in self.tokens.iter().enumerate() {
            let span = token.span();
            assert_eq!(
                span.start, next,
                "tokens[{}] starts at {} but the previous token ended at {}",
                i, span.start, next
            );
            next = span.end;
        }
        assert_eq!(next, source.len(), "Tokens stop at {} of {}", next, source.len());
        let rebuilt: String = self.tokens.iter().map(|t| t.span().slice(source)).collect();
        assert_eq!(rebuilt, source);
        self
    }
}

// ============================================================================
// Single Token Assertions
// ============================================================================

pub struct TokenAssertion<'a> {
    token: &'a Token,
    context: String,
}

impl TokenAssertion<'_> {
    pub fn kind(self, expected: TokenKind) -> Self {
        assert_eq!(
            self.token.kind(),
            expected,
            "{}: expected {}, found {}",
            self.context,
            expected,
            pretty_token(self.token)
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(
            self.token.text(),
            expected,
            "{}: unexpected text in {}",
            self.context,
            pretty_token(self.token)
        );
        self
    }

    pub fn span(self, start: usize, end: usize) -> Self {
        let span = self.token.span();
        assert_eq!(
            (span.start, span.end),
            (start, end),
            "{}: unexpected span for {}",
            self.context,
            pretty_token(self.token)
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::tokenize;

    #[test]
    fn test_fluent_chain() {
        let source = "a += 1";
        let tokens = tokenize(source, ".").unwrap();
        assert_tokens(&tokens)
            .count(5)
            .texts(&["a", " ", "+=", " ", "1"])
            .token(2, |t| t.kind(TokenKind::Operator).text("+=").span(2, 4))
            .covers(source);
    }

    #[test]
    #[should_panic(expected = "Expected 2 tokens, found 1")]
    fn test_count_mismatch_reports_tokens() {
        let tokens = tokenize("a", ".").unwrap();
        assert_tokens(&tokens).count(2);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        let tokens = tokenize("a", ".").unwrap();
        assert_tokens(&tokens).token(3, |t| t);
    }
}

//! Implementation of the tokenizer
//!
//! Drives the `logos` scanner over the whole source and assembles the shared
//! [`TokenSequence`] that cursors walk during matching.

use log::debug;
use logos::Logos;
use serde::Serialize;
use std::ops::Index;
use std::sync::Arc;

use super::error::TokenizeError;
use super::tokens::{RawToken, SourceSpan, Token};
use crate::config::TokenizerConfig;
use crate::matching::Cursor;

/// Ordered, immutable list of tokens shared by every cursor built over it.
///
/// Cloning is O(1): clones share the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence {
    tokens: Arc<[Token]>,
}

impl TokenSequence {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: Arc::from(tokens),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// A fresh cursor at the first token
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.clone())
    }

    /// Whether both handles point at the same shared allocation
    pub fn shares_storage(&self, other: &TokenSequence) -> bool {
        Arc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tokenize `source`, tagging every span with `file_id`.
pub fn tokenize(source: &str, file_id: &str) -> Result<TokenSequence, TokenizeError> {
    tokenize_with_config(source, &TokenizerConfig::for_file(file_id))
}

/// Tokenize `source` using the file id and error snippet radius from `config`.
pub fn tokenize_with_config(
    source: &str,
    config: &TokenizerConfig,
) -> Result<TokenSequence, TokenizeError> {
    let file: Arc<str> = Arc::from(config.file_id.as_str());
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let range = lexer.span();
        let raw = result.map_err(|error| {
            TokenizeError::from_scan(error, source, range.clone(), config.snippet_radius, file.clone())
        })?;
        let kind = raw.kind();
        let text = match raw {
            RawToken::String(decoded) => decoded,
            _ => lexer.slice().to_string(),
        };
        tokens.push(Token::new(
            kind,
            text,
            SourceSpan::new(range.start, range.end, file.clone()),
        ));
    }

    debug!("tokenized {} tokens from {}", tokens.len(), file);
    Ok(TokenSequence::new(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::TokenKind;

    fn kinds(seq: &TokenSequence) -> Vec<TokenKind> {
        seq.iter().map(Token::kind).collect()
    }

    #[test]
    fn test_simple_tokenization() {
        let tokens = tokenize("hello world", ".").unwrap();
        assert_eq!(
            kinds(&tokens),
            vec![TokenKind::Identifier, TokenKind::Space, TokenKind::Identifier]
        );
    }

    #[test]
    fn test_empty_input() {
        let tokens = tokenize("", ".").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_spans_are_contiguous() {
        let source = "x1 = 'a\\tb' + 2.5";
        let tokens = tokenize(source, ".").unwrap();
        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.span().start, expected_start);
            expected_start = token.span().end;
        }
        assert_eq!(expected_start, source.len());
    }

    #[test]
    fn test_string_text_is_decoded() {
        let tokens = tokenize("\"a\\nb\"", ".").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text(), "a\nb");
        assert_eq!(tokens[0].span().slice("\"a\\nb\""), "\"a\\nb\"");
    }

    #[test]
    fn test_file_id_is_shared() {
        let tokens = tokenize("a b", "main.src").unwrap();
        assert!(tokens.iter().all(|t| &*t.span().file == "main.src"));
        assert!(Arc::ptr_eq(&tokens[0].span().file, &tokens[2].span().file));
    }

    #[test]
    fn test_unterminated_string_has_no_partial_output() {
        let err = tokenize("abc 'def", ".").unwrap_err();
        assert_eq!(err.offset, 8);
        assert!(err.message.contains("unterminated"));
        assert_eq!(err.snippet, "abc 'def");
    }

    #[test]
    fn test_snippet_radius_from_config() {
        let config = TokenizerConfig {
            file_id: "f".to_string(),
            snippet_radius: 3,
        };
        let err = tokenize_with_config("aaaaaaaa \"bbb", &config).unwrap_err();
        assert_eq!(err.offset, 13);
        assert_eq!(err.snippet, "bbb");
        assert_eq!(&*err.file, "f");
    }

    #[test]
    fn test_clone_shares_storage() {
        let tokens = tokenize("a+b", ".").unwrap();
        let copy = tokens.clone();
        assert!(tokens.shares_storage(&copy));
        assert_eq!(copy.len(), 3);
    }
}

//! Token definitions
//!
//! The public token model ([`TokenKind`], [`SourceSpan`], [`Token`]) plus the
//! `logos` scanner enum that produces it. The scanner is private to the crate;
//! callers only ever see fully built [`Token`]s.

use logos::{Lexer, Logos};
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// The closed set of operators that are recognised as a single two-character
/// token. Anything else is split into one-character operators.
pub const TWO_CHAR_OPERATORS: [&str; 14] = [
    "++", "--", "**", "->", "//", "+=", "-=", "/=", "*=", "%=", ">>", "<<", "&&", "||",
];

/// Kind of token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Run of spaces, tabs, carriage returns and newlines
    Space,
    /// Integer or decimal literal
    Number,
    /// Alphabetic name
    Identifier,
    /// Quoted string literal, stored decoded
    String,
    /// One- or two-character operator
    Operator,
}

impl TokenKind {
    /// Upper-case name used by the pretty-printer
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Space => "SPACE",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte range of a token in its source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceSpan {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Identifier of the file the offsets refer to
    pub file: Arc<str>,
}

impl SourceSpan {
    pub fn new(start: usize, end: usize, file: Arc<str>) -> Self {
        debug_assert!(start <= end, "span start {} after end {}", start, end);
        Self { start, end, file }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Raw source text covered by this span, quotes and escapes included
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }
}

/// A token produced by the tokenizer. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    span: SourceSpan,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Token text. For strings this is the decoded content without quotes.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn span(&self) -> &SourceSpan {
        &self.span
    }

    pub fn is_space(&self) -> bool {
        self.kind == TokenKind::Space
    }

    pub fn is_operator(&self, text: &str) -> bool {
        self.kind == TokenKind::Operator && self.text == text
    }
}

/// Failure raised from inside the scanner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum ScanError {
    /// Input logos could not attribute to any token
    #[default]
    Unrecognized,
    /// End of input reached before the closing quote
    UnterminatedString { opened_at: usize },
}

/// Scanner tokens. Every input character falls into exactly one of these
/// patterns, so only strings can fail.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(error = ScanError)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n]+")]
    Space,

    #[regex(r"\p{Nd}+(\.\p{Nd}*)?")]
    Number,

    #[regex(r"\p{L}[\p{L}\p{N}_]*")]
    Identifier,

    #[token("'", |lex| lex_string(lex, '\''))]
    #[token("\"", |lex| lex_string(lex, '"'))]
    String(String),

    // Longest match picks these over two single-character operators
    #[token("++")]
    #[token("--")]
    #[token("**")]
    #[token("->")]
    #[token("//")]
    #[token("+=")]
    #[token("-=")]
    #[token("/=")]
    #[token("*=")]
    #[token("%=")]
    #[token(">>")]
    #[token("<<")]
    #[token("&&")]
    #[token("||")]
    #[regex(r#"[^ \t\r\n\p{Nd}'"\p{L}]"#)]
    Operator,
}

impl RawToken {
    pub(crate) fn kind(&self) -> TokenKind {
        match self {
            RawToken::Space => TokenKind::Space,
            RawToken::Number => TokenKind::Number,
            RawToken::Identifier => TokenKind::Identifier,
            RawToken::String(_) => TokenKind::String,
            RawToken::Operator => TokenKind::Operator,
        }
    }
}

/// Decoded form of an escaped character; `None` drops it.
fn unescape(escaped: char) -> Option<char> {
    match escaped {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => None,
        other => Some(other),
    }
}

/// Consume a string body after its opening quote, returning decoded content.
fn lex_string(lex: &mut Lexer<'_, RawToken>, quote: char) -> Result<String, ScanError> {
    let opened_at = lex.span().start;
    let remainder = lex.remainder();
    let mut decoded = String::new();
    let mut chars = remainder.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some((_, escaped)) => decoded.extend(unescape(escaped)),
                None => break,
            }
            continue;
        }
        if c == quote {
            lex.bump(offset + c.len_utf8());
            return Ok(decoded);
        }
        decoded.push(c);
    }

    lex.bump(remainder.len());
    Err(ScanError::UnterminatedString { opened_at })
}

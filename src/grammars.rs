//! Ready-made grammars
//!
//! Small grammars used by the `synmatch` CLI and the integration tests. They
//! double as examples of building matcher trees.

use crate::lexing::TokenKind;
use crate::matching::Matcher;

fn operator(text: &str) -> Matcher {
    Matcher::kind_value(TokenKind::Operator, text)
}

/// Identifiers joined by `/+/` or `+`, then one final identifier and end of input.
///
/// ```text
/// ((IDENTIFIER ((OPERATOR "/" OPERATOR "+" OPERATOR "/") | OPERATOR "+")){1,} IDENTIFIER $)
/// ```
///
/// `A/+/B+C` has exactly one derivation under this grammar.
pub fn operator_chain() -> Matcher {
    let slash_group = Matcher::sequence(vec![operator("/"), operator("+"), operator("/")]);
    let joiner = Matcher::alternation(vec![slash_group, operator("+")]);
    let part = Matcher::sequence(vec![Matcher::kind(TokenKind::Identifier), joiner]);
    Matcher::sequence(vec![
        Matcher::repetition(part, 1, None),
        Matcher::kind(TokenKind::Identifier),
        Matcher::end(),
    ])
}

/// Identifiers separated by single operators of any kind, then end of input.
pub fn identifier_chain() -> Matcher {
    let part = Matcher::sequence(vec![
        Matcher::kind(TokenKind::Identifier),
        Matcher::kind(TokenKind::Operator),
    ]);
    Matcher::sequence(vec![
        Matcher::repetition(part, 1, None),
        Matcher::kind(TokenKind::Identifier),
        Matcher::end(),
    ])
}

//! Compact human-readable rendering
//!
//! Tokens render as `KIND:[text]`, lists as `[a, b]`, `Null` as `null`.
//! Scalars are passed through as-is, text quoted.

use std::fmt::{self, Write};

use crate::lexing::{Token, TokenSequence};
use crate::matching::Value;

/// Render a derivation value
pub fn pretty(value: &Value) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_value(&mut out, value);
    out
}

/// Render a single token as `KIND:[text]`
pub fn pretty_token(token: &Token) -> String {
    format!("{}:[{}]", token.kind(), token.text())
}

/// One token per line with its byte span
pub fn pretty_tokens(tokens: &TokenSequence) -> String {
    let mut out = String::new();
    for token in tokens {
        let span = token.span();
        let _ = writeln!(out, "{:>4}..{:<4} {}", span.start, span.end, pretty_token(token));
    }
    out
}

fn write_value(out: &mut String, value: &Value) -> fmt::Result {
    match value {
        Value::Null => out.write_str("null"),
        Value::Bool(b) => write!(out, "{}", b),
        Value::Integer(n) => write!(out, "{}", n),
        Value::Float(n) => write!(out, "{}", n),
        Value::Text(text) => write!(out, "{:?}", text),
        Value::Token(token) => out.write_str(&pretty_token(token)),
        Value::List(items) => {
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_str(", ")?;
                }
                write_value(out, item)?;
            }
            out.write_char(']')
        }
    }
}

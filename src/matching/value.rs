//! Values produced by derivations

use serde::Serialize;

use crate::lexing::Token;

/// The result of one derivation.
///
/// Leaf matchers produce [`Value::Token`], `End` produces [`Value::Null`],
/// repetitions and sequences produce [`Value::List`]. Transforms may turn any
/// of these into the scalar cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Token(Token),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Value::Token(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Consume a list value, returning its items
    pub fn into_list(self) -> Option<Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// All tokens in this value, depth-first, left to right
    pub fn tokens(&self) -> Vec<&Token> {
        let mut found = Vec::new();
        self.collect_tokens(&mut found);
        found
    }

    fn collect_tokens<'a>(&'a self, found: &mut Vec<&'a Token>) {
        match self {
            Value::Token(token) => found.push(token),
            Value::List(items) => {
                for item in items {
                    item.collect_tokens(found);
                }
            }
            _ => {}
        }
    }
}

impl From<Token> for Value {
    fn from(token: Token) -> Self {
        Value::Token(token)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

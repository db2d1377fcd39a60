//! Matcher definitions
//!
//! A [`Matcher`] is a [`Pattern`] (one of seven closed cases) plus an optional
//! [`Transform`] applied to every value the pattern yields. Matchers hold no
//! search state, so one tree can be matched any number of times.

use std::fmt;
use std::sync::Arc;

use super::value::Value;
use crate::lexing::TokenKind;

/// Pure mapping applied to a matcher's values just before they are yielded
pub type Transform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// The seven matcher cases
#[derive(Debug, Clone)]
pub enum Pattern {
    /// One token of the given kind
    Kind(TokenKind),
    /// One token with exactly this text
    Value(String),
    /// One token with both this kind and this text
    KindValue(TokenKind, String),
    /// The exhausted cursor; yields `Null` and consumes nothing
    End,
    /// Every derivation of every branch, in listed order
    Alternation(Vec<Matcher>),
    /// Between `min` and `max` repetitions, longest first. `max: None` is unbounded.
    Repetition {
        matcher: Box<Matcher>,
        min: usize,
        max: Option<usize>,
    },
    /// Each matcher in turn, starting where the previous one stopped
    Sequence(Vec<Matcher>),
}

/// A node of a grammar tree
#[derive(Clone)]
pub struct Matcher {
    pub(crate) pattern: Pattern,
    pub(crate) transform: Option<Transform>,
}

impl Matcher {
    pub fn new(pattern: Pattern, transform: Option<Transform>) -> Self {
        Self { pattern, transform }
    }

    pub fn kind(kind: TokenKind) -> Self {
        Self::new(Pattern::Kind(kind), None)
    }

    pub fn value(text: impl Into<String>) -> Self {
        Self::new(Pattern::Value(text.into()), None)
    }

    pub fn kind_value(kind: TokenKind, text: impl Into<String>) -> Self {
        Self::new(Pattern::KindValue(kind, text.into()), None)
    }

    pub fn end() -> Self {
        Self::new(Pattern::End, None)
    }

    pub fn alternation(branches: Vec<Matcher>) -> Self {
        Self::new(Pattern::Alternation(branches), None)
    }

    /// `matcher` repeated between `min` and `max` times; `max: None` is unbounded
    pub fn repetition(matcher: Matcher, min: usize, max: impl Into<Option<usize>>) -> Self {
        Self::new(
            Pattern::Repetition {
                matcher: Box::new(matcher),
                min,
                max: max.into(),
            },
            None,
        )
    }

    /// Zero or one `matcher`; yields a one-element list before the empty one
    pub fn optional(matcher: Matcher) -> Self {
        Self::repetition(matcher, 0, 1)
    }

    pub fn sequence(items: Vec<Matcher>) -> Self {
        Self::new(Pattern::Sequence(items), None)
    }

    /// Attach a transform, replacing any existing one
    pub fn map<F>(mut self, transform: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.transform = Some(Arc::new(transform));
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn has_transform(&self) -> bool {
        self.transform.is_some()
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("pattern", &self.pattern)
            .field("transform", &self.transform.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Matcher], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

/// Compact grammar notation, e.g. `(IDENTIFIER (OPERATOR "+" | "-")){1,} $`
impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.pattern {
            Pattern::Kind(kind) => write!(f, "{}", kind),
            Pattern::Value(text) => write!(f, "{:?}", text),
            Pattern::KindValue(kind, text) => write!(f, "{} {:?}", kind, text),
            Pattern::End => f.write_str("$"),
            Pattern::Alternation(branches) => {
                f.write_str("(")?;
                write_joined(f, branches, " | ")?;
                f.write_str(")")
            }
            Pattern::Repetition { matcher, min, max } => match max {
                Some(max) => write!(f, "{}{{{},{}}}", matcher, min, max),
                None => write!(f, "{}{{{},}}", matcher, min),
            },
            Pattern::Sequence(items) => {
                f.write_str("(")?;
                write_joined(f, items, " ")?;
                f.write_str(")")
            }
        }
    }
}

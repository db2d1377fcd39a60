//! Derivation enumeration
//!
//! Every matcher turns a start cursor into a lazy stream of [`Derivation`]s.
//! Streams are boxed iterators chained into each other, so pulling the next
//! derivation resumes the search where the previous pull left it.
//!
//! Derivations carry their own reached cursor. Nothing here moves a caller's
//! cursor; only [`Matches`] does, at the moment it hands a value out.

use log::{debug, trace};
use std::iter;

use super::cursor::Cursor;
use super::matcher::{Matcher, Pattern};
use super::value::Value;
use crate::lexing::Token;

/// One successful match: the produced value and the position it reached
#[derive(Debug, Clone)]
pub struct Derivation {
    pub value: Value,
    pub cursor: Cursor,
}

impl Derivation {
    pub fn new(value: Value, cursor: Cursor) -> Self {
        Self { value, cursor }
    }
}

/// Lazy stream of derivations borrowing the matcher tree that produces them
pub type Derivations<'m> = Box<dyn Iterator<Item = Derivation> + 'm>;

impl Matcher {
    /// Enumerate every derivation of this matcher from `start`.
    ///
    /// `start` is never modified; each derivation carries its own cursor.
    pub fn derive(&self, start: &Cursor) -> Derivations<'_> {
        trace!("try {} at {}", self, start.position());
        let found: Derivations<'_> = match &self.pattern {
            Pattern::Kind(kind) => single(start, |token| token.kind() == *kind),
            Pattern::Value(text) => single(start, |token| token.text() == text.as_str()),
            Pattern::KindValue(kind, text) => single(start, |token| {
                token.kind() == *kind && token.text() == text.as_str()
            }),
            Pattern::End => {
                if start.is_exhausted() {
                    Box::new(iter::once(Derivation::new(Value::Null, start.clone())))
                } else {
                    Box::new(iter::empty())
                }
            }
            Pattern::Alternation(branches) => {
                let start = start.clone();
                Box::new(branches.iter().flat_map(move |branch| branch.derive(&start)))
            }
            Pattern::Repetition { matcher, min, max } => {
                repetition(matcher, *min, *max, start.clone())
            }
            Pattern::Sequence(items) => sequence(items, start.clone(), Vec::new()),
        };

        match &self.transform {
            Some(transform) => Box::new(found.map(move |step| {
                trace!("ok {} at {}", self, step.cursor.position());
                Derivation::new(transform(step.value), step.cursor)
            })),
            None => Box::new(found.inspect(move |step| {
                trace!("ok {} at {}", self, step.cursor.position());
            })),
        }
    }

    /// Enumerate derivations from `cursor`, committing each one to `cursor`
    /// as its value is yielded.
    ///
    /// Stopping early leaves `cursor` at the last yielded derivation.
    pub fn matches<'m, 'c>(&'m self, cursor: &'c mut Cursor) -> Matches<'m, 'c> {
        let pending = self.derive(cursor);
        Matches { cursor, pending }
    }
}

/// Committing iterator returned by [`Matcher::matches`]
pub struct Matches<'m, 'c> {
    cursor: &'c mut Cursor,
    pending: Derivations<'m>,
}

impl Matches<'_, '_> {
    /// The caller's cursor as of the last yielded value
    pub fn cursor(&self) -> &Cursor {
        &*self.cursor
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let step = self.pending.next()?;
        self.cursor.commit(&step.cursor);
        debug!("commit at {}", self.cursor.position());
        Some(step.value)
    }
}

/// Leaf helper: consume one token if `accept` holds for it.
fn single<'m>(start: &Cursor, accept: impl Fn(&Token) -> bool) -> Derivations<'m> {
    match start.peek() {
        Some(token) if accept(token) => {
            let value = Value::Token(token.clone());
            let mut reached = start.clone();
            reached.advance();
            Box::new(iter::once(Derivation::new(value, reached)))
        }
        _ => Box::new(iter::empty()),
    }
}

/// Left-to-right depth-first cross product of `items`, each starting where
/// the previous one's derivation ended.
fn sequence<'m>(items: &'m [Matcher], start: Cursor, prefix: Vec<Value>) -> Derivations<'m> {
    let Some((first, rest)) = items.split_first() else {
        return Box::new(iter::once(Derivation::new(Value::List(prefix), start)));
    };
    Box::new(first.derive(&start).flat_map(move |step| {
        let mut values = prefix.clone();
        values.push(step.value);
        sequence(rest, step.cursor, values)
    }))
}

/// Greedy repetition: collect every attainable repetition on first pull, then
/// yield them longest first.
fn repetition(matcher: &Matcher, min: usize, max: Option<usize>, start: Cursor) -> Derivations<'_> {
    let mut pending = Some(start);
    let mut found: Vec<Derivation> = Vec::new();
    Box::new(iter::from_fn(move || {
        if let Some(start) = pending.take() {
            found = collect_repetitions(matcher, min, max, start);
        }
        // Discovery order reversed: most extended first, empty match last
        found.pop()
    }))
}

/// Depth-first extension of `matcher` from `start`, in discovery order.
///
/// Runs on an explicit stack so deep repetitions don't grow the call stack.
/// Under an unbounded `max`, a step that consumed nothing is recorded but not
/// extended again.
fn collect_repetitions(
    matcher: &Matcher,
    min: usize,
    max: Option<usize>,
    start: Cursor,
) -> Vec<Derivation> {
    let mut found = Vec::new();
    if min == 0 {
        found.push(Derivation::new(Value::List(Vec::new()), start.clone()));
    }
    if max == Some(0) {
        return found;
    }

    let mut stack: Vec<(Derivations<'_>, Vec<Value>, usize)> =
        vec![(matcher.derive(&start), Vec::new(), start.position())];

    while let Some((pending, prefix, from)) = stack.last_mut() {
        let Some(step) = pending.next() else {
            stack.pop();
            continue;
        };
        let from = *from;
        let mut values = prefix.clone();
        values.push(step.value);
        let count = values.len();

        if count >= min {
            found.push(Derivation::new(Value::List(values.clone()), step.cursor.clone()));
        }

        let below_max = max.map_or(true, |max| count < max);
        let progressed = step.cursor.position() > from;
        if below_max && (progressed || max.is_some()) {
            let next = matcher.derive(&step.cursor);
            stack.push((next, values, step.cursor.position()));
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::pretty;
    use crate::lexing::{tokenize, TokenKind, TokenSequence};

    fn without_spaces(source: &str) -> TokenSequence {
        let tokens = tokenize(source, ".").unwrap();
        TokenSequence::new(tokens.iter().filter(|t| !t.is_space()).cloned().collect())
    }

    fn rendered(matcher: &Matcher, source: &str) -> Vec<String> {
        let tokens = tokenize(source, ".").unwrap();
        let mut cursor = tokens.cursor();
        matcher.matches(&mut cursor).map(|v| pretty(&v)).collect()
    }

    fn positions(matcher: &Matcher, source: &str) -> Vec<usize> {
        let tokens = tokenize(source, ".").unwrap();
        matcher
            .derive(&tokens.cursor())
            .map(|d| d.cursor.position())
            .collect()
    }

    #[test]
    fn test_kind_matcher() {
        let m = Matcher::kind(TokenKind::Identifier);
        assert_eq!(rendered(&m, "abc"), vec!["IDENTIFIER:[abc]"]);
        assert!(rendered(&m, "12").is_empty());
        assert!(rendered(&m, "").is_empty());
    }

    #[test]
    fn test_value_matcher_ignores_kind() {
        let m = Matcher::value("12");
        assert_eq!(rendered(&m, "12"), vec!["NUMBER:[12]"]);
        assert_eq!(rendered(&m, "'12'"), vec!["STRING:[12]"]);
    }

    #[test]
    fn test_kind_value_matcher() {
        let m = Matcher::kind_value(TokenKind::Operator, "+");
        assert_eq!(rendered(&m, "+"), vec!["OPERATOR:[+]"]);
        assert!(rendered(&m, "'+'").is_empty());
        assert!(rendered(&m, "-").is_empty());
    }

    #[test]
    fn test_end_matcher() {
        let m = Matcher::end();
        assert_eq!(rendered(&m, ""), vec!["null"]);
        assert!(rendered(&m, "a").is_empty());
    }

    #[test]
    fn test_alternation_keeps_branch_order_without_dedup() {
        let m = Matcher::alternation(vec![
            Matcher::kind(TokenKind::Identifier),
            Matcher::value("x"),
            Matcher::kind(TokenKind::Number),
        ]);
        assert_eq!(rendered(&m, "x"), vec!["IDENTIFIER:[x]", "IDENTIFIER:[x]"]);
    }

    #[test]
    fn test_alternation_branches_share_start() {
        // The second branch must start at token 0 even after the first branch yielded
        let m = Matcher::alternation(vec![
            Matcher::sequence(vec![Matcher::value("a"), Matcher::value("+")]),
            Matcher::value("a"),
        ]);
        assert_eq!(positions(&m, "a+"), vec![2, 1]);
    }

    #[test]
    fn test_repetition_is_greedy_first() {
        let m = Matcher::repetition(Matcher::kind(TokenKind::Identifier), 1, None);
        assert_eq!(positions(&m, "a b c"), vec![1]);
        let m = Matcher::repetition(Matcher::kind(TokenKind::Operator), 1, None);
        assert_eq!(positions(&m, "+-*"), vec![3, 2, 1]);
    }

    #[test]
    fn test_repetition_zero_min_records_empty_last() {
        let m = Matcher::repetition(Matcher::kind(TokenKind::Operator), 0, None);
        assert_eq!(positions(&m, "+-"), vec![2, 1, 0]);
        assert_eq!(rendered(&m, "a").last().map(String::as_str), Some("[]"));
    }

    #[test]
    fn test_repetition_respects_bounds() {
        let m = Matcher::repetition(Matcher::kind(TokenKind::Operator), 2, 3);
        assert_eq!(positions(&m, "+-*/"), vec![3, 2]);
        let m = Matcher::repetition(Matcher::kind(TokenKind::Operator), 0, 0);
        assert_eq!(positions(&m, "+-"), vec![0]);
    }

    #[test]
    fn test_optional() {
        let m = Matcher::optional(Matcher::kind(TokenKind::Space));
        assert_eq!(rendered(&m, " "), vec!["[SPACE:[ ]]", "[]"]);
        assert_eq!(rendered(&m, "a"), vec!["[]"]);
    }

    #[test]
    fn test_repetition_explores_every_branch() {
        // Each step takes one or two operators, so three pluses split several ways
        let step = Matcher::alternation(vec![
            Matcher::sequence(vec![Matcher::value("+"), Matcher::value("+")]),
            Matcher::value("+"),
        ]);
        let m = Matcher::repetition(step, 1, None);
        let tokens = without_spaces("+ + +");
        let lengths: Vec<usize> = m
            .derive(&tokens.cursor())
            .map(|d| d.value.as_list().map_or(0, <[Value]>::len))
            .collect();
        // Discovery: [++], [++,+], [+], [+,++], [+,+], [+,+,+]; yielded reversed
        assert_eq!(lengths, vec![3, 2, 2, 1, 2, 1]);
    }

    #[test]
    fn test_zero_width_repetition_terminates() {
        let m = Matcher::repetition(Matcher::end(), 1, None);
        assert_eq!(rendered(&m, ""), vec!["[null]"]);
        let m = Matcher::repetition(Matcher::end(), 0, 3);
        assert_eq!(positions(&m, ""), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_sequence_cross_product() {
        let either = Matcher::alternation(vec![Matcher::value("a"), Matcher::kind(TokenKind::Identifier)]);
        let m = Matcher::sequence(vec![either.clone(), either]);
        assert_eq!(rendered(&m, "a").len(), 0);
        let pair = without_spaces("a a");
        assert_eq!(m.derive(&pair.cursor()).count(), 4);
    }

    #[test]
    fn test_empty_sequence_yields_one_empty_list() {
        let m = Matcher::sequence(vec![]);
        let tokens = tokenize("a", ".").unwrap();
        let all: Vec<Derivation> = m.derive(&tokens.cursor()).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].value, Value::List(vec![]));
        assert_eq!(all[0].cursor.position(), 0);
    }

    #[test]
    fn test_transform_applies_to_each_value() {
        let number = Matcher::kind(TokenKind::Number).map(|v| {
            let text = v.as_token().map(|t| t.text().to_string()).unwrap_or_default();
            Value::Integer(text.parse().unwrap_or(0))
        });
        let m = Matcher::repetition(number, 1, None)
            .map(|v| Value::Integer(v.into_list().unwrap_or_default().len() as i64));
        let tokens = without_spaces("1 2");
        let mut cursor = tokens.cursor();
        let values: Vec<Value> = m.matches(&mut cursor).collect();
        assert_eq!(values, vec![Value::Integer(2), Value::Integer(1)]);
    }

    #[test]
    fn test_matches_commits_on_yield() {
        let m = Matcher::repetition(Matcher::kind(TokenKind::Operator), 1, None);
        let tokens = tokenize("+-*", ".").unwrap();
        let mut cursor = tokens.cursor();
        let mut found = m.matches(&mut cursor);
        assert_eq!(found.cursor().position(), 0);
        found.next();
        assert_eq!(found.cursor().position(), 3);
        found.next();
        assert_eq!(found.cursor().position(), 2);
        drop(found);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_derive_never_moves_start() {
        let m = Matcher::kind(TokenKind::Identifier);
        let tokens = tokenize("a", ".").unwrap();
        let start = tokens.cursor();
        assert_eq!(m.derive(&start).count(), 1);
        assert_eq!(start.position(), 0);
    }
}

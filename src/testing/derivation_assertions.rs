//! Fluent assertion API for derivation lists

use crate::formats::pretty;
use crate::matching::Value;

/// Create an assertion builder for the values yielded by a matcher
pub fn assert_derivations(values: &[Value]) -> DerivationsAssertion<'_> {
    DerivationsAssertion { values }
}

pub struct DerivationsAssertion<'a> {
    values: &'a [Value],
}

impl DerivationsAssertion<'_> {
    fn renderings(&self) -> Vec<String> {
        self.values.iter().map(pretty).collect()
    }

    /// Assert the number of derivations
    pub fn count(self, expected: usize) -> Self {
        assert_eq!(
            self.values.len(),
            expected,
            "Expected {} derivations, found {}:\n{}",
            expected,
            self.values.len(),
            self.renderings().join("\n")
        );
        self
    }

    /// Assert the pretty rendering of one derivation
    pub fn rendered(self, index: usize, expected: &str) -> Self {
        let rendered = self.renderings();
        assert!(
            index < rendered.len(),
            "Derivation index {} out of bounds ({} derivations)",
            index,
            rendered.len()
        );
        assert_eq!(rendered[index], expected, "derivations[{}]", index);
        self
    }

    /// Assert the pretty rendering of every derivation, in order
    pub fn rendered_all(self, expected: &[&str]) -> Self {
        assert_eq!(self.renderings(), expected);
        self
    }

    /// Assert that no derivations were produced
    pub fn none(self) -> Self {
        self.count(0)
    }
}

//! Per-invocation configuration.

use crate::canonical::Equality;

/// Options for one matching invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Comparison rule between subject and match expressions.
    pub equality: Equality,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comparison rule.
    #[must_use]
    pub fn with_equality(mut self, equality: Equality) -> Self {
        self.equality = equality;
        self
    }
}

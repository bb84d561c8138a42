//! Match expressions.

use serde::Serialize;

use crate::canonical::{Canonical, Equality};

/// The left-hand side of a predicate.
///
/// `Wildcard` is a sentinel rather than a value: no subject can serialize to
/// it, so it never compares equal to anything and only ever matches by
/// being a wildcard.
#[derive(Clone, Debug)]
pub enum Pattern {
    /// Matches every subject.
    Wildcard,
    /// Matches subjects equal to this value.
    Value(Canonical),
}

/// The process-wide wildcard sentinel.
pub const WILDCARD: Pattern = Pattern::Wildcard;

impl Pattern {
    /// Build a value pattern from any serializable expression.
    pub fn value<T: Serialize + ?Sized>(expr: &T) -> Result<Self, serde_json::Error> {
        Canonical::of(expr).map(Pattern::Value)
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Pattern::Wildcard)
    }

    /// Test this pattern against a canonical subject.
    #[inline]
    pub fn matches(&self, subject: &Canonical, equality: Equality) -> bool {
        match self {
            Pattern::Wildcard => true,
            Pattern::Value(expected) => equality.equal(subject, expected),
        }
    }
}

/// Anything usable as the match expression of a predicate.
///
/// Implemented for [`Pattern`] itself (so `WILDCARD` can be passed where an
/// expression is expected), for an already computed [`Canonical`], and for
/// every serializable value.
pub trait IntoPattern {
    fn into_pattern(self) -> Result<Pattern, serde_json::Error>;
}

impl IntoPattern for Pattern {
    #[inline]
    fn into_pattern(self) -> Result<Pattern, serde_json::Error> {
        Ok(self)
    }
}

impl IntoPattern for Canonical {
    #[inline]
    fn into_pattern(self) -> Result<Pattern, serde_json::Error> {
        Ok(Pattern::Value(self))
    }
}

impl<T: Serialize> IntoPattern for T {
    fn into_pattern(self) -> Result<Pattern, serde_json::Error> {
        Pattern::value(&self)
    }
}

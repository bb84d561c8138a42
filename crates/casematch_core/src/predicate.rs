//! Predicate pairs: a match expression and the handler it selects.

use std::fmt;

use serde::Serialize;

use crate::errors::{invalid_predicate, MatchError};
use crate::pattern::{IntoPattern, Pattern, WILDCARD};

/// Handler invoked with the subject when its predicate wins.
pub type Handler<'a, S, R> = Box<dyn Fn(&S) -> R + 'a>;

/// A declared `(match expression, handler)` pair.
///
/// An expression that fails to serialize is kept as a rejection and reported
/// when the predicate list is evaluated, so predicate lists can still be
/// built inline without a `Result` per entry.
pub struct Predicate<'a, S: ?Sized, R> {
    pattern: Result<Pattern, String>,
    handler: Handler<'a, S, R>,
}

impl<'a, S: ?Sized, R> Predicate<'a, S, R> {
    /// Create a predicate from an explicit pattern.
    pub fn new<F>(pattern: Pattern, handler: F) -> Self
    where
        F: Fn(&S) -> R + 'a,
    {
        Predicate {
            pattern: Ok(pattern),
            handler: Box::new(handler),
        }
    }

    /// Create a predicate matching subjects equal to `expr`.
    pub fn expr<E, F>(expr: &E, handler: F) -> Self
    where
        E: Serialize + ?Sized,
        F: Fn(&S) -> R + 'a,
    {
        Predicate {
            pattern: Pattern::value(expr).map_err(|e| e.to_string()),
            handler: Box::new(handler),
        }
    }

    /// Create a predicate from anything convertible into a pattern: a value,
    /// a [`Canonical`](crate::Canonical), or the `WILDCARD` sentinel.
    pub fn of<E, F>(expr: E, handler: F) -> Self
    where
        E: IntoPattern,
        F: Fn(&S) -> R + 'a,
    {
        Predicate {
            pattern: expr.into_pattern().map_err(|e| e.to_string()),
            handler: Box::new(handler),
        }
    }

    /// Create a predicate matching every subject.
    pub fn wildcard<F>(handler: F) -> Self
    where
        F: Fn(&S) -> R + 'a,
    {
        Self::new(WILDCARD, handler)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(&self.pattern, Ok(pattern) if pattern.is_wildcard())
    }

    /// Check the predicate's shape, reporting it as the entry at `position`.
    pub fn validate(&self, position: usize) -> Result<&Pattern, MatchError> {
        self.pattern
            .as_ref()
            .map_err(|reason| invalid_predicate(position, reason))
    }

    pub fn handler(&self) -> &(dyn Fn(&S) -> R + 'a) {
        &*self.handler
    }
}

impl<S: ?Sized, R> fmt::Debug for Predicate<'_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

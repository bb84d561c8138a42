//! Predicate evaluation.
//!
//! Maps each predicate to an `EvaluatedRecord` for one subject. Records keep
//! the declaration order and carry their position, so the selector never has
//! to look back at the predicate list.

use std::fmt;

use crate::canonical::{Canonical, Equality};
use crate::errors::MatchError;
use crate::pattern::Pattern;
use crate::predicate::Predicate;

/// One predicate evaluated against one subject.
///
/// Borrows the pattern and handler from the predicate list; records never
/// outlive the call that produced them.
pub struct EvaluatedRecord<'p, S: ?Sized, R> {
    /// Index in the predicate list, `0..n`.
    pub position: usize,
    /// Whether the pattern matched the subject.
    pub matched: bool,
    pub pattern: &'p Pattern,
    pub handler: &'p dyn Fn(&S) -> R,
}

impl<S: ?Sized, R> Clone for EvaluatedRecord<'_, S, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized, R> Copy for EvaluatedRecord<'_, S, R> {}

impl<S: ?Sized, R> fmt::Debug for EvaluatedRecord<'_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluatedRecord")
            .field("position", &self.position)
            .field("matched", &self.matched)
            .field("pattern", self.pattern)
            .finish_non_exhaustive()
    }
}

/// Evaluate every predicate against `subject`, in declaration order.
///
/// A predicate without a canonical form fails the whole evaluation. No
/// handler is called here. An empty list yields no records.
pub fn evaluate<'p, S: ?Sized, R>(
    subject: &Canonical,
    predicates: &'p [Predicate<'_, S, R>],
    equality: Equality,
) -> Result<Vec<EvaluatedRecord<'p, S, R>>, MatchError> {
    let mut records = Vec::with_capacity(predicates.len());
    for (position, predicate) in predicates.iter().enumerate() {
        let pattern = predicate.validate(position)?;
        let matched = pattern.matches(subject, equality);
        tracing::trace!(position, matched, ?pattern, "evaluated predicate");
        records.push(EvaluatedRecord {
            position,
            matched,
            pattern,
            handler: predicate.handler(),
        });
    }
    Ok(records)
}

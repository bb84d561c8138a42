//! Engine entry point: evaluate, select, dispatch.

use serde::Serialize;

use crate::canonical::Canonical;
use crate::errors::{invalid_subject, no_match, MatchResult};
use crate::evaluate::evaluate;
use crate::options::MatchOptions;
use crate::predicate::Predicate;
use crate::select::select;

/// Match `subject` against `predicates` and run the winning handler.
///
/// The winner is the first predicate, in declaration order, whose pattern
/// matches. Its handler receives the original subject and its return value
/// is returned unchanged. At most one handler runs per call.
///
/// # Errors
///
/// - `NoMatch` when no predicate matches, including for an empty list.
/// - `InvalidSubject` / `InvalidPredicate` when a value cannot be serialized;
///   no handler runs in that case.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(predicates = predicates.len(), equality = ?options.equality)
)]
pub fn match_subject<S, R>(
    subject: &S,
    predicates: &[Predicate<'_, S, R>],
    options: MatchOptions,
) -> MatchResult<R>
where
    S: Serialize + ?Sized,
{
    let canonical = Canonical::of(subject).map_err(|e| invalid_subject(&e.to_string()))?;
    let records = evaluate(&canonical, predicates, options.equality)?;

    match select(records) {
        Some(winner) => {
            tracing::debug!(position = winner.position, "predicate selected");
            Ok((winner.handler)(subject))
        }
        None => {
            tracing::debug!(subject = %canonical, "no predicate matched");
            Err(no_match(canonical.rendered()))
        }
    }
}

//! Match selection.
//!
//! Folds evaluated records left to right into a single winner: the matched
//! record with the lowest position. The accumulator is `None` until the
//! first match is seen.
//!
//! Position `0` is an ordinary position. A matched candidate at position `0`
//! is kept against every later match exactly like a candidate at any other
//! position; positions are never used as presence markers.

use crate::evaluate::EvaluatedRecord;

/// One fold step: combine the current candidate with the next record.
///
/// - No candidate yet: `next` becomes the candidate if it matched.
/// - A matched candidate at a position not after `next`: the candidate stays.
/// - Otherwise a matched `next` replaces the candidate.
#[inline]
pub fn combine<'p, S: ?Sized, R>(
    acc: Option<EvaluatedRecord<'p, S, R>>,
    next: EvaluatedRecord<'p, S, R>,
) -> Option<EvaluatedRecord<'p, S, R>> {
    match acc {
        None => next.matched.then_some(next),
        Some(current) if current.matched && current.position <= next.position => Some(current),
        Some(current) => Some(if next.matched { next } else { current }),
    }
}

/// Reduce evaluated records to the winning record, if any matched.
pub fn select<'p, S, R, I>(records: I) -> Option<EvaluatedRecord<'p, S, R>>
where
    S: ?Sized,
    I: IntoIterator<Item = EvaluatedRecord<'p, S, R>>,
{
    records.into_iter().fold(None, combine)
}

#[cfg(test)]
mod tests;

//! Casematch Core - first-match selection engine.
//!
//! This crate provides:
//! - Canonical serialized form of subjects and match expressions (`Canonical`)
//! - Equality rules over canonical forms (`Equality`, `MatchOptions`)
//! - Match expressions and the wildcard sentinel (`Pattern`, `WILDCARD`)
//! - Predicate pairs of expression and handler (`Predicate`)
//! - Error types (`MatchError`, `MatchErrorKind`, `MatchResult`)
//! - The two engine stages and the entry point tying them together
//!
//! # Architecture
//!
//! Matching runs in two stages over a borrowed predicate list:
//! - The evaluator (`evaluate`) maps every predicate to an `EvaluatedRecord`
//!   carrying its position and match result, preserving declaration order.
//! - The selector (`select`) folds the records down to the lowest-position
//!   match, which `match_subject` then dispatches to.
//!
//! All derived data lives for a single call. Nothing is shared between calls,
//! so independent invocations are reentrant and can run in parallel.

mod canonical;
mod engine;
mod errors;
mod evaluate;
mod options;
mod pattern;
mod predicate;
mod select;

pub use canonical::{Canonical, Equality};
pub use engine::match_subject;
pub use errors::{MatchError, MatchErrorKind, MatchResult};
pub use evaluate::{evaluate, EvaluatedRecord};
pub use options::MatchOptions;
pub use pattern::{IntoPattern, Pattern, WILDCARD};
pub use predicate::{Handler, Predicate};
pub use select::{combine, select};

// Re-export error constructors for use by other crates
pub use errors::{invalid_predicate, invalid_subject, no_match};

//! Error types for matching.
//!
//! `MatchErrorKind` provides typed error categories. Factory functions
//! (e.g., `no_match()`) are the public constructors; they populate both
//! `kind` and `message`.

use std::fmt;

/// Result of a matching invocation.
pub type MatchResult<R> = Result<R, MatchError>;

/// Typed error category.
///
/// `NoMatch` is the only failure of the matching engine itself. The other
/// kinds reject inputs that cannot be brought into canonical form and are
/// raised before any predicate is evaluated against the subject.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchErrorKind {
    /// No predicate matched. Carries the rendered subject for diagnostics.
    #[error("No match for the expression {subject}")]
    NoMatch { subject: String },

    /// The subject could not be serialized.
    #[error("invalid subject: {reason}")]
    InvalidSubject { reason: String },

    /// A predicate's match expression could not be serialized.
    #[error("invalid predicate at position {position}: {reason}")]
    InvalidPredicate { position: usize, reason: String },
}

/// Matching error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchError {
    /// Structured error category.
    pub kind: MatchErrorKind,
    /// Human-readable error message; equals `kind.to_string()`.
    pub message: String,
}

impl MatchError {
    fn from_kind(kind: MatchErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    /// Check if this error reports an unmatched subject.
    #[inline]
    pub fn is_no_match(&self) -> bool {
        matches!(self.kind, MatchErrorKind::NoMatch { .. })
    }
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for MatchError {}

/// No predicate matched the subject.
#[cold]
pub fn no_match(subject: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::NoMatch {
        subject: subject.to_string(),
    })
}

/// The subject has no canonical form.
#[cold]
pub fn invalid_subject(reason: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::InvalidSubject {
        reason: reason.to_string(),
    })
}

/// The predicate at `position` has no canonical form.
#[cold]
pub fn invalid_predicate(position: usize, reason: &str) -> MatchError {
    MatchError::from_kind(MatchErrorKind::InvalidPredicate {
        position,
        reason: reason.to_string(),
    })
}

//! The fluent surface: `match_on(subject).apply(predicates)`.

use casematch_core::{match_subject, Equality, IntoPattern, MatchOptions, MatchResult, Predicate};
use serde::Serialize;

/// A subject waiting for its predicate list.
///
/// Created by [`match_on`]. Holds the subject by reference; the same matcher
/// can be applied to several predicate lists.
#[derive(Debug)]
pub struct Matcher<'s, S: ?Sized> {
    subject: &'s S,
    options: MatchOptions,
}

// Manual impls: `S` itself need not be `Clone`.
impl<S: ?Sized> Clone for Matcher<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Matcher<'_, S> {}

/// Start a match over `subject`.
pub fn match_on<S: Serialize + ?Sized>(subject: &S) -> Matcher<'_, S> {
    Matcher {
        subject,
        options: MatchOptions::default(),
    }
}

impl<'s, S: Serialize + ?Sized> Matcher<'s, S> {
    /// Use `equality` to compare the subject with match expressions.
    #[must_use]
    pub fn with_equality(mut self, equality: Equality) -> Self {
        self.options = self.options.with_equality(equality);
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn subject(&self) -> &'s S {
        self.subject
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Run the predicates in order and return the first match's handler result.
    pub fn apply<'a, R, I>(&self, predicates: I) -> MatchResult<R>
    where
        I: IntoIterator<Item = Predicate<'a, S, R>>,
    {
        let predicates: Vec<_> = predicates.into_iter().collect();
        self.apply_slice(&predicates)
    }

    /// Like [`Matcher::apply`], over a predicate list that is kept for reuse.
    pub fn apply_slice<R>(&self, predicates: &[Predicate<'_, S, R>]) -> MatchResult<R> {
        match_subject(self.subject, predicates, self.options)
    }
}

/// Build a predicate matching subjects equal to `expr`.
///
/// `expr` is any serializable value, or the `WILDCARD` sentinel, in which case
/// this is the same as [`wildcard`].
pub fn predicate<'a, S, R, E, F>(expr: E, handler: F) -> Predicate<'a, S, R>
where
    S: ?Sized,
    E: IntoPattern,
    F: Fn(&S) -> R + 'a,
{
    Predicate::of(expr, handler)
}

/// Build a predicate matching every subject.
pub fn wildcard<'a, S, R, F>(handler: F) -> Predicate<'a, S, R>
where
    S: ?Sized,
    F: Fn(&S) -> R + 'a,
{
    Predicate::wildcard(handler)
}

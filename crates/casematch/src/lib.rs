//! Casematch - first-match dispatch usable as an expression.
//!
//! ```
//! use casematch::{match_on, predicate, wildcard};
//!
//! let size = match_on("medium").apply([
//!     predicate("small", |_: &str| 1),
//!     predicate("medium", |_: &str| 2),
//!     wildcard(|_: &str| 0),
//! ]);
//! assert_eq!(size, Ok(2));
//! ```
//!
//! Predicates are tried in declaration order and the first whose match
//! expression equals the subject wins. Equality compares the `serde_json`
//! serialization of both sides, so object keys must appear in the same order
//! to match; `Equality::Structural` compares objects as unordered maps
//! instead. A predicate built with `wildcard` (or `predicate(WILDCARD, ..)`)
//! matches everything. When nothing matches, `apply` returns a
//! `NoMatch` error naming the subject.
//!
//! The engine itself lives in `casematch_core`; this crate is the fluent
//! surface over it.

mod matcher;

pub use casematch_core::{
    Canonical, Equality, EvaluatedRecord, Handler, IntoPattern, MatchError, MatchErrorKind,
    MatchOptions, MatchResult, Pattern, Predicate, WILDCARD,
};
pub use matcher::{match_on, predicate, wildcard, Matcher};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=casematch_core=debug` or `RUST_LOG=casematch_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

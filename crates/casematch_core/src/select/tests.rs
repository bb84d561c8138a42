#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use super::*;
use crate::pattern::{Pattern, WILDCARD};
use pretty_assertions::assert_eq;

static ANY: Pattern = WILDCARD;

fn handler(x: &i32) -> i32 {
    *x
}

fn record(position: usize, matched: bool) -> EvaluatedRecord<'static, i32, i32> {
    EvaluatedRecord {
        position,
        matched,
        pattern: &ANY,
        handler: &handler,
    }
}

fn winner(flags: &[bool]) -> Option<usize> {
    let records = flags
        .iter()
        .enumerate()
        .map(|(position, &matched)| record(position, matched));
    select(records).map(|r| r.position)
}

// Fold steps

#[test]
fn combine_empty_with_unmatched_stays_empty() {
    assert!(combine(None, record(0, false)).is_none());
}

#[test]
fn combine_empty_with_matched_takes_it() {
    assert_eq!(combine(None, record(0, true)).map(|r| r.position), Some(0));
}

#[test]
fn combine_keeps_earlier_match() {
    let kept = combine(Some(record(1, true)), record(2, true));
    assert_eq!(kept.map(|r| r.position), Some(1));
}

#[test]
fn combine_keeps_match_at_position_zero() {
    let kept = combine(Some(record(0, true)), record(1, true));
    assert_eq!(kept.map(|r| r.position), Some(0));
}

#[test]
fn combine_keeps_candidate_over_unmatched() {
    let kept = combine(Some(record(0, true)), record(1, false));
    assert_eq!(kept.map(|r| r.position), Some(0));
}

#[test]
fn combine_replaces_unmatched_candidate() {
    let replaced = combine(Some(record(0, false)), record(1, true));
    assert_eq!(replaced.map(|r| r.position), Some(1));
}

// Whole folds

#[test]
fn no_records_no_winner() {
    assert_eq!(winner(&[]), None);
}

#[test]
fn no_matches_no_winner() {
    assert_eq!(winner(&[false, false, false]), None);
}

#[test]
fn single_match_wins() {
    assert_eq!(winner(&[false, false, true, false]), Some(2));
}

#[test]
fn first_match_wins_at_position_zero() {
    assert_eq!(winner(&[true, true]), Some(0));
    assert_eq!(winner(&[true, false, true, true]), Some(0));
}

#[test]
fn first_match_wins_after_misses() {
    assert_eq!(winner(&[false, true, false, true]), Some(1));
}

#[test]
fn every_match_pattern() {
    // Exhaustive over all lists up to length 6.
    for len in 0..=6 {
        for bits in 0u32..(1 << len) {
            let flags: Vec<bool> = (0..len).map(|i| bits & (1 << i) != 0).collect();
            let expected = flags.iter().position(|&m| m);
            assert_eq!(winner(&flags), expected, "flags: {flags:?}");
        }
    }
}

#[test]
fn winner_keeps_its_pattern_and_handler() {
    let literal = Pattern::value(&7).unwrap();
    let records = [
        record(0, false),
        EvaluatedRecord {
            position: 1,
            matched: true,
            pattern: &literal,
            handler: &|x: &i32| x * 3,
        },
    ];
    let chosen = select(records);
    assert!(chosen.is_some_and(|r| !r.pattern.is_wildcard() && (r.handler)(&2) == 6));
}

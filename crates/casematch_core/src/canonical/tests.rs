#![allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use std::collections::{BTreeMap, HashMap};

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn canon<T: Serialize + ?Sized>(value: &T) -> Canonical {
    Canonical::of(value).unwrap()
}

#[derive(Serialize)]
struct Point {
    x: i32,
    y: i32,
}

// Rendering

#[test]
fn scalars_render_as_json() {
    assert_eq!(canon("foo").rendered(), "\"foo\"");
    assert_eq!(canon(&1).rendered(), "1");
    assert_eq!(canon(&true).rendered(), "true");
    assert_eq!(canon(&()).rendered(), "null");
}

#[test]
fn struct_fields_render_in_declaration_order() {
    assert_eq!(canon(&Point { x: 1, y: 2 }).rendered(), r#"{"x":1,"y":2}"#);
}

#[test]
fn json_objects_keep_insertion_order() {
    assert_eq!(canon(&json!({"b": 2, "a": 1})).rendered(), r#"{"b":2,"a":1}"#);
}

#[test]
fn non_finite_floats_render_as_null() {
    assert_eq!(canon(&f64::NAN).rendered(), "null");
    assert_eq!(canon(&f64::INFINITY).rendered(), "null");
}

#[test]
fn display_matches_rendered() {
    let c = canon(&vec![1, 2, 3]);
    assert_eq!(c.to_string(), "[1,2,3]");
}

#[test]
fn non_string_map_keys_are_rejected() {
    let mut map = BTreeMap::new();
    map.insert(vec![1u8], "v");
    assert!(Canonical::of(&map).is_err());
}

// Serialized equality

#[test]
fn serialized_equal_scalars() {
    assert!(Equality::Serialized.equal(&canon("foo"), &canon("foo")));
    assert!(!Equality::Serialized.equal(&canon("foo"), &canon("bar")));
    assert!(!Equality::Serialized.equal(&canon(&1), &canon("1")));
}

#[test]
fn serialized_is_key_order_sensitive() {
    let ab = canon(&json!({"a": 1, "b": 2}));
    let ba = canon(&json!({"b": 2, "a": 1}));
    assert!(!Equality::Serialized.equal(&ab, &ba));
}

#[test]
fn serialized_struct_equals_json_in_same_order() {
    let point = canon(&Point { x: 1, y: 2 });
    assert!(Equality::Serialized.equal(&point, &canon(&json!({"x": 1, "y": 2}))));
    assert!(!Equality::Serialized.equal(&point, &canon(&json!({"y": 2, "x": 1}))));
}

#[test]
fn values_with_same_rendering_are_equal() {
    // Distinct Rust types collapse to the same text.
    assert!(Equality::Serialized.equal(&canon(&1u8), &canon(&1i64)));
    assert!(Equality::Serialized.equal(&canon(&None::<i32>), &canon(&())));
    assert!(Equality::Serialized.equal(&canon(&f64::NAN), &canon(&())));
}

#[test]
fn serialized_keeps_integer_and_float_distinct() {
    assert!(!Equality::Serialized.equal(&canon(&1), &canon(&1.0)));
}

#[test]
fn separately_built_hash_maps_are_equal() {
    let build = || -> HashMap<String, u32> {
        ('a'..='h').map(|c| (c.to_string(), c.into())).collect()
    };
    for _ in 0..50 {
        assert!(Equality::Serialized.equal(&canon(&build()), &canon(&build())));
    }
}

#[test]
fn btree_map_equals_json_with_same_key_order() {
    let map: BTreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
    assert!(Equality::Serialized.equal(&canon(&map), &canon(&json!({"a": 1, "b": 2}))));
    assert!(!Equality::Serialized.equal(&canon(&map), &canon(&json!({"b": 2, "a": 1}))));
}

// Structural equality

#[test]
fn structural_ignores_key_order() {
    let ab = canon(&json!({"a": 1, "b": 2}));
    let ba = canon(&json!({"b": 2, "a": 1}));
    assert!(Equality::Structural.equal(&ab, &ba));
}

#[test]
fn structural_integral_float_equals_integer() {
    assert!(Equality::Structural.equal(&canon(&1), &canon(&1.0)));
    assert!(Equality::Structural.equal(&canon(&-3i64), &canon(&-3.0f32)));
    assert!(Equality::Structural.equal(&canon(&u64::MAX), &canon(&u64::MAX)));
    assert!(!Equality::Structural.equal(&canon(&1), &canon(&1.5)));
    assert!(!Equality::Structural.equal(&canon(&1), &canon("1")));
}

#[test]
fn structural_float_precision_does_not_widen_equality() {
    // 2^53 + 1 has no exact f64; the nearest float is 2^53.
    let int = canon(&9_007_199_254_740_993_i64);
    assert!(!Equality::Structural.equal(&int, &canon(&9_007_199_254_740_992.0)));
    let exact = canon(&9_007_199_254_740_992_i64);
    assert!(Equality::Structural.equal(&exact, &canon(&9_007_199_254_740_992.0)));
}

#[test]
fn structural_numbers_compared_inside_containers() {
    let ints = canon(&json!({"a": [1, 2], "b": {"c": 3}}));
    let floats = canon(&json!({"b": {"c": 3.0}, "a": [1.0, 2]}));
    assert!(Equality::Structural.equal(&ints, &floats));
    assert!(!Equality::Structural.equal(&ints, &canon(&json!({"a": [1, 2], "b": {"c": 3.5}}))));
    assert!(!Equality::Structural.equal(&ints, &canon(&json!({"a": [1, 2]}))));
}

#[test]
fn structural_still_orders_arrays() {
    assert!(!Equality::Structural.equal(&canon(&[1, 2]), &canon(&[2, 1])));
}

#[test]
fn default_is_serialized() {
    assert_eq!(Equality::default(), Equality::Serialized);
}

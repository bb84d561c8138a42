//! Canonical serialized form and the equality rules built on it.
//!
//! Every subject and match expression is serialized once with `serde_json`.
//! Object keys keep insertion order (struct fields in declaration order), so
//! the rendered text of two objects with the same entries in a different
//! order differs. `HashMap` and `HashSet` have no stable iteration order, so
//! their entries are sorted instead.

use std::fmt;

use serde::Serialize;
use serde_json::{Number, Value as JsonValue};

mod serializer;

/// A value reduced to its serialized form.
#[derive(Clone, Debug)]
pub struct Canonical {
    value: JsonValue,
    rendered: Box<str>,
}

impl Canonical {
    /// Serialize `value` into canonical form.
    ///
    /// Fails for values `serde_json` cannot represent, such as maps whose
    /// keys do not serialize to strings. Non-finite floats become `null`.
    /// Hashed maps render with keys in ascending order and hashed sets with
    /// elements ordered by their rendered text.
    pub fn of<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        let value = serializer::to_canonical_value(value)?;
        let rendered = serde_json::to_string(&value)?.into_boxed_str();
        Ok(Canonical { value, rendered })
    }

    /// The parsed tree.
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    /// The compact serialized text.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Comparison rule between a subject and a match expression.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Equality {
    /// Serialized texts must be identical. Key order matters.
    #[default]
    Serialized,
    /// Parsed trees must be equal, with objects compared as unordered maps
    /// and an integral float equal to the same integer (`1.0 == 1`).
    Structural,
}

impl Equality {
    /// Compare two canonical forms under this rule.
    #[inline]
    pub fn equal(self, a: &Canonical, b: &Canonical) -> bool {
        match self {
            Equality::Serialized => a.rendered == b.rendered,
            Equality::Structural => structurally_equal(&a.value, &b.value),
        }
    }
}

fn structurally_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Number(x), JsonValue::Number(y)) => numbers_equal(x, y),
        (JsonValue::Array(xs), JsonValue::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| structurally_equal(x, y))
        }
        (JsonValue::Object(xs), JsonValue::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| structurally_equal(x, y)))
        }
        _ => a == b,
    }
}

/// Integers compare with integers and floats with floats as usual. A float
/// equals an integer only when it has no fractional part and converts to
/// exactly that integer.
#[allow(
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    reason = "the float is checked to be integral before the exact i128 comparison"
)]
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if a.is_f64() == b.is_f64() {
        return a == b;
    }
    let (float, int) = if a.is_f64() { (a, b) } else { (b, a) };
    let Some(f) = float.as_f64() else {
        return false;
    };
    let int = int
        .as_i64()
        .map(i128::from)
        .or_else(|| int.as_u64().map(i128::from));
    f.is_finite() && f.fract() == 0.0 && int == Some(f as i128)
}

#[cfg(test)]
mod tests;

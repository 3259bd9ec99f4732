//! Typed attribute access over loosely-typed definition data.
//!
//! An [`AttributeBag`] wraps the `attributes` block of one entity definition
//! and hands out typed values through total accessors: every getter returns a
//! value for every key, substituting the caller's default whenever the stored
//! value is missing or of the wrong type. Nothing in this module can fail,
//! which is what lets every kind's configuration step be equally total.
//!
//! Bags are built once from parsed definition data and are read-only
//! afterwards. The definition entry owns its bag; kinds only borrow it for
//! the duration of their configuration step.
//!
//! # Example
//!
//! ```
//! use bestiary_defs::attributes::{AttrValue, AttributeBag};
//!
//! let bag = AttributeBag::from_pairs(vec![
//!     ("tamed".to_owned(), AttrValue::Bool(true)),
//!     ("strength".to_owned(), AttrValue::Int(9)),
//! ]);
//!
//! assert!(bag.get_bool("tamed", false));
//! assert_eq!(bag.get_int("strength", -1), 9);
//! // Missing key, wrong type: the default comes back, never an error.
//! assert_eq!(bag.get_int("tamed", -1), -1);
//! assert_eq!(bag.get_str("color", "NONE"), "NONE");
//! ```

use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// AttrValue
// ---------------------------------------------------------------------------

/// A single scalar value in a definition's attribute block.
///
/// Definition documents only carry booleans, strings and numbers; numbers
/// that fit an `i64` are stored as [`AttrValue::Int`], everything else as
/// [`AttrValue::Real`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Bool(bool),
    Str(String),
    Int(i64),
    Real(f64),
}

impl AttrValue {
    /// Convert a raw JSON value into an attribute value.
    ///
    /// Returns `None` for `null` and for nested structure (arrays, objects),
    /// which the attribute model treats as absent.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(b) => Some(AttrValue::Bool(*b)),
            serde_json::Value::String(s) => Some(AttrValue::Str(s.clone())),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(AttrValue::Int(i))
                } else {
                    n.as_f64().map(AttrValue::Real)
                }
            }
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// AttributeBag
// ---------------------------------------------------------------------------

/// An immutable, optionally-absent mapping from attribute key to value.
///
/// The bag distinguishes "no attribute block at all" ([`AttributeBag::absent`])
/// from an empty block, though the two behave identically through the
/// accessors: every getter is total and falls back to the supplied default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBag {
    entries: Option<BTreeMap<String, AttrValue>>,
}

impl AttributeBag {
    /// A bag for a definition that declared no attribute block.
    pub fn absent() -> Self {
        Self { entries: None }
    }

    /// Build a bag from already-typed key/value pairs.
    pub fn from_pairs(pairs: Vec<(String, AttrValue)>) -> Self {
        Self {
            entries: Some(pairs.into_iter().collect()),
        }
    }

    /// Build a bag from a raw JSON attribute block.
    ///
    /// `null` values and nested structure are dropped; the corresponding keys
    /// read as absent.
    pub fn from_json(map: &serde_json::Map<String, serde_json::Value>) -> Self {
        let entries = map
            .iter()
            .filter_map(|(key, value)| AttrValue::from_json(value).map(|v| (key.clone(), v)))
            .collect();
        Self {
            entries: Some(entries),
        }
    }

    /// Number of stored attributes (zero for an absent bag).
    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, BTreeMap::len)
    }

    /// Whether the bag holds no attributes at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn value(&self, key: &str) -> Option<&AttrValue> {
        self.entries.as_ref().and_then(|entries| entries.get(key))
    }

    // -- total accessors ----------------------------------------------------

    /// Read a boolean attribute, or `default` if the key is missing or holds
    /// a non-boolean value.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.value(key) {
            Some(AttrValue::Bool(b)) => *b,
            _ => default,
        }
    }

    /// Read a string attribute, or `default` if the key is missing or holds
    /// a non-string value.
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.value(key) {
            Some(AttrValue::Str(s)) => s.as_str(),
            _ => default,
        }
    }

    /// Read an integer attribute, or `default` if the key is missing or holds
    /// a value that is not an integer.
    ///
    /// A real value with a zero fractional part that fits an `i64` is coerced
    /// (documents routinely write `5.0` where `5` is meant); any other real
    /// falls back to the default.
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        match self.value(key) {
            Some(AttrValue::Int(i)) => *i,
            Some(AttrValue::Real(r)) => {
                if r.fract() == 0.0 && *r >= i64::MIN as f64 && *r <= i64::MAX as f64 {
                    *r as i64
                } else {
                    default
                }
            }
            _ => default,
        }
    }

    /// Read a real attribute, or `default` if the key is missing or holds a
    /// non-numeric value. Integer values are widened to `f64`.
    pub fn get_real(&self, key: &str, default: f64) -> f64 {
        match self.value(key) {
            Some(AttrValue::Real(r)) => *r,
            Some(AttrValue::Int(i)) => *i as f64,
            _ => default,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bag() -> AttributeBag {
        AttributeBag::from_pairs(vec![
            ("flag".to_owned(), AttrValue::Bool(true)),
            ("label".to_owned(), AttrValue::Str("BROWN".to_owned())),
            ("count".to_owned(), AttrValue::Int(9)),
            ("ratio".to_owned(), AttrValue::Real(0.75)),
        ])
    }

    // -- 1. Stored values come back verbatim --------------------------------

    #[test]
    fn stored_values_returned() {
        let bag = sample_bag();
        assert!(bag.get_bool("flag", false));
        assert_eq!(bag.get_str("label", ""), "BROWN");
        assert_eq!(bag.get_int("count", -1), 9);
        assert_eq!(bag.get_real("ratio", 0.0), 0.75);
    }

    // -- 2. Missing keys yield the default for every type -------------------

    #[test]
    fn missing_key_yields_default() {
        let bag = sample_bag();
        assert!(!bag.get_bool("nope", false));
        assert!(bag.get_bool("nope", true));
        assert_eq!(bag.get_str("nope", "fallback"), "fallback");
        assert_eq!(bag.get_int("nope", 42), 42);
        assert_eq!(bag.get_real("nope", 1.5), 1.5);
    }

    // -- 3. Wrong type yields the default ------------------------------------

    #[test]
    fn wrong_type_yields_default() {
        let bag = sample_bag();
        // "label" is a string, not a bool/int/real.
        assert!(!bag.get_bool("label", false));
        assert_eq!(bag.get_int("label", -1), -1);
        assert_eq!(bag.get_real("label", -1.0), -1.0);
        // "flag" is a bool, not a string.
        assert_eq!(bag.get_str("flag", "d"), "d");
    }

    // -- 4. Absent bag behaves like an empty one -----------------------------

    #[test]
    fn absent_bag_yields_defaults() {
        let bag = AttributeBag::absent();
        assert!(bag.is_empty());
        assert!(bag.get_bool("anything", true));
        assert_eq!(bag.get_str("anything", "x"), "x");
        assert_eq!(bag.get_int("anything", 7), 7);
        assert_eq!(bag.get_real("anything", 7.5), 7.5);
    }

    // -- 5. Numeric coercion rules -------------------------------------------

    #[test]
    fn whole_real_coerces_to_int() {
        let bag = AttributeBag::from_pairs(vec![(
            "strength".to_owned(),
            AttrValue::Real(5.0),
        )]);
        assert_eq!(bag.get_int("strength", -1), 5);
    }

    #[test]
    fn fractional_real_does_not_coerce_to_int() {
        let bag = AttributeBag::from_pairs(vec![("ratio".to_owned(), AttrValue::Real(0.5))]);
        assert_eq!(bag.get_int("ratio", -1), -1);
    }

    #[test]
    fn int_widens_to_real() {
        let bag = AttributeBag::from_pairs(vec![("count".to_owned(), AttrValue::Int(3))]);
        assert_eq!(bag.get_real("count", 0.0), 3.0);
    }

    // -- 6. JSON conversion ---------------------------------------------------

    #[test]
    fn from_json_classifies_numbers() {
        let map = serde_json::json!({
            "whole": 4,
            "fractional": 2.5,
            "flag": false,
            "label": "hi"
        });
        let bag = AttributeBag::from_json(map.as_object().unwrap());
        assert_eq!(bag.get_int("whole", -1), 4);
        assert_eq!(bag.get_real("fractional", -1.0), 2.5);
        assert!(!bag.get_bool("flag", true));
        assert_eq!(bag.get_str("label", ""), "hi");
    }

    #[test]
    fn from_json_drops_null_and_nested() {
        let map = serde_json::json!({
            "gone": null,
            "nested": { "a": 1 },
            "list": [1, 2, 3],
            "kept": 1
        });
        let bag = AttributeBag::from_json(map.as_object().unwrap());
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get_int("gone", -1), -1);
        assert_eq!(bag.get_int("nested", -1), -1);
        assert_eq!(bag.get_int("list", -1), -1);
        assert_eq!(bag.get_int("kept", -1), 1);
    }
}

//! Property tests for the attribute-bag accessor contract.
//!
//! These tests use `proptest` to generate random attribute blocks and random
//! lookups and verify that the accessors are total: every call returns a
//! value, stored values of the right type come back verbatim, and everything
//! else falls back to the supplied default.

use bestiary_defs::attributes::{AttrValue, AttributeBag};
use proptest::prelude::*;

/// Strategy that generates finite (non-NaN, non-Inf) f64 values.
fn finite_f64() -> impl Strategy<Value = f64> {
    (-1_000_000i64..1_000_000i64).prop_map(|v| v as f64 * 0.01)
}

fn attr_value_strategy() -> impl Strategy<Value = AttrValue> {
    prop_oneof![
        any::<bool>().prop_map(AttrValue::Bool),
        "[a-z_]{0,12}".prop_map(AttrValue::Str),
        any::<i64>().prop_map(AttrValue::Int),
        finite_f64().prop_map(AttrValue::Real),
    ]
}

fn bag_strategy() -> impl Strategy<Value = Vec<(String, AttrValue)>> {
    prop::collection::vec(("[a-z_]{1,8}", attr_value_strategy()), 0..16)
}

proptest! {
    // -- every accessor is total over arbitrary bags and keys ----------------

    #[test]
    fn accessors_never_panic(pairs in bag_strategy(), key in "[a-z_]{1,8}") {
        let bag = AttributeBag::from_pairs(pairs);
        let _ = bag.get_bool(&key, true);
        let _ = bag.get_str(&key, "default");
        let _ = bag.get_int(&key, 0);
        let _ = bag.get_real(&key, 0.0);
    }

    // -- absent keys return exactly the supplied default, for every type -----

    #[test]
    fn absent_key_returns_default(
        pairs in bag_strategy(),
        b in any::<bool>(),
        i in any::<i64>(),
        r in finite_f64(),
    ) {
        let pairs: Vec<(String, AttrValue)> = pairs
            .into_iter()
            .filter(|(key, _)| key != "missing")
            .collect();
        let bag = AttributeBag::from_pairs(pairs);

        prop_assert_eq!(bag.get_bool("missing", b), b);
        prop_assert_eq!(bag.get_str("missing", "fallback"), "fallback");
        prop_assert_eq!(bag.get_int("missing", i), i);
        prop_assert_eq!(bag.get_real("missing", r), r);
    }

    // -- stored values of the right type come back verbatim -------------------

    #[test]
    fn stored_bool_roundtrips(b in any::<bool>()) {
        let bag = AttributeBag::from_pairs(vec![("k".to_owned(), AttrValue::Bool(b))]);
        prop_assert_eq!(bag.get_bool("k", !b), b);
    }

    #[test]
    fn stored_int_roundtrips(i in any::<i64>()) {
        let bag = AttributeBag::from_pairs(vec![("k".to_owned(), AttrValue::Int(i))]);
        prop_assert_eq!(bag.get_int("k", i.wrapping_add(1)), i);
    }

    #[test]
    fn stored_real_roundtrips(r in finite_f64()) {
        let bag = AttributeBag::from_pairs(vec![("k".to_owned(), AttrValue::Real(r))]);
        prop_assert_eq!(bag.get_real("k", r + 1.0), r);
    }

    // -- type mismatches fall back to the default -----------------------------

    #[test]
    fn bool_value_never_satisfies_numeric_reads(b in any::<bool>(), d in any::<i64>()) {
        let bag = AttributeBag::from_pairs(vec![("k".to_owned(), AttrValue::Bool(b))]);
        prop_assert_eq!(bag.get_int("k", d), d);
        prop_assert_eq!(bag.get_str("k", "d"), "d");
    }
}

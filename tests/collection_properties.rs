//! Property tests for the collection comparisons
//!
//! Run: cargo test --test collection_properties

use proptest::prelude::*;
use primitive_ext::{similarity_score, unordered_equal};

/// Small alphabet so that duplicates and overlaps actually happen
fn arb_items() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 0..24)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn unordered_equal_is_symmetric(a in arb_items(), b in arb_items()) {
        prop_assert_eq!(unordered_equal(&a, &b), unordered_equal(&b, &a));
    }

    #[test]
    fn unordered_equal_is_reflexive(a in arb_items()) {
        prop_assert!(unordered_equal(&a, &a));
    }

    #[test]
    fn unordered_equal_ignores_order(a in arb_items(), seed in any::<u64>()) {
        let mut shuffled = a.clone();
        // Deterministic rotation plus reversal stands in for a shuffle
        if !shuffled.is_empty() {
            let mid = usize::try_from(seed % shuffled.len() as u64).unwrap_or(0);
            shuffled.rotate_left(mid);
        }
        shuffled.reverse();
        prop_assert!(unordered_equal(&a, &shuffled));
    }

    #[test]
    fn length_mismatch_is_never_equal(a in arb_items(), b in arb_items()) {
        prop_assume!(a.len() != b.len());
        prop_assert!(!unordered_equal(&a, &b));
    }

    #[test]
    fn unordered_equal_matches_sorted_comparison(a in arb_items(), b in arb_items()) {
        let mut sa = a.clone();
        let mut sb = b.clone();
        sa.sort_unstable();
        sb.sort_unstable();
        prop_assert_eq!(unordered_equal(&a, &b), sa == sb);
    }

    #[test]
    fn extra_copy_breaks_equality(a in prop::collection::vec(0u8..8, 1..24)) {
        let mut more = a.clone();
        more.push(a[0]);
        let mut fewer = a.clone();
        fewer.pop();
        prop_assert!(!unordered_equal(&a, &more));
        prop_assert!(!unordered_equal(&a, &fewer));
    }

    #[test]
    fn similarity_is_bounded(a in arb_items(), b in arb_items()) {
        let score = similarity_score(&a, &b);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of bounds", score);
    }

    #[test]
    fn similarity_is_symmetric(a in arb_items(), b in arb_items()) {
        prop_assert!((similarity_score(&a, &b) - similarity_score(&b, &a)).abs() < 1e-12);
    }

    #[test]
    fn similarity_identity(a in prop::collection::vec(0u8..8, 1..24)) {
        prop_assert!((similarity_score(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn similarity_ignores_duplicates(a in arb_items(), b in arb_items()) {
        let mut doubled = a.clone();
        doubled.extend_from_slice(&a);
        prop_assert!((similarity_score(&a, &b) - similarity_score(&doubled, &b)).abs() < 1e-12);
    }
}

#[test]
fn similarity_of_two_empty_inputs_is_zero() {
    let empty: Vec<u8> = Vec::new();
    assert!(similarity_score(&empty, &empty).abs() < f64::EPSILON);
}

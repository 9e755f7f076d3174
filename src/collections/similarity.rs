//! Fuzzy similarity score between two sequences
//!
//! Duplicates are stripped from both inputs before comparison, so repeated
//! entries never raise or lower the score. The result is a heuristic: pick a
//! threshold (something like `0.75`) instead of testing for exactly `1.0`.

use std::collections::BTreeSet;

use tracing::trace;

/// Score returned when both inputs are empty
pub const EMPTY_SIMILARITY: f64 = 0.0;

/// Compare two sequences and return an overlap score in `[0.0, 1.0]`
///
/// Both inputs are deduplicated and sorted. The shorter distinct list is
/// padded with an out-of-band sentinel until both have `max(c1, c2)` entries,
/// then the score is `|intersection| / max(c1, c2)`. The sentinel is `None`
/// in a `Vec<Option<T>>`, so it can never match a real element.
///
/// Two empty inputs score [`EMPTY_SIMILARITY`] instead of dividing by zero.
///
/// # Arguments
///
/// * `a` - First sequence
/// * `b` - Second sequence
///
/// # Returns
///
/// `0.0` for no overlap up to `1.0` for identical distinct sets
///
/// # Example
///
/// ```rust
/// use primitive_ext::collections::similarity_score;
///
/// let a = ["t1", "t2", "t3", "t4", "t5", "t6"];
/// let b = ["w1", "w2", "w3", "t4", "t5", "t6"];
/// assert!((similarity_score(a, b) - 0.5).abs() < 1e-9);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn similarity_score<A, B, T>(a: A, b: B) -> f64
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Ord,
{
    let mut l1 = distinct_sorted(a);
    let mut l2 = distinct_sorted(b);

    if l1.len() != l2.len() {
        if l1.len() > l2.len() {
            std::mem::swap(&mut l1, &mut l2);
        }
        trace!("similarity_score: padding {} -> {} entries", l1.len(), l2.len());
        l1.resize_with(l2.len(), || None);
    }
    assert_eq!(l1.len(), l2.len(), "padding must equalize both lists");

    let padded_len = l1.len();
    if padded_len == 0 {
        return EMPTY_SIMILARITY;
    }

    let bigger: BTreeSet<&Option<T>> = l2.iter().collect();
    let shared = l1
        .iter()
        .collect::<BTreeSet<_>>()
        .intersection(&bigger)
        .count();

    shared as f64 / padded_len as f64
}

/// Deduplicate and sort a sequence into the padded working representation
fn distinct_sorted<I, T>(items: I) -> Vec<Option<T>>
where
    I: IntoIterator<Item = T>,
    T: Ord,
{
    items
        .into_iter()
        .collect::<BTreeSet<T>>()
        .into_iter()
        .map(Some)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 0.001
    }

    #[test]
    fn test_identical_with_duplicates() {
        let id1 = [
            "test1", "test2", "test3", "test4", "test5", "test6", "test7",
            "testDuplicate", "testDuplicate",
        ];
        let id2 = [
            "test1", "test2", "test3", "test4", "test5", "test6", "test7",
            "testDuplicate", "testDuplicate", "testDuplicate",
        ];
        assert!(approx(similarity_score(id1, id2), 1.0));
    }

    #[test]
    fn test_half_identical() {
        let id1 = ["test1", "test2", "test3", "test4", "test5", "test6"];
        let id2 = ["WRONG1", "WRONG2", "WRONG3", "test4", "test5", "test6"];
        assert!(approx(similarity_score(id1, id2), 0.5));
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(approx(similarity_score(empty, empty), EMPTY_SIMILARITY));
        assert!(approx(similarity_score(["a", "b"], empty), 0.0));
        assert!(approx(similarity_score(empty, ["a", "b"]), 0.0));
    }

    #[test]
    fn test_padding_does_not_collide_with_default() {
        // 0 is both a real value and i32::default(); padding `b` must not match it.
        let a = [0, 1, 2, 3];
        let b = [5, 7];
        assert!(approx(similarity_score(a, b), 0.0));
        assert!(approx(similarity_score(b, a), 0.0));

        let b = [0, 7];
        assert!(approx(similarity_score(a, b), 0.25));
    }

    #[test]
    fn test_order_independent() {
        assert!(approx(similarity_score([3, 1, 2], [2, 3, 1]), 1.0));
    }
}

//! Order-insensitive multiset equality
//!
//! Two collections are considered equal here when they hold the same elements
//! with the same multiplicities, regardless of order: `[1, 2, 2]` equals
//! `[2, 1, 2]` but not `[1, 1, 2]`.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::trace;

/// Check whether two collections contain the same elements with the same
/// multiplicities, ignoring order
///
/// Both inputs must report their length up front (`ExactSizeIterator`), so a
/// cardinality mismatch is rejected before any counting happens. Otherwise a
/// frequency map is built from `a` and drained by `b`, returning `false` as
/// soon as `b` yields an element `a` never had or had fewer copies of.
///
/// Runs in `O(|a| + |b|)` time and `O(distinct(a))` space.
///
/// # Arguments
///
/// * `a` - First collection
/// * `b` - Second collection
///
/// # Returns
///
/// `true` if both collections hold the same multiset of elements
///
/// # Example
///
/// ```rust
/// use primitive_ext::collections::unordered_equal;
///
/// assert!(unordered_equal(["test1", "test2", "test3"], ["test3", "test1", "test2"]));
/// assert!(!unordered_equal(["a", "a", "b"], ["a", "b", "b"]));
/// assert!(!unordered_equal(&[1, 1], &[1]));
/// ```
pub fn unordered_equal<A, B, T>(a: A, b: B) -> bool
where
    A: IntoIterator<Item = T>,
    A::IntoIter: ExactSizeIterator,
    B: IntoIterator<Item = T>,
    B::IntoIter: ExactSizeIterator,
    T: Eq + Hash,
{
    let a = a.into_iter();
    let b = b.into_iter();

    let count = a.len();
    if count != b.len() {
        trace!("unordered_equal: length mismatch ({} vs {})", count, b.len());
        return false;
    }

    let mut frequencies: HashMap<T, usize> = HashMap::with_capacity(count);
    for item in a {
        *frequencies.entry(item).or_insert(0) += 1;
    }

    for item in b {
        match frequencies.get_mut(&item) {
            // Absent from `a`, or `b` has more copies than `a` had.
            None | Some(0) => return false,
            Some(remaining) => *remaining -= 1,
        }
    }

    // Only fails when the element type's Hash and Eq disagree.
    frequencies.values().all(|&remaining| remaining == 0)
}

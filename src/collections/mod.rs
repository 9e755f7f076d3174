//! Collection comparison
//!
//! Free functions for comparing collections plus [`CollectionExt`], which
//! exposes them as methods on any slice.

pub mod similarity;
pub mod unordered;

use std::hash::Hash;

pub use similarity::{similarity_score, EMPTY_SIMILARITY};
pub use unordered::unordered_equal;

/// Comparison methods available on every slice
///
/// # Example
///
/// ```rust
/// use primitive_ext::CollectionExt;
///
/// let a = vec![1, 2, 3];
/// assert!(a.unordered_eq(&[3, 2, 1]));
/// assert!(a.similarity(&[1, 2, 9]) > 0.6);
/// ```
pub trait CollectionExt<T> {
    /// Same elements with the same multiplicities, any order
    fn unordered_eq(&self, other: &[T]) -> bool
    where
        T: Eq + Hash;

    /// Fuzzy overlap score in `[0.0, 1.0]`, see [`similarity_score`]
    fn similarity(&self, other: &[T]) -> f64
    where
        T: Ord;
}

impl<T> CollectionExt<T> for [T] {
    fn unordered_eq(&self, other: &[T]) -> bool
    where
        T: Eq + Hash,
    {
        unordered_equal(self, other)
    }

    fn similarity(&self, other: &[T]) -> f64
    where
        T: Ord,
    {
        similarity_score(self, other)
    }
}

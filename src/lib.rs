//! primitive-ext
//!
//! Extension utilities over primitive types. The centrepiece is a pair of
//! collection comparisons:
//!
//! - **Unordered equality**: do two collections hold the same elements with
//!   the same multiplicities, in any order?
//! - **Similarity score**: how much do two collections overlap once
//!   duplicates are removed, as a ratio in `[0.0, 1.0]`?
//!
//! Around them sit small helpers for hashing, Base64, human-readable byte
//! sizes, email/ASCII checks, Unix timestamps and a few host-system chores.
//!
//! # Quick Start
//!
//! ```rust
//! use primitive_ext::{similarity_score, unordered_equal, CollectionExt};
//!
//! assert!(unordered_equal(["test1", "test2", "test3"], ["test3", "test1", "test2"]));
//!
//! let score = similarity_score(
//!     ["t1", "t2", "t3", "t4", "t5", "t6"],
//!     ["w1", "w2", "w3", "t4", "t5", "t6"],
//! );
//! assert!((score - 0.5).abs() < 1e-9);
//!
//! assert!(vec![1, 1, 2].unordered_eq(&[1, 2, 1]));
//! ```

/// Crate version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod collections;
pub mod error;

// Peripheral modules
pub mod crypto;
pub mod utils;

// Re-exports for convenience
pub use collections::{similarity_score, unordered_equal, CollectionExt, EMPTY_SIMILARITY};
pub use crypto::HexCase;
pub use error::{ExtError, Result};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_core_reexports() {
        assert!(unordered_equal(&[1, 2, 3], &[3, 2, 1]));
        assert!((similarity_score(&[1, 2], &[2, 1]) - 1.0).abs() < f64::EPSILON);
        assert_eq!(crypto::md5("", HexCase::default()), "D41D8CD98F00B204E9800998ECF8427E");
    }
}

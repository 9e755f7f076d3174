//! Hashing helpers
//!
//! Thin wrappers that hash the UTF-8 bytes of a string and return the digest
//! as hex. The digest algorithms themselves come from the `md5`, `sha1` and
//! `sha2` crates; password hashing comes from the `bcrypt` crate.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::debug;

use crate::error::Result;

/// Default BCrypt work factor (log2 of the number of rounds)
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

/// Letter case of hex digest output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HexCase {
    /// `A`-`F`
    #[default]
    Upper,
    /// `a`-`f`
    Lower,
}

impl HexCase {
    /// Encode bytes as hex in this case
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Upper => hex::encode_upper(bytes),
            Self::Lower => hex::encode(bytes),
        }
    }
}

/// Compute the MD5 hash of a string
///
/// # Arguments
///
/// * `text` - The text to hash
/// * `case` - Letter case of the hex output
///
/// # Returns
///
/// 32 hex characters
///
/// # Example
///
/// ```rust
/// use primitive_ext::crypto::{md5, HexCase};
///
/// assert_eq!(md5("test", HexCase::Lower), "098f6bcd4621d373cade4e832627b4f6");
/// ```
#[must_use]
pub fn md5(text: &str, case: HexCase) -> String {
    case.encode(&md5::compute(text.as_bytes()).0)
}

/// Compute the SHA-1 hash of a string (40 hex characters)
#[must_use]
pub fn sha1(text: &str, case: HexCase) -> String {
    case.encode(&Sha1::digest(text.as_bytes()))
}

/// Compute the SHA-256 hash of a string (64 hex characters)
///
/// # Example
///
/// ```rust
/// use primitive_ext::crypto::{sha256, HexCase};
///
/// assert_eq!(
///     sha256("test", HexCase::Lower),
///     "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
/// );
/// ```
#[must_use]
pub fn sha256(text: &str, case: HexCase) -> String {
    case.encode(&Sha256::digest(text.as_bytes()))
}

/// Compute the SHA-384 hash of a string (96 hex characters)
#[must_use]
pub fn sha384(text: &str, case: HexCase) -> String {
    case.encode(&Sha384::digest(text.as_bytes()))
}

/// Compute the SHA-512 hash of a string (128 hex characters)
#[must_use]
pub fn sha512(text: &str, case: HexCase) -> String {
    case.encode(&Sha512::digest(text.as_bytes()))
}

/// Hash a string with BCrypt
///
/// Every call draws a fresh salt, so hashing the same text twice yields two
/// different strings. Compare with [`bcrypt_verify`], never with `==`.
///
/// # Arguments
///
/// * `text` - The text to hash
/// * `cost` - Work factor, `4..=31` ([`DEFAULT_BCRYPT_COST`] is 12)
///
/// # Errors
///
/// Returns [`ExtError::Bcrypt`](crate::ExtError::Bcrypt) for a cost outside
/// the allowed range.
///
/// # Example
///
/// ```rust
/// use primitive_ext::crypto::{bcrypt_hash, bcrypt_verify};
///
/// let hash = bcrypt_hash("hunter2", 4).unwrap();
/// assert!(bcrypt_verify(&hash, "hunter2").unwrap());
/// ```
pub fn bcrypt_hash(text: &str, cost: u32) -> Result<String> {
    debug!("bcrypt_hash: cost {}", cost);
    Ok(bcrypt::hash(text, cost)?)
}

/// Hash a string with SHA-384 followed by BCrypt
///
/// The text is first reduced to the Base64 form of its SHA-384 digest, which
/// lifts BCrypt's 72-byte input limit. Verify with [`bcrypt_verify_enhanced`].
///
/// # Errors
///
/// Same as [`bcrypt_hash`].
pub fn bcrypt_hash_enhanced(text: &str, cost: u32) -> Result<String> {
    bcrypt_hash(&sha384_base64(text), cost)
}

/// Check a plaintext against a hash produced by [`bcrypt_hash`]
///
/// # Arguments
///
/// * `hash` - The stored BCrypt hash
/// * `plaintext` - The candidate text
///
/// # Errors
///
/// Returns [`ExtError::Bcrypt`](crate::ExtError::Bcrypt) when `hash` is not a
/// well-formed BCrypt string. A mismatch is `Ok(false)`, not an error.
pub fn bcrypt_verify(hash: &str, plaintext: &str) -> Result<bool> {
    Ok(bcrypt::verify(plaintext, hash)?)
}

/// Check a plaintext against a hash produced by [`bcrypt_hash_enhanced`]
///
/// # Errors
///
/// Same as [`bcrypt_verify`].
pub fn bcrypt_verify_enhanced(hash: &str, plaintext: &str) -> Result<bool> {
    bcrypt_verify(hash, &sha384_base64(plaintext))
}

fn sha384_base64(text: &str) -> String {
    STANDARD.encode(Sha384::digest(text.as_bytes()))
}

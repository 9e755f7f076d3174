//! String utility functions
//!
//! Joining with reversible separators, email validation and ASCII checks.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::error::{ExtError, Result};

/// One `@`, a non-empty local part, a dotted domain and no whitespace
#[allow(clippy::expect_used)]
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email regex is valid")
});

/// Join strings into a single comma-separated string
///
/// # Errors
///
/// `ExtError::InvalidArgument` if any item contains a comma
///
/// # Example
///
/// ```rust
/// use primitive_ext::utils::strings::to_comma_separated_string;
///
/// let joined = to_comma_separated_string(["a", "b", "c"]).unwrap();
/// assert_eq!(joined, "a,b,c");
/// assert!(to_comma_separated_string(["a", "b,c"]).is_err());
/// ```
pub fn to_comma_separated_string<I, S>(items: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    to_custom_char_separated_string(items, ',')
}

/// Join strings into a single string separated by `separator`
///
/// The output must split back into the original items with
/// `str::split(separator)`, so an item containing the separator is rejected.
///
/// # Arguments
///
/// * `items` - The strings to join
/// * `separator` - The character placed between items
///
/// # Returns
///
/// The joined string (empty for no items)
///
/// # Errors
///
/// `ExtError::InvalidArgument` naming the first item that contains `separator`
pub fn to_custom_char_separated_string<I, S>(items: I, separator: char) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::with_capacity(64);

    for (i, item) in items.into_iter().enumerate() {
        let item = item.as_ref();
        if item.contains(separator) {
            warn!("Refusing to join string containing separator '{}'", separator);
            return Err(ExtError::invalid_argument(format!(
                "string contains the separator char '{separator}', which would break splitting it back: {item}"
            )));
        }
        if i > 0 {
            result.push(separator);
        }
        result.push_str(item);
    }

    Ok(result)
}

/// Check whether a string looks like a valid email address
///
/// # Example
///
/// ```rust
/// use primitive_ext::utils::strings::is_valid_email;
///
/// assert!(is_valid_email("email@example.com"));
/// assert!(!is_valid_email("email@baddomain"));
/// assert!(!is_valid_email(""));
/// ```
#[must_use]
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Check whether every character is 7-bit ASCII (empty strings are ASCII)
#[must_use]
pub const fn is_ascii(input: &str) -> bool {
    input.is_ascii()
}

/// Encode a string as UTF-8 bytes
#[must_use]
pub fn utf8_get_bytes(input: &str) -> Vec<u8> {
    input.as_bytes().to_vec()
}

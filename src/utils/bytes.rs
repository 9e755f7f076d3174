//! Byte-sequence utility functions
//!
//! Human-readable sizes, Base64 / Base64-URL codecs and UTF-8 decoding.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::error::Result;

const SIZE_SUFFIXES: [&str; 7] = [" B", " KB", " MB", " GB", " TB", " PB", " EB"];

/// Standard alphabet; decoding accepts input with or without `=` padding
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// URL-safe alphabet; encodes without padding, decodes either way
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Format a byte count as a human-readable size string
///
/// Uses powers of 1024 and one decimal place (ties round to even), without a
/// trailing `.0`.
///
/// # Arguments
///
/// * `byte_count` - Number of bytes
///
/// # Returns
///
/// A string such as `"0 B"`, `"1.5 KB"` or `"20 MB"`
///
/// # Example
///
/// ```rust
/// use primitive_ext::utils::bytes::file_size_string;
///
/// assert_eq!(file_size_string(0), "0 B");
/// assert_eq!(file_size_string(1536), "1.5 KB");
/// assert_eq!(file_size_string(20 * 1024 * 1024), "20 MB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
pub fn file_size_string(byte_count: u64) -> String {
    if byte_count == 0 {
        return format!("0{}", SIZE_SUFFIXES[0]);
    }

    // floor(log1024(n)) == floor(log2(n)) / 10
    let exponent = (63 - byte_count.leading_zeros()) / 10;
    let scaled = byte_count as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 10.0).round_ties_even() / 10.0;

    format!("{rounded}{}", SIZE_SUFFIXES[exponent as usize])
}

/// Human-readable size of a byte buffer, see [`file_size_string`]
#[must_use]
pub fn bytes_size_string(bytes: &[u8]) -> String {
    file_size_string(bytes.len() as u64)
}

/// Encode bytes as standard Base64
///
/// # Arguments
///
/// * `bytes` - The bytes to encode
/// * `omit_padding` - Strip the trailing `=` characters
///
/// # Example
///
/// ```rust
/// use primitive_ext::utils::bytes::to_base64_string;
///
/// assert_eq!(to_base64_string(b"ab", false), "YWI=");
/// assert_eq!(to_base64_string(b"ab", true), "YWI");
/// ```
#[must_use]
pub fn to_base64_string(bytes: &[u8], omit_padding: bool) -> String {
    let encoded = STANDARD_LENIENT.encode(bytes);
    if omit_padding {
        encoded.trim_end_matches('=').to_string()
    } else {
        encoded
    }
}

/// Decode standard Base64, padded or not
///
/// # Errors
///
/// `ExtError::Base64` if the input is not valid Base64
pub fn from_base64_string(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD_LENIENT.decode(encoded)?)
}

/// Encode bytes as unpadded Base64-URL (`-` and `_` instead of `+` and `/`)
///
/// # Example
///
/// ```rust
/// use primitive_ext::utils::bytes::to_base64_url_string;
///
/// assert_eq!(to_base64_url_string(&[0xfb, 0xff]), "-_8");
/// ```
#[must_use]
pub fn to_base64_url_string(bytes: &[u8]) -> String {
    URL_SAFE_LENIENT.encode(bytes)
}

/// Decode Base64-URL, padded or not
///
/// # Errors
///
/// `ExtError::Base64` if the input is not valid Base64-URL
pub fn from_base64_url_string(encoded: &str) -> Result<Vec<u8>> {
    Ok(URL_SAFE_LENIENT.decode(encoded)?)
}

/// Decode a UTF-8 byte buffer into a `String`
///
/// # Errors
///
/// `ExtError::Utf8` if the bytes are not valid UTF-8
pub fn utf8_get_string(bytes: &[u8]) -> Result<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

//! Utility modules for primitive-ext
//!
//! Small, stateless helpers over bytes, strings, date-times and the host
//! system.

pub mod browser;
pub mod bytes;
pub mod fs;
pub mod strings;
pub mod time;

// Re-export commonly used utilities
pub use bytes::{
    bytes_size_string,
    file_size_string,
    from_base64_string,
    from_base64_url_string,
    to_base64_string,
    to_base64_url_string,
    utf8_get_string,
};

pub use strings::{
    is_ascii,
    is_valid_email,
    to_comma_separated_string,
    to_custom_char_separated_string,
    utf8_get_bytes,
};

pub use time::{
    almost_equals,
    from_unix_time_milliseconds,
    from_unix_time_seconds,
    to_rfc3339_string,
    to_unix_time_milliseconds,
    to_unix_time_seconds,
    DEFAULT_ALMOST_EQUALS_THRESHOLD,
};

pub use browser::open_url_in_browser;
pub use fs::delete_recursively;

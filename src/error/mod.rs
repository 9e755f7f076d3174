//! Error types for primitive-ext
//!
//! The two collection algorithms are infallible; everything here belongs to
//! the peripheral utilities (encoding, timestamps, file system, browser).

use thiserror::Error;

/// Main error type for primitive-ext
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtError {
    // Input errors

    /// An argument violated the function's contract
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Malformed Base64 / Base64-URL input
    #[error("Invalid base64: {0}")]
    Base64(String),

    /// Bytes were not valid UTF-8
    #[error("UTF-8 error: {0}")]
    Utf8(String),

    /// Bad BCrypt cost or malformed BCrypt hash
    #[error("BCrypt error: {0}")]
    Bcrypt(String),

    /// Unix timestamp outside the range `chrono` can represent
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    // External errors

    /// Generic I/O error (file system, process spawning)
    #[error("I/O error: {0}")]
    Io(String),

    /// Custom error with message
    #[error("{0}")]
    Custom(String),
}

/// Type alias for Results using `ExtError`
pub type Result<T> = std::result::Result<T, ExtError>;

impl ExtError {
    /// Create a custom error with a message
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        Self::Custom(msg.into())
    }

    /// Create an invalid-argument error with a message
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Check if this error was caused by bad caller input
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_)
                | Self::Base64(_)
                | Self::Utf8(_)
                | Self::Bcrypt(_)
                | Self::TimestampOutOfRange(_)
        )
    }

    /// Check if this error came from the operating system
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for ExtError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}

impl From<std::string::FromUtf8Error> for ExtError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        Self::Utf8(error.to_string())
    }
}

impl From<base64::DecodeError> for ExtError {
    fn from(error: base64::DecodeError) -> Self {
        Self::Base64(error.to_string())
    }
}

impl From<bcrypt::BcryptError> for ExtError {
    fn from(error: bcrypt::BcryptError) -> Self {
        Self::Bcrypt(error.to_string())
    }
}

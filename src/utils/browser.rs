//! Open URLs in the system browser

use tracing::info;

use crate::error::{ExtError, Result};

/// Open `url` with the platform's default handler
///
/// Uses `xdg-open` (or an equivalent) on Linux, `open` on macOS and `start`
/// on Windows, via the `open` crate.
///
/// # Errors
///
/// `ExtError::InvalidArgument` for an empty URL, `ExtError::Io` if no opener
/// could be launched
pub fn open_url_in_browser(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(ExtError::invalid_argument("URL must not be empty"));
    }

    info!("Opening {} in browser", url);
    open::that(url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_is_rejected() {
        assert!(matches!(open_url_in_browser(""), Err(ExtError::InvalidArgument(_))));
        assert!(matches!(open_url_in_browser("   "), Err(ExtError::InvalidArgument(_))));
    }
}

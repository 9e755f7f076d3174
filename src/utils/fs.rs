//! File-system helpers

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;

/// Delete every file and sub-directory inside `dir`
///
/// The directory itself is kept, only its contents are removed. A path that
/// does not exist (or is not a directory) is left alone.
///
/// # Errors
///
/// `ExtError::Io` if any entry cannot be listed or removed
pub fn delete_recursively<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        debug!("delete_recursively: {} is not a directory, skipping", dir.display());
        return Ok(());
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            delete_recursively(&path)?;
            fs::remove_dir(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }

    debug!("delete_recursively: emptied {}", dir.display());
    Ok(())
}

//! Local persistence for generated attachments.

use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Write `bytes` to `directory/file_name`, creating missing directories.
///
/// The payload goes out in a single write that replaces any existing file.
/// There is no temp-file rename, so a crash mid-write can leave a truncated file.
pub fn persist(directory: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(directory)?;

    let path = directory.join(file_name);
    fs::write(&path, bytes)?;
    tracing::info!("Saved {} ({} bytes)", path.display(), bytes.len());

    Ok(path)
}

/// Read a saved file back for display.
pub fn read_back(path: &Path) -> Result<Vec<u8>> {
    Ok(fs::read(path)?)
}

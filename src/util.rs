//! Utility functions shared across modules.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{FeaturePackError, Result};

/// Maximum file size that can be read into memory (1 MB).
///
/// Manifests are small declarative documents; anything larger is almost
/// certainly a mistake and would only waste memory at startup.
pub const MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Read a file into a string with size limit protection.
///
/// # Errors
///
/// Returns an error if the file cannot be read or exceeds
/// [`MAX_FILE_SIZE`].
pub fn read_to_string_limited(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| FeaturePackError::io(path, e))?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE {
        return Err(FeaturePackError::io(
            path,
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file is too large ({size} bytes, max {MAX_FILE_SIZE} bytes)"),
            ),
        ));
    }

    fs::read_to_string(path).map_err(|e| FeaturePackError::io(path, e))
}

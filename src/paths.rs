//! Pure path-string utilities used during discovery and for logical
//! view/asset path construction.
//!
//! View and javascript paths are logical, URL-shaped strings: they are
//! handed to the host's view lookup and asset pipeline, not opened on
//! disk, so they always join with forward slashes regardless of
//! platform.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::is_excluded_name;

/// The base directory name of a path, if it has a representable one.
pub fn base_dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
}

/// Strip a root prefix from a path, leaving the path untouched when it
/// does not live under the root.
pub fn strip_root(root: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Render a path as a forward-slash-joined logical string.
pub fn to_logical(path: &Path) -> String {
    let parts: Vec<&str> = path
        .iter()
        .filter_map(|component| component.to_str())
        .collect();
    parts.join("/")
}

/// Join a logical tail onto a path, producing a forward-slash string.
pub fn logical_join(base: &Path, tail: &str) -> String {
    format!("{}/{}", to_logical(base), tail)
}

/// Immediate subdirectories of `dir` that are unit candidates, sorted
/// lexicographically by name.
///
/// Names starting with the excluded prefix (`_`) are skipped. Sorting
/// makes discovery order deterministic: directory listing order is
/// platform-dependent, and route registration order must be
/// reproducible across restarts.
pub fn unit_dirs(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if is_excluded_name(name) {
            continue;
        }
        dirs.push(entry.path());
    }
    dirs.sort();
    Ok(dirs)
}

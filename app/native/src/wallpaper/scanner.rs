//! Wallpaper discovery.
//!
//! Recursively walks the configured wallpaper roots and collects candidate
//! source images.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

/// Supported image file extensions.
const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Checks if a file has a supported image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Recursively collects supported images from the given directories.
///
/// Hidden files and directories are skipped (the roots themselves may be
/// hidden), duplicates are dropped, and the result is naturally sorted for
/// stable listings. Directories that do not exist are skipped with a warning.
#[must_use]
pub fn scan_directories(dirs: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files: Vec<PathBuf> = Vec::new();

    for dir in dirs {
        if !dir.is_dir() {
            warn!(path = %dir.display(), "skipping missing wallpaper directory");
            continue;
        }

        let walker = WalkDir::new(dir)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker.filter_map(Result::ok) {
            let path = entry.path();
            if entry.file_type().is_file()
                && is_supported_image(path)
                && seen.insert(path.to_path_buf())
            {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort_by(|a, b| natord::compare(a.to_string_lossy().as_ref(), b.to_string_lossy().as_ref()));
    files
}

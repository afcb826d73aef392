//! Processed-wallpaper store.
//!
//! Generated images live under `~/.local/processed-wallpapers`, one desktop
//! and one lock-screen file per output, named deterministically from the
//! output's name so concurrent generation for different outputs never writes
//! to the same path.

use std::path::{Path, PathBuf};

/// Store location relative to the home directory.
const PROCESSED_DIR: &str = ".local/processed-wallpapers";

/// Returns the directory that holds the generated wallpaper files.
///
/// Falls back to `/tmp/swaypaper` if the home directory cannot be determined.
#[must_use]
pub fn processed_dir() -> PathBuf {
    dirs::home_dir().map_or_else(
        || PathBuf::from("/tmp/swaypaper"),
        |home| home.join(PROCESSED_DIR),
    )
}

/// Ensures the store directory exists and returns it.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_processed_dir() -> std::io::Result<PathBuf> {
    let dir = processed_dir();
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Returns the (desktop, lock-screen) file paths for the named output.
#[must_use]
pub fn paths_for_output(dir: &Path, output_name: &str) -> (PathBuf, PathBuf) {
    (
        dir.join(format!("wallpaper-{output_name}.png")),
        dir.join(format!("lock-screen-{output_name}.png")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processed_dir_is_absolute() {
        assert!(processed_dir().is_absolute());
    }

    #[test]
    fn test_paths_for_output_are_deterministic() {
        let dir = Path::new("/store");
        let (desktop, lock) = paths_for_output(dir, "eDP-1");
        assert_eq!(desktop, PathBuf::from("/store/wallpaper-eDP-1.png"));
        assert_eq!(lock, PathBuf::from("/store/lock-screen-eDP-1.png"));
    }

    #[test]
    fn test_paths_for_different_outputs_are_disjoint() {
        let dir = Path::new("/store");
        let (d1, l1) = paths_for_output(dir, "DP-1");
        let (d2, l2) = paths_for_output(dir, "DP-2");
        assert_ne!(d1, d2);
        assert_ne!(l1, l2);
        assert_ne!(d1, l1);
        assert_ne!(d2, l2);
    }
}

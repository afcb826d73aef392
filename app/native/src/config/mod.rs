//! Configuration module for swaypaper.
//!
//! The configuration file lives at `~/.config/swaypaper/config.json` and
//! supports JSONC format (JSON with comments). Both single-line (`//`) and
//! multi-line (`/* */`) comments are allowed.
//!
//! A default configuration file is written on first run so users have a
//! template to edit.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::{fs, io};

use json_comments::StripComments;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::platform::path::expand;

/// Default wallpaper root directory.
const DEFAULT_DIRECTORY: &str = "~/wallpapers";

/// Default Gaussian blur sigma for the lock-screen backdrop.
const DEFAULT_BLUR: f32 = 5.0;

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read the configuration file.
    #[error("failed to read configuration file: {0}")]
    Read(#[from] io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wallpaper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Wallpaper root directories, searched recursively for images.
    /// Entries may use `~` for the home directory.
    pub directories: Vec<String>,

    /// Gaussian blur sigma applied to the lock-screen backdrop.
    pub blur: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directories: vec![DEFAULT_DIRECTORY.to_string()],
            blur: DEFAULT_BLUR,
        }
    }
}

impl Config {
    /// Returns the expanded wallpaper directories that exist on disk.
    ///
    /// Missing entries are skipped with a warning rather than failing the
    /// run. When nothing configured exists, the default directory is used.
    #[must_use]
    pub fn wallpaper_directories(&self) -> Vec<PathBuf> {
        let mut existing = Vec::new();

        for raw in &self.directories {
            let path = expand(raw);
            if path.is_dir() {
                existing.push(path);
            } else {
                warn!(path = %path.display(), "configured wallpaper directory does not exist");
            }
        }

        if existing.is_empty() {
            existing.push(expand(DEFAULT_DIRECTORY));
        }

        existing
    }
}

/// Returns the configuration directory (`~/.config/swaypaper`).
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| expand("~/.config")).join("swaypaper")
}

/// Returns the default configuration file path.
#[must_use]
pub fn config_file_path() -> PathBuf { config_dir().join("config.json") }

/// Loads the configuration from an explicit path.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or invalid.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;

    // Strip JSONC comments before handing the bytes to serde.
    let mut stripped = String::new();
    StripComments::new(contents.as_bytes()).read_to_string(&mut stripped)?;

    Ok(serde_json::from_str(&stripped)?)
}

/// Loads the configuration from the default location, writing a template on
/// first run. Falls back to defaults if the file is unreadable or invalid.
#[must_use]
pub fn load_or_create() -> Config {
    let path = config_file_path();

    if path.exists() {
        return match load_from_path(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, path = %path.display(), "failed to load configuration, using defaults");
                Config::default()
            }
        };
    }

    let config = Config::default();
    match write_template(&path, &config) {
        Ok(()) => info!(path = %path.display(), "created default configuration file"),
        Err(err) => warn!(error = %err, path = %path.display(), "failed to create default configuration file"),
    }
    config
}

/// Writes a template configuration file.
fn write_template(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_string_pretty(config)?;
    fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as IoWrite;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.directories, vec![DEFAULT_DIRECTORY.to_string()]);
        assert!((config.blur - DEFAULT_BLUR).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let result = load_from_path(Path::new("/nonexistent/config.json"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_path_parses_jsonc() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"{{
                // wallpaper roots
                "directories": ["/tmp/walls"],
                /* heavier blur */
                "blur": 8.0
            }}"#
        )
        .unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.directories, vec!["/tmp/walls".to_string()]);
        assert!((config.blur - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_load_from_path_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{}").unwrap();

        let config = load_from_path(&path).unwrap();
        assert_eq!(config.directories, vec![DEFAULT_DIRECTORY.to_string()]);
    }

    #[test]
    fn test_load_from_path_invalid_json_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let result = load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_wallpaper_directories_skips_missing_entries() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("walls");
        fs::create_dir(&existing).unwrap();

        let config = Config {
            directories: vec![
                existing.to_string_lossy().into_owned(),
                "/nonexistent/wallpaper/dir".to_string(),
            ],
            ..Default::default()
        };

        let dirs = config.wallpaper_directories();
        assert_eq!(dirs, vec![existing]);
    }

    #[test]
    fn test_wallpaper_directories_falls_back_to_default() {
        let config = Config {
            directories: vec!["/nonexistent/wallpaper/dir".to_string()],
            ..Default::default()
        };

        let dirs = config.wallpaper_directories();
        assert_eq!(dirs.len(), 1);
        assert!(dirs[0].to_string_lossy().ends_with("wallpapers"));
    }

    #[test]
    fn test_config_file_path_is_under_config_dir() {
        let path = config_file_path();
        assert!(path.to_string_lossy().contains("swaypaper"));
        assert!(path.to_string_lossy().ends_with("config.json"));
    }
}

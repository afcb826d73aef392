//! Error types for swaypaper.
//!
//! This module provides the unified error type returned by CLI execution.
//! Component-specific errors live next to their components ([`crate::ipc`],
//! [`crate::wallpaper`], [`crate::config`]) and convert into this type at the
//! command boundary.

use thiserror::Error;

use crate::config::ConfigError;
use crate::ipc::IpcError;
use crate::wallpaper::WallpaperError;

/// Errors that can occur during application execution.
#[derive(Debug, Error)]
pub enum SwaypaperError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// IPC communication error.
    #[error("IPC error: {0}")]
    Ipc(#[from] IpcError),
    /// Wallpaper generation or assignment failed.
    #[error("Wallpaper error: {0}")]
    Wallpaper(#[from] WallpaperError),
    /// Generic command error.
    #[error("{0}")]
    Command(String),
}

impl From<std::io::Error> for SwaypaperError {
    fn from(err: std::io::Error) -> Self { Self::Command(err.to_string()) }
}

impl From<serde_json::Error> for SwaypaperError {
    fn from(err: serde_json::Error) -> Self { Self::Command(err.to_string()) }
}

//! Wallpaper manager: per-output assignment of generated backgrounds.
//!
//! # Scheduling model
//!
//! Compositing is fanned out to one worker thread per connected output. The
//! workers are independent: each owns its decoded source image and generated
//! rasters, does no IPC, and writes to file paths keyed by its output's name,
//! so nothing is shared or locked. A single collector drains the completion
//! channel and issues the compositor command for each output, strictly after
//! that output's files are on disk: a worker only signals completion once
//! both writes have returned success. Commands across different outputs are
//! applied in whatever order the workers finish.

pub mod compose;
pub mod scanner;

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use image::ImageReader;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{info, warn};

use crate::cache;
use crate::config::Config;
use crate::ipc::{IpcError, SwayClient};
use crate::screen::Screen;

/// Errors that can occur in wallpaper management.
#[derive(Debug, Error)]
pub enum WallpaperError {
    /// No wallpapers available in the configured directories.
    #[error("no wallpapers found in the configured directories")]
    NoWallpapers,

    /// The requested output is not connected.
    #[error("output \"{name}\" is not connected; connected outputs: {known}")]
    OutputNotFound { name: String, known: String },

    /// The requested source image does not exist or has an unsupported
    /// format.
    #[error("not a usable wallpaper image: {0}")]
    UnsupportedSource(String),

    /// An output reported zero-sized bounds; no geometry can be derived.
    #[error("output \"{0}\" reports zero-sized bounds")]
    DegenerateOutput(String),

    /// Failed to read or decode a source image.
    #[error("failed to read image: {0}")]
    ImageRead(String),

    /// Failed to save a generated image.
    #[error("failed to save processed image: {0}")]
    ImageSave(String),

    /// The processed-wallpaper store could not be prepared.
    #[error("failed to prepare the wallpaper store: {0}")]
    Store(String),

    /// A compositing worker could not be spawned.
    #[error("failed to spawn compositing worker: {0}")]
    Worker(String),

    /// IPC failure talking to the compositor.
    #[error(transparent)]
    Ipc(#[from] IpcError),
}

/// Generated file locations for one output.
#[derive(Debug, Clone)]
pub struct GeneratedPaths {
    pub desktop: PathBuf,
    pub lock_screen: PathBuf,
}

/// Manages wallpaper selection, generation, and assignment.
pub struct WallpaperManager {
    client: SwayClient,
    wallpapers: Vec<PathBuf>,
    blur_sigma: f32,
    store_dir: PathBuf,
}

impl WallpaperManager {
    /// Creates a manager from the configuration.
    ///
    /// Scans the configured directories and prepares the processed-image
    /// store.
    ///
    /// # Errors
    ///
    /// Returns an error if no wallpapers are found or the store directory
    /// cannot be created.
    pub fn new(client: SwayClient, config: &Config) -> Result<Self, WallpaperError> {
        let wallpapers = scanner::scan_directories(&config.wallpaper_directories());
        if wallpapers.is_empty() {
            return Err(WallpaperError::NoWallpapers);
        }

        let store_dir =
            cache::ensure_processed_dir().map_err(|err| WallpaperError::Store(err.to_string()))?;

        Ok(Self {
            client,
            wallpapers,
            blur_sigma: config.blur,
            store_dir,
        })
    }

    /// Assigns a random wallpaper to every connected output.
    ///
    /// Per-output failures (unreadable source, failed write, rejected
    /// command) are logged and do not prevent the remaining outputs from
    /// being updated. Failing to query the output list at all is fatal.
    ///
    /// Returns the number of outputs that were updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the output query fails or a worker cannot be
    /// spawned.
    pub fn apply_random(&self) -> Result<usize, WallpaperError> {
        let screens = self.client.outputs()?;
        if screens.is_empty() {
            warn!("compositor reports no outputs");
            return Ok(0);
        }

        let mut sources = self.wallpapers.clone();
        sources.shuffle(&mut rand::rng());

        let (tx, rx) = mpsc::channel();
        for (index, screen) in screens.into_iter().enumerate() {
            // Cycle when outputs outnumber wallpapers.
            let source = sources[index % sources.len()].clone();
            let store_dir = self.store_dir.clone();
            let blur_sigma = self.blur_sigma;
            let tx = tx.clone();

            thread::Builder::new()
                .name(format!("compose-{}", screen.name))
                .spawn(move || {
                    let result = compose_and_write(&screen, &source, blur_sigma, &store_dir);
                    // Completion is signalled only after both files are
                    // written; the collector below relies on that ordering.
                    let _ = tx.send((screen, source, result));
                })
                .map_err(|err| WallpaperError::Worker(err.to_string()))?;
        }
        drop(tx);

        let mut applied = 0;
        for (screen, source, result) in rx {
            match result {
                Ok(paths) => match self.client.set_background(&screen.name, &paths.desktop) {
                    Ok(()) => {
                        info!(
                            output = %screen.name,
                            wallpaper = %source.display(),
                            "background applied"
                        );
                        applied += 1;
                    }
                    Err(err) => {
                        warn!(output = %screen.name, error = %err, "failed to apply background");
                    }
                },
                Err(err) => {
                    warn!(output = %screen.name, error = %err, "skipping output");
                }
            }
        }

        Ok(applied)
    }

    /// Assigns a wallpaper to a single named output.
    ///
    /// With `source` given, that file is used (it must exist and have a
    /// supported extension); otherwise a random wallpaper is picked.
    ///
    /// # Errors
    ///
    /// Returns an error if the output is unknown, the source is unusable, or
    /// generation/assignment fails.
    pub fn apply_to_output(
        &self,
        output_name: &str,
        source: Option<&Path>,
    ) -> Result<GeneratedPaths, WallpaperError> {
        let screens = self.client.outputs()?;
        let screen = screens
            .iter()
            .find(|screen| screen.name == output_name)
            .cloned()
            .ok_or_else(|| WallpaperError::OutputNotFound {
                name: output_name.to_string(),
                known: screens
                    .iter()
                    .map(|screen| screen.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        let source = match source {
            Some(path) => {
                if !path.is_file() || !scanner::is_supported_image(path) {
                    return Err(WallpaperError::UnsupportedSource(path.display().to_string()));
                }
                path.to_path_buf()
            }
            None => self.pick_random(),
        };

        let paths = compose_and_write(&screen, &source, self.blur_sigma, &self.store_dir)?;
        self.client.set_background(&screen.name, &paths.desktop)?;
        info!(output = %screen.name, wallpaper = %source.display(), "background applied");

        Ok(paths)
    }

    fn pick_random(&self) -> PathBuf {
        use rand::Rng as _;

        let index = rand::rng().random_range(0..self.wallpapers.len());
        self.wallpapers[index].clone()
    }
}

/// Decodes the source, renders both derived images, and writes them to the
/// store. Returns only once both files are fully on disk.
fn compose_and_write(
    screen: &Screen,
    source: &Path,
    blur_sigma: f32,
    store_dir: &Path,
) -> Result<GeneratedPaths, WallpaperError> {
    if !screen.rect.is_positive() {
        return Err(WallpaperError::DegenerateOutput(screen.name.clone()));
    }

    let image = ImageReader::open(source)
        .map_err(|_| WallpaperError::ImageRead(source.display().to_string()))?
        .decode()
        .map_err(|_| WallpaperError::ImageRead(source.display().to_string()))?;

    let result = compose::compose(&image, screen.rect, blur_sigma);
    let (desktop_path, lock_path) = cache::paths_for_output(store_dir, &screen.name);

    result
        .lock_screen
        .save(&lock_path)
        .map_err(|_| WallpaperError::ImageSave(lock_path.display().to_string()))?;
    result
        .desktop
        .save(&desktop_path)
        .map_err(|_| WallpaperError::ImageSave(desktop_path.display().to_string()))?;

    Ok(GeneratedPaths {
        desktop: desktop_path,
        lock_screen: lock_path,
    })
}

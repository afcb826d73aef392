//! Wallpaper CLI commands.

use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::error::SwaypaperError;
use crate::ipc::SwayClient;
use crate::wallpaper::WallpaperManager;

/// Execute the default apply command: random wallpapers on all outputs.
pub fn execute_apply(config: &Config) -> Result<(), SwaypaperError> {
    let manager = manager(config)?;
    let applied = manager.apply_random()?;

    if applied == 0 {
        println!("{}", "No outputs were updated.".yellow());
    } else {
        println!("{}", format!("Updated {applied} output(s).").green());
    }

    Ok(())
}

/// Execute the set command: one wallpaper on one named output.
pub fn execute_set(
    config: &Config,
    output: &str,
    path: Option<&Path>,
) -> Result<(), SwaypaperError> {
    let manager = manager(config)?;
    let paths = manager.apply_to_output(output, path)?;

    println!(
        "{} {}",
        format!("Updated output \"{output}\":").green(),
        paths.desktop.display()
    );

    Ok(())
}

fn manager(config: &Config) -> Result<WallpaperManager, SwaypaperError> {
    let client = SwayClient::from_env()?;
    Ok(WallpaperManager::new(client, config)?)
}

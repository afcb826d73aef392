//! CLI module for swaypaper.

mod commands;

use clap::Parser;
pub use commands::Cli;

use crate::error::SwaypaperError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), SwaypaperError> {
    let cli = Cli::parse();
    cli.execute()
}

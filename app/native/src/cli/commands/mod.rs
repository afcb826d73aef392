//! CLI command definitions using Clap.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};

use crate::config::{self, Config};
use crate::error::SwaypaperError;
use crate::logging;

mod outputs;
mod wallpaper;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// swaypaper - per-output wallpapers for sway-compatible compositors.
#[derive(Parser, Debug)]
#[command(name = "swaypaper")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file (JSONC).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Assign a random wallpaper to every connected output.
    ///
    /// This is the default when no subcommand is given. Each output gets its
    /// own wallpaper, generated to match the output's dimensions, plus a
    /// blurred lock-screen variant.
    Apply,

    /// Assign a wallpaper to a single output.
    #[command(after_long_help = r#"Examples:
  swaypaper set DP-1 ~/wallpapers/forest.jpg   # Specific wallpaper
  swaypaper set DP-1                           # Random wallpaper"#)]
    Set {
        /// The output name, as reported by `swaypaper outputs`.
        output: String,

        /// Path to the wallpaper image. A random one is picked when omitted.
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },

    /// List connected outputs and their dimensions.
    Outputs {
        /// Output as JSON instead of a table.
        #[arg(long, short)]
        json: bool,
    },

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), SwaypaperError> {
        logging::init(self.verbose);

        match self.command.as_ref().unwrap_or(&Commands::Apply) {
            Commands::Apply => wallpaper::execute_apply(&self.load_config()?),
            Commands::Set { output, path } => {
                wallpaper::execute_set(&self.load_config()?, output, path.as_deref())
            }
            Commands::Outputs { json } => outputs::execute(*json),
            Commands::Completions { shell } => {
                generate(*shell, &mut Self::command(), "swaypaper", &mut io::stdout());
                Ok(())
            }
        }
    }

    /// Loads the configuration, honoring the global `--config` override.
    fn load_config(&self) -> Result<Config, SwaypaperError> {
        match &self.config {
            Some(path) => Ok(config::load_from_path(path)?),
            None => Ok(config::load_or_create()),
        }
    }
}

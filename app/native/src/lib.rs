//! swaypaper - per-output wallpaper generation for sway-compatible compositors.
//!
//! The crate is split along the two halves of the problem:
//! - [`ipc`] speaks the i3/sway binary IPC protocol over the compositor's
//!   Unix socket (output discovery, background commands).
//! - [`wallpaper`] turns one source image and one output rectangle into a
//!   fitted desktop image and a blurred, cover-cropped lock-screen image, and
//!   orchestrates one assignment per connected output.
//!
//! Everything else is glue: configuration, the processed-image store, and the
//! CLI surface.

// Core modules
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod ipc;
pub mod logging;
pub mod screen;
pub mod wallpaper;

mod platform;

#![allow(clippy::multiple_crate_versions)]

//! swaypaper - per-output wallpaper generator for sway-compatible compositors.
//!
//! The binary queries the compositor for connected outputs over its IPC
//! socket, renders a desktop and a lock-screen image for each one, and tells
//! the compositor to use the generated files as backgrounds.

// Emit a clear compile-time error if attempted to compile on unsupported platforms
#[cfg(not(unix))]
compile_error!("This application requires a Unix platform with local sockets.");

fn main() {
    if let Err(err) = swaypaper_lib::cli::run() {
        eprintln!("swaypaper: {err}");
        std::process::exit(1);
    }
}

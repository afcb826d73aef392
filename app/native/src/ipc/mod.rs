//! sway IPC protocol plumbing.
//!
//! # Architecture
//!
//! - [`codec`] frames and unframes the binary envelope
//!   (`"i3-ipc"` + LE u32 length + LE u32 kind + payload).
//! - [`transport`] owns a socket connection and performs one half-duplex
//!   request/response exchange at a time.
//! - [`SwayClient`] wraps both into the two operations this tool needs:
//!   querying outputs and running background commands.
//!
//! The socket address comes from `$SWAYSOCK`; it is never discovered by this
//! module.

pub mod codec;
pub mod transport;

mod client;

pub use client::{SwayClient, socket_path_from_env};
pub use transport::{Connection, IpcError};

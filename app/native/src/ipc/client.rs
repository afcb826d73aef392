//! High-level sway IPC client: output discovery and background commands.
//!
//! Each request runs on a fresh connection (connect, one exchange, close), so
//! a client value can be used from any thread that owns it without sharing
//! socket state.

use std::env;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::codec::MessageKind;
use super::transport::{Connection, IpcError};
use crate::screen::Screen;

/// Resolves the compositor socket path from the `SWAYSOCK` environment
/// variable.
///
/// # Errors
///
/// Returns [`IpcError::SocketUnset`] when the variable is absent.
pub fn socket_path_from_env() -> Result<PathBuf, IpcError> {
    env::var_os("SWAYSOCK")
        .map(PathBuf::from)
        .ok_or(IpcError::SocketUnset)
}

/// Client for a sway-compatible compositor.
#[derive(Debug, Clone)]
pub struct SwayClient {
    socket_path: PathBuf,
}

impl SwayClient {
    /// Creates a client talking to the given socket path.
    #[must_use]
    pub const fn new(socket_path: PathBuf) -> Self { Self { socket_path } }

    /// Creates a client from `$SWAYSOCK`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set.
    pub fn from_env() -> Result<Self, IpcError> { Ok(Self::new(socket_path_from_env()?)) }

    /// Opens a fresh connection, performs a single exchange, and closes it.
    fn request(&self, kind: MessageKind, payload: &[u8]) -> Result<Vec<u8>, IpcError> {
        let mut connection = Connection::connect(&self.socket_path)?;
        connection.roundtrip(kind, payload)
    }

    /// Queries the connected outputs.
    ///
    /// # Errors
    ///
    /// Connection and framing failures, or an undecodable JSON body, are
    /// fatal: no partial output list is ever returned.
    pub fn outputs(&self) -> Result<Vec<Screen>, IpcError> {
        let body = self.request(MessageKind::GetOutputs, b"")?;
        let screens: Vec<Screen> = serde_json::from_slice(&body)?;
        debug!(count = screens.len(), "queried compositor outputs");
        Ok(screens)
    }

    /// Runs a compositor command verbatim.
    ///
    /// The status payload of the reply is not interpreted; a completed
    /// exchange counts as success.
    ///
    /// # Errors
    ///
    /// Returns an error if the exchange fails.
    pub fn run_command(&self, command: &str) -> Result<(), IpcError> {
        debug!(command, "running compositor command");
        let body = self.request(MessageKind::RunCommand, command.as_bytes())?;
        trace!(response = %String::from_utf8_lossy(&body), "command response");
        Ok(())
    }

    /// Assigns `image_path` as the background of the named output, using the
    /// compositor's `fit` mode.
    ///
    /// Arguments are validated before anything touches the socket. The caller
    /// is responsible for the file being fully written to disk first; this
    /// method does not stat it.
    ///
    /// # Errors
    ///
    /// Returns [`IpcError::InvalidCommand`] for an empty output name or image
    /// path, or a transport error if the exchange fails.
    pub fn set_background(&self, output_name: &str, image_path: &Path) -> Result<(), IpcError> {
        if output_name.is_empty() {
            return Err(IpcError::InvalidCommand(
                "output name must not be empty".to_string(),
            ));
        }
        if image_path.as_os_str().is_empty() {
            return Err(IpcError::InvalidCommand(
                "background image path must not be empty".to_string(),
            ));
        }

        let command = format!("output \"{}\" bg \"{}\" fit", output_name, image_path.display());
        self.run_command(&command)
    }
}

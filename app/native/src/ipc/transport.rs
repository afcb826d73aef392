//! Blocking transport for the sway IPC socket.
//!
//! A [`Connection`] owns one `UnixStream` and performs strictly half-duplex
//! request/response exchanges: write the full envelope, then block until the
//! fixed-size response header and the advertised payload have both arrived.
//! Short reads are not tolerated; `read_exact` either fills the buffer or
//! fails the exchange.
//!
//! The stream is dropped (and the socket closed) on every exit path, success
//! or error. A connection is not safe to share across threads; concurrent
//! callers each open their own.

use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::Path;
use std::time::Duration;

use thiserror::Error;
use tracing::trace;

use super::codec::{self, HEADER_SIZE, MAGIC, MessageKind};

/// Reject response payloads larger than this to guard against bogus length
/// fields.
const MAX_PAYLOAD: usize = 64 * 1024 * 1024; // 64 MB

/// Socket read/write deadline so a wedged compositor cannot hang the run
/// forever.
const IO_TIMEOUT: Duration = Duration::from_secs(2);

/// Errors produced by the IPC layer.
#[derive(Debug, Error)]
pub enum IpcError {
    /// The compositor socket could not be reached. Fatal for the whole run.
    #[error("unable to connect to compositor socket {path}: {source}")]
    Connect {
        path: String,
        source: std::io::Error,
    },

    /// Socket IO failed mid-exchange (including short reads).
    #[error("compositor socket IO failed: {0}")]
    Io(#[from] std::io::Error),

    /// The response violated the wire framing.
    #[error("malformed compositor response: {0}")]
    Protocol(String),

    /// The response payload was not the expected JSON.
    #[error("invalid JSON in compositor response: {0}")]
    Json(#[from] serde_json::Error),

    /// `SWAYSOCK` is not set in the environment.
    #[error("SWAYSOCK is not set; is a sway-compatible compositor running?")]
    SocketUnset,

    /// A command was rejected before being sent.
    #[error("{0}")]
    InvalidCommand(String),
}

/// A scoped connection to the compositor socket.
///
/// At most one request is in flight per connection; `roundtrip` takes
/// `&mut self` to enforce the half-duplex discipline.
#[derive(Debug)]
pub struct Connection {
    stream: UnixStream,
}

impl Connection {
    /// Connects to the compositor socket at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`IpcError::Connect`] if the socket cannot be reached. No
    /// retry is attempted and nothing is read.
    pub fn connect(path: &Path) -> Result<Self, IpcError> {
        let stream = UnixStream::connect(path).map_err(|source| IpcError::Connect {
            path: path.display().to_string(),
            source,
        })?;

        let _ = stream.set_read_timeout(Some(IO_TIMEOUT));
        let _ = stream.set_write_timeout(Some(IO_TIMEOUT));

        Ok(Self { stream })
    }

    /// Sends one request and blocks until the full response payload arrives.
    ///
    /// # Errors
    ///
    /// Returns an error on socket IO failure, a short read, a response
    /// missing the magic prefix, or an implausible payload length. Any error
    /// aborts the exchange; the connection should be discarded afterwards.
    pub fn roundtrip(&mut self, kind: MessageKind, payload: &[u8]) -> Result<Vec<u8>, IpcError> {
        self.stream.write_all(&codec::encode(kind, payload))?;

        let mut header = [0u8; HEADER_SIZE];
        self.stream.read_exact(&mut header)?;

        if &header[..MAGIC.len()] != MAGIC {
            return Err(IpcError::Protocol(
                "response does not start with the i3-ipc magic".to_string(),
            ));
        }

        let (length, reply_kind) = codec::decode_header(&header);
        let length = length as usize;
        if length > MAX_PAYLOAD {
            return Err(IpcError::Protocol(format!(
                "response payload too large: {length} bytes"
            )));
        }

        trace!(kind = reply_kind, length, "ipc response header");

        let mut body = vec![0u8; length];
        if length > 0 {
            self.stream.read_exact(&mut body)?;
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read as _, Write as _};
    use std::os::unix::net::UnixListener;
    use std::path::PathBuf;
    use std::thread;

    use super::*;

    /// Spawns a single-exchange fake compositor. It validates the request
    /// framing and replies with `reply` encoded as `reply_kind`.
    fn spawn_fake_compositor(
        expected_kind: MessageKind,
        expected_payload: &'static [u8],
        reply_kind: MessageKind,
        reply: &'static [u8],
    ) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("sway-ipc.sock");
        let listener = UnixListener::bind(&socket_path).unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut header = [0u8; HEADER_SIZE];
            stream.read_exact(&mut header).unwrap();
            assert_eq!(&header[..MAGIC.len()], MAGIC);

            let (length, kind) = codec::decode_header(&header);
            assert_eq!(kind, expected_kind as u32);
            assert_eq!(length as usize, expected_payload.len());

            let mut payload = vec![0u8; length as usize];
            if length > 0 {
                stream.read_exact(&mut payload).unwrap();
            }
            assert_eq!(payload, expected_payload);

            stream.write_all(&codec::encode(reply_kind, reply)).unwrap();
        });

        (dir, socket_path)
    }

    #[test]
    fn test_roundtrip_exchanges_envelope() {
        let (_dir, socket_path) = spawn_fake_compositor(
            MessageKind::GetOutputs,
            b"",
            MessageKind::GetOutputs,
            br#"[{"name":"DP-1","rect":{"width":1920,"height":1080}}]"#,
        );

        let mut conn = Connection::connect(&socket_path).unwrap();
        let body = conn.roundtrip(MessageKind::GetOutputs, b"").unwrap();
        assert!(body.starts_with(b"[{\"name\":\"DP-1\""));
    }

    #[test]
    fn test_roundtrip_with_command_payload() {
        let (_dir, socket_path) = spawn_fake_compositor(
            MessageKind::RunCommand,
            b"output \"DP-1\" bg \"/tmp/w.png\" fit",
            MessageKind::RunCommand,
            br#"[{"success":true}]"#,
        );

        let mut conn = Connection::connect(&socket_path).unwrap();
        let body = conn
            .roundtrip(MessageKind::RunCommand, b"output \"DP-1\" bg \"/tmp/w.png\" fit")
            .unwrap();
        assert_eq!(body, br#"[{"success":true}]"#);
    }

    #[test]
    fn test_connect_failure_is_error_without_read() {
        let result = Connection::connect(Path::new("/nonexistent/sway-ipc.sock"));
        assert!(matches!(result, Err(IpcError::Connect { .. })));
    }

    #[test]
    fn test_truncated_response_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("sway-ipc.sock");
        let listener = UnixListener::bind(&socket_path).unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut header = [0u8; HEADER_SIZE];
            stream.read_exact(&mut header).unwrap();

            // Advertise 64 payload bytes but deliver none before closing.
            let mut reply = Vec::new();
            reply.extend_from_slice(MAGIC);
            reply.extend_from_slice(&64u32.to_le_bytes());
            reply.extend_from_slice(&(MessageKind::GetOutputs as u32).to_le_bytes());
            stream.write_all(&reply).unwrap();
        });

        let mut conn = Connection::connect(&socket_path).unwrap();
        let result = conn.roundtrip(MessageKind::GetOutputs, b"");
        assert!(matches!(result, Err(IpcError::Io(_))));
    }

    #[test]
    fn test_missing_magic_is_protocol_error() {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("sway-ipc.sock");
        let listener = UnixListener::bind(&socket_path).unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut header = [0u8; HEADER_SIZE];
            stream.read_exact(&mut header).unwrap();

            let mut reply = Vec::new();
            reply.extend_from_slice(b"not-it");
            reply.extend_from_slice(&0u32.to_le_bytes());
            reply.extend_from_slice(&0u32.to_le_bytes());
            stream.write_all(&reply).unwrap();
        });

        let mut conn = Connection::connect(&socket_path).unwrap();
        let result = conn.roundtrip(MessageKind::GetOutputs, b"");
        assert!(matches!(result, Err(IpcError::Protocol(_))));
    }

    #[test]
    fn test_oversized_payload_length_is_protocol_error() {
        let dir = tempfile::tempdir().unwrap();
        let socket_path = dir.path().join("sway-ipc.sock");
        let listener = UnixListener::bind(&socket_path).unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();

            let mut header = [0u8; HEADER_SIZE];
            stream.read_exact(&mut header).unwrap();

            let mut reply = Vec::new();
            reply.extend_from_slice(MAGIC);
            reply.extend_from_slice(&u32::MAX.to_le_bytes());
            reply.extend_from_slice(&0u32.to_le_bytes());
            stream.write_all(&reply).unwrap();
        });

        let mut conn = Connection::connect(&socket_path).unwrap();
        let result = conn.roundtrip(MessageKind::GetOutputs, b"");
        assert!(matches!(result, Err(IpcError::Protocol(_))));
    }
}

//! Binary envelope for the i3/sway IPC protocol.
//!
//! Every message on the wire is framed as:
//!
//! ```text
//! [ "i3-ipc" ][ payload length: u32 LE ][ message kind: u32 LE ][ payload... ]
//! ```
//!
//! The payload length is always recomputed from the payload being sent, never
//! taken from elsewhere. Decoding is lenient about the magic prefix, matching
//! the protocol's own behavior; [`super::transport::Connection`] validates it
//! before trusting the length field.

/// Magic byte sequence opening every message.
pub const MAGIC: &[u8; 6] = b"i3-ipc";

/// Fixed envelope header size: magic + length + kind.
pub const HEADER_SIZE: usize = MAGIC.len() + 8;

/// Responses with this bit set in the kind field are asynchronous events
/// rather than replies. This tool never subscribes, so it only ever sees
/// direct replies, but the tag space is part of the protocol.
pub const EVENT_BIT: u32 = 1 << 31;

/// Message kinds understood by sway-compatible compositors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum MessageKind {
    /// Run one or more compositor commands (payload: command text).
    RunCommand = 0,
    GetWorkspaces = 1,
    Subscribe = 2,
    /// Query connected outputs (payload empty, reply is a JSON array).
    GetOutputs = 3,
    GetTree = 4,
    GetMarks = 5,
    GetBarConfig = 6,
    GetVersion = 7,
    GetBindingModes = 8,
    GetConfig = 9,
    SendTick = 10,
    Sync = 11,
    GetBindingState = 12,

    // sway-specific kinds
    GetInputs = 100,
    GetSeats = 101,
}

/// Encodes a message envelope: magic, payload length, kind, payload.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // IPC payloads never approach u32::MAX
pub fn encode(kind: MessageKind, payload: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(HEADER_SIZE + payload.len());
    message.extend_from_slice(MAGIC);
    message.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    message.extend_from_slice(&(kind as u32).to_le_bytes());
    message.extend_from_slice(payload);
    message
}

/// Decodes `(payload_length, kind)` from an envelope header.
///
/// The magic prefix is not validated here; callers wanting strict framing
/// check it against [`MAGIC`] themselves.
#[must_use]
pub fn decode_header(header: &[u8; HEADER_SIZE]) -> (u32, u32) {
    let length = u32::from_le_bytes([header[6], header[7], header[8], header[9]]);
    let kind = u32::from_le_bytes([header[10], header[11], header[12], header[13]]);
    (length, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_size_matches_wire_format() {
        assert_eq!(HEADER_SIZE, 14);
    }

    #[test]
    fn test_encode_layout() {
        let message = encode(MessageKind::GetOutputs, b"hi");

        assert_eq!(&message[..6], MAGIC);
        assert_eq!(&message[6..10], &2u32.to_le_bytes());
        assert_eq!(&message[10..14], &3u32.to_le_bytes());
        assert_eq!(&message[14..], b"hi");
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let payload = b"output \"DP-1\" bg \"/tmp/w.png\" fit";
        let message = encode(MessageKind::RunCommand, payload);

        let header: [u8; HEADER_SIZE] = message[..HEADER_SIZE].try_into().unwrap();
        let (length, kind) = decode_header(&header);

        assert_eq!(length as usize, payload.len());
        assert_eq!(kind, MessageKind::RunCommand as u32);
    }

    #[test]
    fn test_encode_decode_empty_payload() {
        let message = encode(MessageKind::GetOutputs, b"");
        assert_eq!(message.len(), HEADER_SIZE);

        let header: [u8; HEADER_SIZE] = message[..HEADER_SIZE].try_into().unwrap();
        let (length, kind) = decode_header(&header);
        assert_eq!(length, 0);
        assert_eq!(kind, MessageKind::GetOutputs as u32);
    }

    #[test]
    fn test_decode_header_ignores_magic() {
        // Lenient decoding: a garbage prefix still yields the length and kind.
        let mut header = [0u8; HEADER_SIZE];
        header[..6].copy_from_slice(b"not-it");
        header[6..10].copy_from_slice(&42u32.to_le_bytes());
        header[10..14].copy_from_slice(&7u32.to_le_bytes());

        assert_eq!(decode_header(&header), (42, 7));
    }

    #[test]
    fn test_kind_tags_are_stable() {
        assert_eq!(MessageKind::RunCommand as u32, 0);
        assert_eq!(MessageKind::GetOutputs as u32, 3);
        assert_eq!(MessageKind::GetInputs as u32, 100);
    }

    #[test]
    fn test_event_bit_is_high_bit() {
        assert_eq!(EVENT_BIT, 0x8000_0000);
    }
}

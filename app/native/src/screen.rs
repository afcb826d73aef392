//! Output geometry types shared between the IPC client and the compositing
//! pipeline.

use serde::{Deserialize, Serialize};

/// Pixel bounds of an output or an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle from a width and height in pixels.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self { Self { width, height } }

    /// Returns whether both dimensions are non-zero.
    #[must_use]
    pub const fn is_positive(self) -> bool { self.width > 0 && self.height > 0 }
}

/// A connected compositor output, as reported by the GET_OUTPUTS query.
///
/// The list is a snapshot taken once per run; it goes stale if outputs are
/// plugged or unplugged afterwards and is not re-validated. Extra JSON fields
/// in the compositor response (position, scale, modes, ...) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screen {
    /// Output name, unique among currently connected outputs.
    pub name: String,
    /// The output's pixel bounds.
    pub rect: Rect,
}

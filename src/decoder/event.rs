//! Decoded mouse event types.
//!
//! Contains the value types handed to callers for each completed SGR
//! sequence: the event kind and the `{kind, button, x, y}` event itself.

use serde::{Deserialize, Serialize};

/// Kind of a decoded mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseEventKind {
    /// Button pressed (terminator `M`, code < 32)
    Press,
    /// Button released (terminator `m`)
    Release,
    /// Motion with a button held (terminator `M`, 32 <= code < 64)
    Drag,
    /// Wheel up (terminator `M`, code 64)
    ScrollUp,
    /// Wheel down (terminator `M`, code 65 and above)
    ScrollDown,
}

impl MouseEventKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "press" => Some(MouseEventKind::Press),
            "release" => Some(MouseEventKind::Release),
            "drag" => Some(MouseEventKind::Drag),
            "scroll_up" => Some(MouseEventKind::ScrollUp),
            "scroll_down" => Some(MouseEventKind::ScrollDown),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            MouseEventKind::Press => "press",
            MouseEventKind::Release => "release",
            MouseEventKind::Drag => "drag",
            MouseEventKind::ScrollUp => "scroll_up",
            MouseEventKind::ScrollDown => "scroll_down",
        }
    }
}

impl std::fmt::Display for MouseEventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A single decoded mouse event.
///
/// `button` is the logical button number after the motion flag has been
/// removed for drags; release and scroll events carry the wire code
/// unchanged. `x` and `y` are 1-based terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub button: u16,
    pub x: u16,
    pub y: u16,
}

impl MouseEvent {
    pub fn new(kind: MouseEventKind, button: u16, x: u16, y: u16) -> Self {
        Self { kind, button, x, y }
    }

    /// Convert the event to a single JSON line.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }
}

impl std::fmt::Display for MouseEvent {
    /// Format as the log line representation: `press:btn=0:x=10:y=5`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:btn={}:x={}:y={}",
            self.kind, self.button, self.x, self.y
        )
    }
}

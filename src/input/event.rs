use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Identity of a pointer: the mouse, or one finger on a touch surface.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerId {
    /// The primary mouse button.
    #[default]
    Mouse,
    /// A touch contact, by platform finger id.
    Touch(u64),
}

/// A pointer as seen by gesture handlers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pointer {
    /// Which pointer this is.
    pub id: PointerId,
    /// Current screen position in physical pixels.
    #[serde(default)]
    pub position: Vec2,
}

impl Pointer {
    /// Pointer `id` at screen `position`.
    #[must_use]
    pub const fn new(id: PointerId, position: Vec2) -> Self {
        Self { id, position }
    }
}

/// Gesture events delivered by a [`GestureSource`](super::GestureSource).
///
/// Serialized with a `kind` tag so recorded traces read naturally:
///
/// ```json
/// { "kind": "move", "pointer": { "id": "mouse" }, "delta": [30.0, 0.0],
///   "delta_time": 0.016 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer pressed.
    Down {
        /// The pointer that went down.
        pointer: Pointer,
    },
    /// Per-frame update for a held pointer.
    Move {
        /// The pointer being updated.
        pointer: Pointer,
        /// Screen-space movement since the previous frame.
        delta: Vec2,
        /// Seconds elapsed since the previous frame.
        delta_time: f32,
    },
    /// Pointer released.
    Up {
        /// The pointer that went up.
        pointer: Pointer,
    },
}

impl PointerEvent {
    /// The pointer this event concerns.
    #[must_use]
    pub fn pointer(&self) -> &Pointer {
        match self {
            Self::Down { pointer }
            | Self::Move { pointer, .. }
            | Self::Up { pointer } => pointer,
        }
    }
}

/// Platform-agnostic raw input events.
///
/// These are fed into a [`PointerTracker`](super::PointerTracker), which
/// turns absolute positions into per-frame [`PointerEvent`]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Touch contact changed.
    Touch {
        /// Platform finger id, stable for the life of the contact.
        id: u64,
        /// Contact phase.
        phase: TouchPhase,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Lifecycle of a single touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// Finger touched the surface.
    Started,
    /// Finger moved.
    Moved,
    /// Finger lifted.
    Ended,
    /// Platform took the contact away (e.g. a system gesture).
    Cancelled,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Started,
            winit::event::TouchPhase::Moved => Self::Moved,
            winit::event::TouchPhase::Ended => Self::Ended,
            winit::event::TouchPhase::Cancelled => Self::Cancelled,
        }
    }
}

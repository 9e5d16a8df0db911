//! Input handling: pointer event types, the gesture subscription seam, and
//! the tracker that converts raw window events into per-frame gestures.

/// Pointer gestures and platform-agnostic raw input events.
pub mod event;
/// Gesture handler and source traits plus the reference dispatcher.
pub mod source;
/// Recorded gesture traces (JSON).
pub mod trace;
/// Raw-event to per-frame gesture conversion.
pub mod tracker;

pub use event::{
    InputEvent, MouseButton, Pointer, PointerEvent, PointerId, TouchPhase,
};
pub use source::{
    GestureHandler, GestureSource, PointerDispatcher, SharedHandler,
    SubscriptionId,
};
pub use trace::{load_trace, parse_trace};
pub use tracker::PointerTracker;

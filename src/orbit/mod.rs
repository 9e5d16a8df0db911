//! Drag-to-orbit rotation.
//!
//! A single pointer drag is projected onto one screen axis and turned into
//! rotation of a target about a pivot, either clamped to an angle range or
//! left free with coarse ±360° wraparound of the bookkeeping angle.

/// Rotation axis and drag projection selection.
pub mod axis;
/// The event-driven controller.
pub mod controller;
/// Clamp and wraparound resolution of per-move increments.
pub mod limit;

pub use axis::{RotationAxis, TouchProjection};
pub use controller::{DragPhase, OrbitController};
pub use limit::{resolve_increment, AngleLimit, Resolution, FULL_TURN};

//! Shared utilities.

/// Per-frame delta time.
pub mod frame_timing;

pub use frame_timing::FrameTiming;

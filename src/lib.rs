// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Drag-to-orbit rotation for touch and mouse input.
//!
//! A single pointer drag rotates a target object around a fixed pivot about
//! one world axis, optionally clamped to an angle range.
//!
//! # Key entry points
//!
//! - [`orbit::OrbitController`] - turns pointer gestures into rotation
//! - [`orbit::resolve_increment`] - the clamp/wraparound rule on its own
//! - [`input::PointerDispatcher`] - delivers gestures to subscribed handlers
//! - [`input::PointerTracker`] - derives per-frame deltas from raw events
//! - [`options::Options`] - TOML presets and the settings JSON schema
//!
//! # Architecture
//!
//! The controller never looks up input or scene objects on its own: it is
//! handed a [`transform::PivotSource`] and a [`transform::TransformSink`] at
//! construction and subscribed to a [`input::GestureSource`]. Everything
//! runs synchronously on the thread that dispatches events.
//!
//! ```
//! use glam::{Vec2, Vec3};
//! use orbital::input::{Pointer, PointerDispatcher, PointerEvent};
//! use orbital::options::OrbitOptions;
//! use orbital::orbit::OrbitController;
//! use orbital::transform::Transform;
//!
//! let mut dispatcher = PointerDispatcher::new();
//! let options = OrbitOptions { speed: 1.0, ..OrbitOptions::default() };
//! let controller =
//!     OrbitController::new(options, Vec3::ZERO, Transform::default())?
//!         .attach(&mut dispatcher);
//!
//! let pointer = Pointer::default();
//! let events = [
//!     PointerEvent::Down { pointer },
//!     PointerEvent::Move { pointer, delta: Vec2::new(30.0, 0.0), delta_time: 1.0 },
//!     PointerEvent::Up { pointer },
//! ];
//! let _ = dispatcher.dispatch_all(&events);
//! assert_eq!(controller.borrow().current_angle(), 30.0);
//! # Ok::<(), orbital::error::OrbitalError>(())
//! ```

pub mod error;
pub mod input;
pub mod options;
pub mod orbit;
pub mod transform;
pub mod util;

use std::collections::BTreeMap;

use glam::Vec2;

use super::event::{
    InputEvent, MouseButton, Pointer, PointerEvent, PointerId, TouchPhase,
};

/// Per-pointer bookkeeping while pressed.
struct HeldPointer {
    position: Vec2,
    /// Movement accumulated since the last [`PointerTracker::end_frame`].
    pending: Vec2,
}

/// Turns raw absolute-position input into per-frame pointer gestures.
///
/// Press and release come back immediately from
/// [`handle_event`](Self::handle_event). Movement is accumulated and
/// reported once per frame by [`end_frame`](Self::end_frame), one
/// [`PointerEvent::Move`] per held pointer, zero deltas included.
/// Movement still pending when a pointer is released is discarded.
///
/// # Usage
///
/// ```ignore
/// for raw in platform_events {
///     if let Some(event) = tracker.handle_event(raw) {
///         dispatcher.dispatch(&event);
///     }
/// }
/// let dt = frame_timing.tick();
/// let _ = dispatcher.dispatch_all(&tracker.end_frame(dt));
/// ```
#[derive(Default)]
pub struct PointerTracker {
    /// Last known cursor position, tracked even while the mouse is up.
    cursor: Vec2,
    held: BTreeMap<PointerId, HeldPointer>,
}

impl PointerTracker {
    /// Create a tracker with nothing pressed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pointers currently held down.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.held.len()
    }

    /// Whether `id` is currently held down.
    #[must_use]
    pub fn is_pressed(&self, id: PointerId) -> bool {
        self.held.contains_key(&id)
    }

    /// Feed one raw event. Returns a down/up gesture when one starts or
    /// ends; movement is held back until [`end_frame`](Self::end_frame).
    pub fn handle_event(&mut self, event: InputEvent) -> Option<PointerEvent> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Vec2::new(x, y);
                self.move_to(PointerId::Mouse, self.cursor);
                None
            }
            InputEvent::MouseButton { button, pressed } => {
                // Only the primary button acts as a pointer
                if button != MouseButton::Left {
                    return None;
                }
                if pressed {
                    self.press(PointerId::Mouse, self.cursor)
                } else {
                    self.release(PointerId::Mouse)
                }
            }
            InputEvent::Touch { id, phase, x, y } => {
                let id = PointerId::Touch(id);
                let position = Vec2::new(x, y);
                match phase {
                    TouchPhase::Started => self.press(id, position),
                    TouchPhase::Moved => {
                        self.move_to(id, position);
                        None
                    }
                    TouchPhase::Ended | TouchPhase::Cancelled => {
                        self.release(id)
                    }
                }
            }
        }
    }

    /// Close the frame: one move event per held pointer carrying the
    /// movement accumulated since the previous call.
    pub fn end_frame(&mut self, delta_time: f32) -> Vec<PointerEvent> {
        self.held
            .iter_mut()
            .map(|(id, held)| {
                let delta = std::mem::take(&mut held.pending);
                PointerEvent::Move {
                    pointer: Pointer::new(*id, held.position),
                    delta,
                    delta_time,
                }
            })
            .collect()
    }

    fn press(&mut self, id: PointerId, position: Vec2) -> Option<PointerEvent> {
        if self.held.contains_key(&id) {
            log::trace!("ignoring repeated press for {id:?}");
            return None;
        }
        let _ = self.held.insert(
            id,
            HeldPointer {
                position,
                pending: Vec2::ZERO,
            },
        );
        Some(PointerEvent::Down {
            pointer: Pointer::new(id, position),
        })
    }

    fn release(&mut self, id: PointerId) -> Option<PointerEvent> {
        let held = self.held.remove(&id)?;
        Some(PointerEvent::Up {
            pointer: Pointer::new(id, held.position),
        })
    }

    fn move_to(&mut self, id: PointerId, position: Vec2) {
        if let Some(held) = self.held.get_mut(&id) {
            held.pending += position - held.position;
            held.position = position;
        }
    }
}

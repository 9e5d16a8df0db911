//! Gesture subscription.
//!
//! Handlers are handed to a [`GestureSource`] explicitly rather than hooked
//! into global event lists, so every controller knows exactly which source
//! feeds it and can unsubscribe from it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glam::Vec2;

use super::event::{Pointer, PointerEvent};

/// Receives pointer gestures.
pub trait GestureHandler {
    /// A pointer was pressed.
    fn on_pointer_down(&mut self, pointer: &Pointer);

    /// A pointer was released.
    fn on_pointer_up(&mut self, pointer: &Pointer);

    /// A held pointer moved by `screen_delta` over `delta_time` seconds.
    fn on_pointer_move(
        &mut self,
        pointer: &Pointer,
        screen_delta: Vec2,
        delta_time: f32,
    );

    /// Route a tagged event to the matching handler method.
    fn handle_event(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::Down { pointer } => self.on_pointer_down(pointer),
            PointerEvent::Up { pointer } => self.on_pointer_up(pointer),
            PointerEvent::Move {
                pointer,
                delta,
                delta_time,
            } => self.on_pointer_move(pointer, *delta, *delta_time),
        }
    }
}

/// Shared, single-threaded handle to a gesture handler.
pub type SharedHandler = Rc<RefCell<dyn GestureHandler>>;

/// Token returned by [`GestureSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Something that delivers pointer gestures to subscribed handlers.
pub trait GestureSource {
    /// Start delivering events to `handler`.
    ///
    /// Sources hold the handler weakly: dropping every strong handle ends
    /// the subscription.
    fn subscribe(&mut self, handler: &SharedHandler) -> SubscriptionId;

    /// Stop delivering events for `id`. Returns `false` if it was not
    /// subscribed.
    fn unsubscribe(&mut self, id: SubscriptionId) -> bool;
}

/// In-order event fan-out to weakly held handlers.
#[derive(Default)]
pub struct PointerDispatcher {
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Weak<RefCell<dyn GestureHandler>>)>,
}

impl PointerDispatcher {
    /// Create a dispatcher with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|(_, handler)| handler.strong_count() > 0)
            .count()
    }

    /// Whether no live handler is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver `event` to every live subscriber in subscription order.
    ///
    /// Returns how many handlers received it. Dropped handlers are pruned;
    /// a handler that is already mutably borrowed (re-entrant dispatch) is
    /// skipped for this event.
    pub fn dispatch(&mut self, event: &PointerEvent) -> usize {
        self.subscribers
            .retain(|(_, handler)| handler.strong_count() > 0);

        let mut delivered = 0;
        for (id, handler) in &self.subscribers {
            let Some(handler) = handler.upgrade() else {
                continue;
            };
            let Ok(mut handler) = handler.try_borrow_mut() else {
                log::warn!("skipping busy gesture handler {id:?}");
                continue;
            };
            handler.handle_event(event);
            delivered += 1;
        }
        delivered
    }

    /// Deliver a batch of events in order. Returns total deliveries.
    pub fn dispatch_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a PointerEvent>,
    ) -> usize {
        events.into_iter().map(|event| self.dispatch(event)).sum()
    }
}

impl GestureSource for PointerDispatcher {
    fn subscribe(&mut self, handler: &SharedHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Rc::downgrade(handler)));
        log::debug!("gesture handler subscribed as {id:?}");
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        let removed = self.subscribers.len() != before;
        if removed {
            log::debug!("gesture handler {id:?} unsubscribed");
        }
        removed
    }
}

//! Scroll notification channel
//!
//! An explicit observer registry: listeners subscribe to the controller's
//! named events and receive them synchronously, after the controller's
//! state has been fully updated. Listener handles are slotmap keys so
//! unsubscription is O(1) and stale handles are harmless.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle for a subscribed listener
    pub struct ListenerId;
}

/// Payload of the low-level `Render` notification
///
/// Carries the committed internal offset and a duration hint: `0` means
/// apply immediately, a positive value asks the renderer to animate the
/// transition over that many ms (ease-out).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderFrame {
    pub left: f32,
    pub top: f32,
    pub duration: f64,
}

/// Externally-visible scroll position (sign-inverted internal offset)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub left: f32,
    pub top: f32,
}

/// Notifications emitted by the scroll controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// The offset was committed; fires on every change
    Render(RenderFrame),
    /// A drag was confirmed as a scroll gesture
    ScrollStart,
    /// Continuous position updates while a drag is in progress
    Scroll(ScrollPosition),
    /// Motion settled (momentum rest or snap-back completion)
    ScrollEnd,
}

impl ScrollEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ScrollEvent::Render(_) => EventKind::Render,
            ScrollEvent::ScrollStart => EventKind::ScrollStart,
            ScrollEvent::Scroll(_) => EventKind::Scroll,
            ScrollEvent::ScrollEnd => EventKind::ScrollEnd,
        }
    }
}

/// Event name, used to filter subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Render,
    ScrollStart,
    Scroll,
    ScrollEnd,
}

/// Listener callback type
pub type EventCallback = Box<dyn FnMut(&ScrollEvent)>;

struct Listener {
    filter: Option<EventKind>,
    callback: EventCallback,
}

/// Observer registry for scroll notifications
#[derive(Default)]
pub struct Emitter {
    listeners: SlotMap<ListenerId, Listener>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a callback; `filter` of `None` receives every event
    pub fn subscribe<F>(&mut self, filter: Option<EventKind>, callback: F) -> ListenerId
    where
        F: FnMut(&ScrollEvent) + 'static,
    {
        self.listeners.insert(Listener {
            filter,
            callback: Box::new(callback),
        })
    }

    /// Remove a listener; returns false if the handle was already gone
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Deliver an event to every matching listener
    pub fn emit(&mut self, event: &ScrollEvent) {
        tracing::trace!(kind = ?event.kind(), "emit");
        for listener in self.listeners.values_mut() {
            if listener.filter.is_none() || listener.filter == Some(event.kind()) {
                (listener.callback)(event);
            }
        }
    }

    /// Drop every listener
    pub fn clear(&mut self) {
        self.listeners.clear();
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn filtered_listener_sees_only_its_kind() {
        let mut emitter = Emitter::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        emitter.subscribe(Some(EventKind::ScrollEnd), move |event| {
            sink.borrow_mut().push(event.kind());
        });

        emitter.emit(&ScrollEvent::ScrollStart);
        emitter.emit(&ScrollEvent::ScrollEnd);
        emitter.emit(&ScrollEvent::Scroll(ScrollPosition { left: 0.0, top: 1.0 }));

        assert_eq!(*seen.borrow(), vec![EventKind::ScrollEnd]);
    }

    #[test]
    fn unfiltered_listener_sees_everything() {
        let mut emitter = Emitter::new();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        emitter.subscribe(None, move |_| *sink.borrow_mut() += 1);

        emitter.emit(&ScrollEvent::ScrollStart);
        emitter.emit(&ScrollEvent::ScrollEnd);
        assert_eq!(*count.borrow(), 2);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let mut emitter = Emitter::new();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = emitter.subscribe(None, move |_| *sink.borrow_mut() += 1);

        emitter.emit(&ScrollEvent::ScrollStart);
        assert!(emitter.unsubscribe(id));
        assert!(!emitter.unsubscribe(id));
        emitter.emit(&ScrollEvent::ScrollStart);

        assert_eq!(*count.borrow(), 1);
    }
}

//! Event-source boundary between the engine and the host platform.
//!
//! A pointer-down starts a session which must keep receiving move/up events
//! even after the pointer leaves the pressed element, so hosts register these
//! listeners on a scope above the target (the document body in a browser).
//! The engine only asks to subscribe and unsubscribe; the host decides where.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Event kinds a session listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    Move,
    Up,
}

/// Handle for one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Platform capability to (un)register pointer listeners.
pub trait EventSource {
    /// Start delivering events of `kind` to the engine.
    fn subscribe(&mut self, kind: PointerEventKind) -> ListenerId;

    /// Stop delivering events for a listener returned by `subscribe`.
    fn unsubscribe(&mut self, id: ListenerId);
}

/// The move/up listener pair owned by one session.
///
/// Consumed by [`detach`](Self::detach), so each subscription is released
/// exactly once.
#[derive(Debug)]
#[must_use = "a subscription must be detached when the session ends"]
pub struct Subscription {
    move_listener: ListenerId,
    up_listener: ListenerId,
}

impl Subscription {
    /// Subscribe move and up listeners on `source`.
    pub fn attach<S: EventSource + ?Sized>(source: &mut S) -> Self {
        Self {
            move_listener: source.subscribe(PointerEventKind::Move),
            up_listener: source.subscribe(PointerEventKind::Up),
        }
    }

    /// Unsubscribe both listeners.
    pub fn detach<S: EventSource + ?Sized>(self, source: &mut S) {
        source.unsubscribe(self.move_listener);
        source.unsubscribe(self.up_listener);
    }
}

/// In-process listener bookkeeping.
///
/// Hosts that route events themselves can ask [`is_listening`](Self::is_listening)
/// before forwarding a move or up event; tests use it to check for leaks.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    listeners: HashMap<ListenerId, PointerEventKind>,
    next_id: u64,
    total_subscribed: u64,
}

impl ListenerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any listener for `kind` is registered.
    pub fn is_listening(&self, kind: PointerEventKind) -> bool {
        self.listeners.values().any(|&k| k == kind)
    }

    /// Number of listeners currently registered.
    pub fn active_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of subscriptions ever made.
    pub fn total_subscribed(&self) -> u64 {
        self.total_subscribed
    }
}

impl EventSource for ListenerRegistry {
    fn subscribe(&mut self, kind: PointerEventKind) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.total_subscribed += 1;
        self.listeners.insert(id, kind);
        log::trace!("Subscribed {:?} listener {}", kind, id.0);
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        if self.listeners.remove(&id).is_none() {
            log::warn!("Unsubscribe of unknown listener {}", id.0);
        }
    }
}

#![forbid(unsafe_code)]

//! Lifecycle notifications.
//!
//! A [`Notifier`] delivers typed events two ways: synchronously to
//! registered listeners, and into a bounded queue that the host drains once
//! per frame (the web bridge forwards drained events as DOM custom events).
//!
//! # Invariants
//!
//! 1. Listeners run in registration order.
//! 2. [`Notifier::drain_events`] returns events in emission order and clears
//!    the queue; nothing is replayed.
//! 3. The queue never holds more than [`MAX_PENDING`] events; the oldest are
//!    dropped first.
//!
//! # Failure Modes
//!
//! - Unsubscribing an unknown id is a no-op and returns `false`.

use std::collections::VecDeque;
use std::fmt;

/// Queue capacity before old events are discarded.
pub const MAX_PENDING: usize = 1024;

/// Handle returned by [`Notifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<E> = Box<dyn FnMut(&E)>;

/// Typed event fan-out with a drainable queue.
pub struct Notifier<E> {
    listeners: Vec<(ListenerId, Listener<E>)>,
    pending: VecDeque<E>,
    next_id: u64,
    dropped: u64,
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .field("pending", &self.pending.len())
            .field("dropped", &self.dropped)
            .finish()
    }
}

impl<E> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Notifier<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            pending: VecDeque::new(),
            next_id: 0,
            dropped: 0,
        }
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver `event` to every listener, then queue it.
    pub fn emit(&mut self, event: E) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
        if self.pending.len() == MAX_PENDING {
            self.pending.pop_front();
            self.dropped += 1;
        }
        self.pending.push_back(event);
    }

    /// Take all queued events.
    pub fn drain_events(&mut self) -> impl Iterator<Item = E> + '_ {
        self.pending.drain(..)
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Events discarded because the queue was full.
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn listeners_run_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut n = Notifier::new();
        let a = Rc::clone(&log);
        n.subscribe(move |e: &u32| a.borrow_mut().push(("a", *e)));
        let b = Rc::clone(&log);
        n.subscribe(move |e: &u32| b.borrow_mut().push(("b", *e)));
        n.emit(7);
        assert_eq!(*log.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let hits = Rc::new(RefCell::new(0));
        let mut n = Notifier::new();
        let h = Rc::clone(&hits);
        let id = n.subscribe(move |_: &()| *h.borrow_mut() += 1);
        n.emit(());
        assert!(n.unsubscribe(id));
        assert!(!n.unsubscribe(id));
        n.emit(());
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn drain_clears_queue() {
        let mut n = Notifier::new();
        n.emit("open");
        n.emit("close");
        let drained: Vec<_> = n.drain_events().collect();
        assert_eq!(drained, vec!["open", "close"]);
        assert_eq!(n.pending(), 0);
    }

    #[test]
    fn queue_is_bounded() {
        let mut n = Notifier::new();
        for i in 0..(MAX_PENDING + 5) {
            n.emit(i);
        }
        assert_eq!(n.pending(), MAX_PENDING);
        assert_eq!(n.dropped(), 5);
        assert_eq!(n.drain_events().next(), Some(5));
    }
}

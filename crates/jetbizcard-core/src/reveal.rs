//! Reveal state - the card's only mutable value - and its observable store.
//!
//! [`RevealStore`] is a single-threaded container. Mutation goes through
//! [`RevealStore::toggle`], which notifies every subscriber exactly once
//! with the new state after the write has completed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Collapsed/expanded view of the reveal flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    Collapsed,
    Expanded,
}

/// Whether the portfolio is visible, plus how many times it was toggled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealState {
    pub visible: bool,
    pub activations: u64,
}

impl RevealState {
    pub fn phase(&self) -> CardPhase {
        if self.visible {
            CardPhase::Expanded
        } else {
            CardPhase::Collapsed
        }
    }

    /// The state after one more button activation.
    pub fn toggled(self) -> Self {
        Self {
            visible: !self.visible,
            activations: self.activations + 1,
        }
    }
}

/// Handle returned by [`RevealStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Subscriber = Rc<dyn Fn(RevealState)>;

struct StoreInner {
    state: Cell<RevealState>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(Subscription, Subscriber)>>,
}

/// Shared handle to the reveal state. Clones observe the same state.
#[derive(Clone)]
pub struct RevealStore {
    inner: Rc<StoreInner>,
}

impl Default for RevealStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RevealStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealStore")
            .field("state", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl RevealStore {
    /// A collapsed store with no subscribers.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: Cell::new(RevealState::default()),
                next_id: Cell::new(0),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn get(&self) -> RevealState {
        self.inner.state.get()
    }

    pub fn subscribe(&self, f: impl Fn(RevealState) + 'static) -> Subscription {
        let id = Subscription(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner.subscribers.borrow_mut().push((id, Rc::new(f)));
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut subscribers = self.inner.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(id, _)| *id != subscription);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    /// Flip visibility and notify subscribers. Returns the new state.
    pub fn toggle(&self) -> RevealState {
        let next = self.get().toggled();
        self.inner.state.set(next);
        tracing::debug!(visible = next.visible, activations = next.activations, "Reveal toggled");

        // Snapshot so subscribers may subscribe/unsubscribe while being notified
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, f)| Rc::clone(f))
            .collect();
        for notify in subscribers {
            notify(next);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let store = RevealStore::new();
        assert_eq!(store.get(), RevealState { visible: false, activations: 0 });
        assert_eq!(store.get().phase(), CardPhase::Collapsed);
    }

    #[test]
    fn toggle_alternates() {
        let store = RevealStore::new();
        assert_eq!(store.toggle().phase(), CardPhase::Expanded);
        assert_eq!(store.toggle().phase(), CardPhase::Collapsed);
        assert_eq!(store.toggle().phase(), CardPhase::Expanded);
        assert_eq!(store.get().activations, 3);
    }

    #[test]
    fn clones_share_state() {
        let store = RevealStore::new();
        let other = store.clone();
        store.toggle();
        assert!(other.get().visible);
    }

    #[test]
    fn each_toggle_notifies_once() {
        let store = RevealStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.visible));

        store.toggle();
        store.toggle();
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn subscriber_sees_committed_state() {
        let store = RevealStore::new();
        let reader = store.clone();
        let matched = Rc::new(Cell::new(false));
        let flag = Rc::clone(&matched);
        store.subscribe(move |state| flag.set(reader.get() == state));

        store.toggle();
        assert!(matched.get());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = RevealStore::new();
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let sub = store.subscribe(move |_| counter.set(counter.get() + 1));

        store.toggle();
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.toggle();
        assert_eq!(count.get(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn subscriber_may_unsubscribe_itself() {
        let store = RevealStore::new();
        let handle = store.clone();
        let slot: Rc<Cell<Option<Subscription>>> = Rc::new(Cell::new(None));
        let own = Rc::clone(&slot);
        let sub = store.subscribe(move |_| {
            if let Some(sub) = own.get() {
                handle.unsubscribe(sub);
            }
        });
        slot.set(Some(sub));

        store.toggle();
        assert_eq!(store.subscriber_count(), 0);
    }
}

//! Observer registry.

use std::collections::BTreeMap;
use std::fmt;

use crate::domain::state::GameSnapshot;

/// Callback invoked with a snapshot after every state change.
pub type Listener = Box<dyn FnMut(&GameSnapshot) + Send>;

/// Handle returned by `subscribe`; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Subscription(u64);

impl Subscription {
    /// Numeric handle, unique within one registry.
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Listeners keyed by handle, notified in registration order.
#[derive(Default)]
pub struct SubscriberRegistry {
    listeners: BTreeMap<Subscription, Listener>,
    next_id: u64,
}

impl SubscriberRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` and returns its handle.
    pub fn subscribe(&mut self, listener: Listener) -> Subscription {
        let handle = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.insert(handle, listener);
        handle
    }

    /// Removes a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, handle: Subscription) -> bool {
        self.listeners.remove(&handle).is_some()
    }

    /// Calls every listener once with `snapshot`.
    pub fn notify(&mut self, snapshot: &GameSnapshot) {
        for listener in self.listeners.values_mut() {
            listener(snapshot);
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether no listener is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("listeners", &self.listeners.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

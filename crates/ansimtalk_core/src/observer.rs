//! Synchronous observer registry used to drive UI re-render.
//!
//! # Invariants
//! - Observers run inside the mutating call, before it returns.
//! - Notification order follows subscription order.
//! - Subscription IDs are never reused within one registry.

/// Handle returned by `subscribe`, used to unsubscribe later.
pub type SubscriptionId = u64;

type Observer<E> = Box<dyn FnMut(&E) + Send>;

/// Ordered list of event callbacks.
pub struct ObserverRegistry<E> {
    next_id: SubscriptionId,
    observers: Vec<(SubscriptionId, Observer<E>)>,
}

impl<E> Default for ObserverRegistry<E> {
    fn default() -> Self {
        Self {
            next_id: 1,
            observers: Vec::new(),
        }
    }
}

impl<E> ObserverRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback and returns its handle.
    pub fn subscribe(&mut self, observer: impl FnMut(&E) + Send + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a callback. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn notify(&mut self, event: &E) {
        for (_, observer) in self.observers.iter_mut() {
            observer(event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<E> std::fmt::Debug for ObserverRegistry<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ObserverRegistry;
    use std::sync::{Arc, Mutex};

    #[test]
    fn notifies_in_subscription_order_until_unsubscribed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ObserverRegistry::<u32>::new();

        let first_seen = Arc::clone(&seen);
        let first = registry.subscribe(move |value| first_seen.lock().unwrap().push(("a", *value)));
        let second_seen = Arc::clone(&seen);
        registry.subscribe(move |value| second_seen.lock().unwrap().push(("b", *value)));

        registry.notify(&1);
        assert!(registry.unsubscribe(first));
        assert!(!registry.unsubscribe(first));
        registry.notify(&2);

        assert_eq!(*seen.lock().unwrap(), vec![("a", 1), ("b", 1), ("b", 2)]);
    }

    #[test]
    fn subscription_ids_are_not_reused() {
        let mut registry = ObserverRegistry::<()>::new();
        let first = registry.subscribe(|_| {});
        registry.unsubscribe(first);
        let second = registry.subscribe(|_| {});
        assert_ne!(first, second);
        assert_eq!(registry.len(), 1);
    }
}

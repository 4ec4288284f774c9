//! Change notifications for store collections.
//!
//! The UI layer registers callbacks per collection and re-renders when a
//! commit touches that collection. Subscriptions are explicit handles;
//! dropping one without calling `unsubscribe` keeps it active.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Categories,
    Transactions,
    Clients,
    Contracts,
}

type Callback = Arc<dyn Fn() + Send + Sync + 'static>;

#[derive(Default)]
struct HubState {
    next_id: u64,
    subscribers: HashMap<Collection, Vec<(u64, Callback)>>,
}

/// Fan-out hub: `subscribe` returns a handle, `publish` invokes every
/// callback registered for the collection.
#[derive(Clone, Default)]
pub struct ChangeHub {
    inner: Arc<Mutex<HubState>>,
}

/// Handle identifying one registration with its hub.
pub struct Subscription {
    hub: Arc<Mutex<HubState>>,
    collection: Collection,
    id: u64,
}

impl Subscription {
    pub fn unsubscribe(self) {
        let mut state = self.hub.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(list) = state.subscribers.get_mut(&self.collection) {
            list.retain(|(id, _)| *id != self.id);
        }
    }
}

impl ChangeHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        collection: Collection,
        on_change: impl Fn() + Send + Sync + 'static,
    ) -> Subscription {
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        state.next_id += 1;
        let id = state.next_id;
        state
            .subscribers
            .entry(collection)
            .or_default()
            .push((id, Arc::new(on_change)));
        Subscription {
            hub: Arc::clone(&self.inner),
            collection,
            id,
        }
    }

    /// Notifies every subscriber of `collection`. Callbacks run outside
    /// the hub lock, so they may subscribe or publish themselves.
    pub fn publish(&self, collection: Collection) {
        let callbacks: Vec<Callback> = {
            let state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            state
                .subscribers
                .get(&collection)
                .map(|list| list.iter().map(|(_, cb)| Arc::clone(cb)).collect())
                .unwrap_or_default()
        };
        for callback in callbacks {
            callback();
        }
    }

    pub fn subscriber_count(&self, collection: Collection) -> usize {
        let state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        state
            .subscribers
            .get(&collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn publish_reaches_matching_subscribers_only() {
        let hub = ChangeHub::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counted = Arc::clone(&hits);
        let _keep = hub.subscribe(Collection::Categories, move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        let _other = hub.subscribe(Collection::Clients, || {});

        hub.publish(Collection::Categories);
        hub.publish(Collection::Transactions);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let hub = ChangeHub::new();
        let hits = Arc::new(AtomicUsize::new(0));

        let counted = Arc::clone(&hits);
        let handle = hub.subscribe(Collection::Transactions, move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        hub.publish(Collection::Transactions);
        handle.unsubscribe();
        hub.publish(Collection::Transactions);

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(hub.subscriber_count(Collection::Transactions), 0);
    }
}

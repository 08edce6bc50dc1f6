//! Observable state container.
//!
//! A `Store` owns one state value. Every change replaces it whole and then
//! hands the new value to each listener, in subscription order. Reducers
//! take the old state by value and return the next one, so a listener never
//! sees a half-applied update.

use serde::Serialize;

use crate::Error;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

pub struct Store<S> {
    state: S,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_id: u64,
}

impl<S: Clone> Store<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> &S {
        &self.state
    }

    pub fn snapshot(&self) -> S {
        self.state.clone()
    }

    /// Registers a listener. It is called at once with the current state and
    /// again after every replacement.
    pub fn subscribe(&mut self, mut listener: impl FnMut(&S) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        listener(&self.state);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn set(&mut self, state: S) {
        self.state = state;
        self.notify();
    }

    /// Replaces the state with `f` applied to a copy of the current one.
    pub fn update(&mut self, f: impl FnOnce(S) -> S) {
        let next = f(self.state.clone());
        self.set(next);
    }

    fn notify(&mut self) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}

impl<S: Clone + Serialize> Store<S> {
    /// Current snapshot as JSON, the shape the browser UI reads.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json_wasm::to_string(&self.state).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl<S: Clone + Default> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    struct Counter {
        value: i64,
    }

    fn recorder() -> (Rc<RefCell<Vec<i64>>>, impl FnMut(&Counter) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |state: &Counter| sink.borrow_mut().push(state.value))
    }

    #[test]
    fn test_subscribe_receives_current_state() {
        let mut store = Store::new(Counter { value: 7 });
        let (seen, listener) = recorder();
        store.subscribe(listener);
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn test_set_and_update_notify_once_each() {
        let mut store = Store::new(Counter::default());
        let (seen, listener) = recorder();
        store.subscribe(listener);

        store.set(Counter { value: 3 });
        store.update(|mut c| {
            c.value += 2;
            c
        });

        assert_eq!(*seen.borrow(), vec![0, 3, 5]);
        assert_eq!(store.get().value, 5);
    }

    #[test]
    fn test_update_does_not_alias_snapshots() {
        let mut store = Store::new(Counter { value: 1 });
        let before = store.snapshot();
        store.update(|mut c| {
            c.value = 10;
            c
        });
        assert_eq!(before.value, 1);
        assert_eq!(store.get().value, 10);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let mut store = Store::new(Counter::default());
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = order.clone();
            store.subscribe(move |_| order.borrow_mut().push(tag));
        }
        order.borrow_mut().clear();

        store.set(Counter { value: 1 });
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let mut store = Store::new(Counter::default());
        let (seen, listener) = recorder();
        let id = store.subscribe(listener);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        assert_eq!(store.listener_count(), 0);

        store.set(Counter { value: 9 });
        assert_eq!(*seen.borrow(), vec![0]);
    }

    #[test]
    fn test_to_json() {
        let store = Store::new(Counter { value: 42 });
        assert_eq!(store.to_json().unwrap(), r#"{"value":42}"#);
    }
}

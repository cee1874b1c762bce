//! Observable Fields
//!
//! A value paired with a registry of listeners. Listeners are pushed the new
//! value every time it changes, so a consumer bound to a field always sees the
//! latest value once the setter returns.

use std::fmt;

use slotmap::{SlotMap, new_key_type};
use tracing::trace;

new_key_type! {
    /// Handle returned by [`Observable::subscribe`], used to unsubscribe.
    pub struct ObserverKey;
}

type Listener<T> = Box<dyn FnMut(&T)>;

/// A value that notifies registered listeners when it changes.
///
/// Values are only written by the owning model; consumers can read and
/// (un)subscribe.
pub struct Observable<T> {
    value: T,
    listeners: SlotMap<ObserverKey, Listener<T>>,
}

impl<T: PartialEq> Observable<T> {
    /// Create a new observable holding `value`, with no listeners.
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: SlotMap::with_key(),
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Registers a listener, called with each new value.
    ///
    /// The listener is not called with the current value; read it with
    /// [`Observable::get`].
    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> ObserverKey {
        self.listeners.insert(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, key: ObserverKey) -> bool {
        self.listeners.remove(key).is_some()
    }

    /// Number of registered listeners.
    pub fn observer_count(&self) -> usize {
        self.listeners.len()
    }

    /// Stores `value`, notifying listeners if it differs from the current one.
    ///
    /// Returns whether the value changed.
    pub(crate) fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }

        self.value = value;

        trace!(observers = self.listeners.len(), "notifying observers");

        for listener in self.listeners.values_mut() {
            listener(&self.value);
        }

        true
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("observers", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(&T) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        (seen, move |value: &T| sink.borrow_mut().push(value.clone()))
    }

    #[test]
    fn new_holds_value_without_observers() {
        let observable = Observable::new(5_u32);

        assert_eq!(*observable.get(), 5);
        assert_eq!(observable.observer_count(), 0);
    }

    #[test]
    fn set_notifies_every_listener() {
        let mut observable = Observable::new(String::new());
        let (first, first_listener) = recorder();
        let (second, second_listener) = recorder();

        observable.subscribe(first_listener);
        observable.subscribe(second_listener);

        assert!(observable.set("Vanilla".to_string()));

        assert_eq!(observable.get(), "Vanilla");
        assert_eq!(*first.borrow(), ["Vanilla".to_string()]);
        assert_eq!(*second.borrow(), ["Vanilla".to_string()]);
    }

    #[test]
    fn unchanged_value_is_not_notified() {
        let mut observable = Observable::new(1_u32);
        let (seen, listener) = recorder();
        observable.subscribe(listener);

        assert!(!observable.set(1));
        assert!(observable.set(2));
        assert!(!observable.set(2));

        assert_eq!(*seen.borrow(), [2]);
    }

    #[test]
    fn subscribe_does_not_replay_current_value() {
        let mut observable = Observable::new(7_u32);
        let (seen, listener) = recorder();

        observable.subscribe(listener);

        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut observable = Observable::new(0_u32);
        let (seen, listener) = recorder();
        let key = observable.subscribe(listener);

        observable.set(1);
        assert!(observable.unsubscribe(key));
        observable.set(2);

        assert_eq!(*seen.borrow(), [1]);
        assert_eq!(observable.observer_count(), 0);
        assert!(!observable.unsubscribe(key));
    }

    #[test]
    fn debug_shows_value_and_observer_count() {
        let mut observable = Observable::new(3_u32);
        observable.subscribe(|_| {});

        assert_eq!(
            format!("{observable:?}"),
            "Observable { value: 3, observers: 1 }"
        );
    }
}

//! Single-threaded observable state cell.
//!
//! DESIGN
//! ======
//! `Store` holds one snapshot and a subscriber list behind `Rc<RefCell>`,
//! matching the crate's single-threaded, event-driven execution model.
//! Mutations replace the snapshot wholesale and then notify subscribers in
//! registration order; callbacks are cloned out of the cell before they run,
//! so a subscriber may read or mutate the store without a borrow panic.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Observable container for a single state snapshot.
///
/// Cloning a `Store` yields a second handle to the same shared cell.
pub struct Store<T> {
    inner: Rc<StoreInner<T>>,
}

struct StoreInner<T> {
    current: RefCell<T>,
    observers: RefCell<Vec<Observer<T>>>,
    next_observer_id: Cell<u64>,
}

struct Observer<T> {
    id: u64,
    callback: Rc<dyn Fn(&T)>,
}

impl<T: Clone> Store<T> {
    /// Create a store holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                current: RefCell::new(initial),
                observers: RefCell::new(Vec::new()),
                next_observer_id: Cell::new(0),
            }),
        }
    }

    /// Clone of the current snapshot.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.current.borrow().clone()
    }

    /// Replace the snapshot and notify subscribers.
    pub fn set(&self, next: T) {
        *self.inner.current.borrow_mut() = next.clone();
        self.notify(&next);
    }

    /// Derive the next snapshot from the current one and install it.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.inner.current.borrow());
        self.set(next);
    }

    /// Register `callback` for every subsequent snapshot transition.
    ///
    /// The callback is invoked immediately with the current snapshot, then
    /// once per mutation, in emission order. Dropping the returned
    /// [`Subscription`] without calling `unsubscribe` keeps the callback
    /// registered for the lifetime of the store.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription<T> {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        let callback: Rc<dyn Fn(&T)> = Rc::new(callback);
        let current = self.get();
        callback(&current);
        self.inner.observers.borrow_mut().push(Observer { id, callback });
        Subscription { store: Rc::downgrade(&self.inner), id }
    }

    fn notify(&self, snapshot: &T) {
        // Snapshot the callback list first so a subscriber that re-enters
        // the store (get/set/subscribe) does not hit an active borrow.
        let callbacks: Vec<Rc<dyn Fn(&T)>> = self
            .inner
            .observers
            .borrow()
            .iter()
            .map(|observer| Rc::clone(&observer.callback))
            .collect();
        for callback in callbacks {
            callback(snapshot);
        }
    }
}

impl<T: Clone + Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("current", &self.inner.current.borrow()).finish()
    }
}

/// Handle for a registered observer.
pub struct Subscription<T> {
    store: Weak<StoreInner<T>>,
    id: u64,
}

impl<T> Subscription<T> {
    /// Remove the observer; later transitions are no longer delivered.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.store.upgrade() {
            inner.observers.borrow_mut().retain(|observer| observer.id != self.id);
        }
    }
}

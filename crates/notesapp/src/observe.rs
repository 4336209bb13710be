//! # Observable Values
//!
//! A presentation layer re-renders when the published result set changes.
//! [`Observable`] is that contract in its smallest form:
//!
//! - `set` replaces the value, bumps the version, then notifies subscribers
//!   in registration order.
//! - [`Subscription`] is an RAII guard. Dropping it unregisters the callback.
//!
//! ## Ownership
//!
//! The value lives in an `Rc<RefCell<..>>`; everything runs on one thread.
//! Callbacks are owned by their `Subscription` and the observable only keeps
//! `Weak` handles, pruned lazily on the next `set`.
//!
//! Callbacks receive a snapshot taken after the value was replaced, and no
//! borrow is held while they run, so a callback may read or even `set` the
//! same observable.

use std::any::Any;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<Weak<Callback<T>>>,
}

pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Number of `set` calls so far.
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    pub fn set(&self, value: T) {
        let (snapshot, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value;
            inner.version += 1;
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            let callbacks: Vec<Rc<Callback<T>>> =
                inner.subscribers.iter().filter_map(Weak::upgrade).collect();
            (inner.value.clone(), callbacks)
        };

        for callback in callbacks {
            callback(&snapshot);
        }
    }

    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let callback: Rc<Callback<T>> = Rc::new(callback);
        self.inner
            .borrow_mut()
            .subscribers
            .push(Rc::downgrade(&callback));
        Subscription {
            _callback: Box::new(callback),
        }
    }

    /// Live subscribers. Dropped ones still count until the next `set`.
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// Keeps a callback registered for as long as it is alive.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    _callback: Box<dyn Any>,
}

impl Subscription {
    pub fn unsubscribe(self) {}
}

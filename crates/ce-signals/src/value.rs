//! Single-value holder with synchronous change notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::subscribers::SubscriberList;
use crate::{Observable, Observer, Subscription};

struct ValueInner<T> {
    value: RefCell<T>,
    subscribers: Rc<SubscriberList<T>>,
}

/// Holds exactly one current value and pushes every change to subscribers.
///
/// Cloning a `ValueStream` clones the handle, not the value: all clones read
/// and write the same slot. New subscribers receive the current value
/// immediately, then every subsequent [`ValueStream::set`].
pub struct ValueStream<T> {
    inner: Rc<ValueInner<T>>,
}

impl<T: Clone + 'static> ValueStream<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(ValueInner {
                value: RefCell::new(initial),
                subscribers: SubscriberList::new(),
            }),
        }
    }

    /// Latest value.
    pub fn current(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Replace the held value and notify every subscriber with it, in
    /// subscription order, before returning.
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value.clone();
        self.inner.subscribers.notify(&value);
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.len()
    }

    /// Type-erased handle for use with combinators.
    pub fn source(&self) -> Rc<dyn Observable<T>> {
        Rc::new(self.clone())
    }
}

impl<T: Clone + 'static> Observable<T> for ValueStream<T> {
    fn observe(&self, observer: Observer<T>) -> Subscription {
        let subscription = self.inner.subscribers.add(Rc::clone(&observer));
        observer(&self.current());
        subscription
    }
}

impl<T> Clone for ValueStream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for ValueStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueStream")
            .field("value", &*self.inner.value.borrow())
            .field("subscribers", &self.inner.subscribers.len())
            .finish()
    }
}

//! Value-less publisher.

use std::fmt;
use std::rc::Rc;

use crate::subscribers::SubscriberList;
use crate::{Observable, Observer, Subscription};

/// Publishes values to subscribers without retaining them.
///
/// Same delivery contract as [`crate::ValueStream`] except that subscribing
/// does not replay anything: an observer only sees values emitted after it
/// registered.
pub struct EventStream<T> {
    subscribers: Rc<SubscriberList<T>>,
}

impl<T: 'static> EventStream<T> {
    pub fn new() -> Self {
        Self {
            subscribers: SubscriberList::new(),
        }
    }

    pub fn emit(&self, value: T) {
        self.subscribers.notify(&value);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn source(&self) -> Rc<dyn Observable<T>> {
        Rc::new(self.clone())
    }
}

impl<T: 'static> Default for EventStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Observable<T> for EventStream<T> {
    fn observe(&self, observer: Observer<T>) -> Subscription {
        self.subscribers.add(observer)
    }
}

impl<T> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T> fmt::Debug for EventStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream").finish_non_exhaustive()
    }
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::{Observer, Subscription};

struct Entry<T> {
    id: u64,
    observer: Observer<T>,
}

/// Ordered observer registry shared by the stream types.
pub(crate) struct SubscriberList<T> {
    entries: RefCell<Vec<Entry<T>>>,
    next_id: Cell<u64>,
}

impl<T: 'static> SubscriberList<T> {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            entries: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    pub(crate) fn add(self: &Rc<Self>, observer: Observer<T>) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.entries.borrow_mut().push(Entry { id, observer });

        let list = Rc::downgrade(self);
        Subscription::new(move || {
            if let Some(list) = list.upgrade() {
                list.remove(id);
            }
        })
    }

    fn remove(&self, id: u64) {
        self.entries.borrow_mut().retain(|entry| entry.id != id);
    }

    fn contains(&self, id: u64) -> bool {
        self.entries.borrow().iter().any(|entry| entry.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Deliver `value` to every observer registered when the call started.
    ///
    /// The registry is not borrowed while observers run, so they may
    /// subscribe, unsubscribe or emit again. Observers added during delivery
    /// miss the in-flight value; observers removed during delivery are skipped.
    pub(crate) fn notify(&self, value: &T) {
        let snapshot: Vec<(u64, Observer<T>)> = self
            .entries
            .borrow()
            .iter()
            .map(|entry| (entry.id, Rc::clone(&entry.observer)))
            .collect();

        for (id, observer) in snapshot {
            if self.contains(id) {
                observer(value);
            }
        }
    }
}

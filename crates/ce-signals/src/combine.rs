//! Latest-value combinator over N sources.
//!
//! `combine_latest([a, b, c])` is cold: nothing happens until something
//! subscribes to it. Each subscriber gets its own slot array and ready count,
//! and its own subscription to every source. Once all N slots have been
//! filled, every source emission produces the full tuple in source order,
//! using the cached latest value for the sources that did not change.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::{Observable, Observer, Subscription};

/// Per-subscriber cache of the latest value of each source.
struct Slots<T, const N: usize> {
    values: [Option<T>; N],
    ready: usize,
}

impl<T: Clone, const N: usize> Slots<T, N> {
    fn new() -> Self {
        Self {
            values: std::array::from_fn(|_| None),
            ready: 0,
        }
    }

    /// Store `value` for source `index` and return the full tuple if every
    /// slot is primed.
    fn fill(&mut self, index: usize, value: T) -> Option<[T; N]> {
        if self.values[index].replace(value).is_none() {
            self.ready += 1;
        }
        if self.ready < N {
            return None;
        }
        let mut tuple = Vec::with_capacity(N);
        for value in &self.values {
            tuple.push(value.clone()?);
        }
        tuple.try_into().ok()
    }
}

/// Derived stream emitting `[T; N]` whenever any source emits, after all
/// sources have emitted at least once.
pub struct CombineLatest<T, const N: usize> {
    sources: [Rc<dyn Observable<T>>; N],
}

/// Combine N sources, in order, into one tuple stream.
pub fn combine_latest<T, const N: usize>(sources: [Rc<dyn Observable<T>>; N]) -> CombineLatest<T, N>
where
    T: Clone + 'static,
{
    CombineLatest { sources }
}

impl<T: Clone + 'static, const N: usize> Observable<[T; N]> for CombineLatest<T, N> {
    fn observe(&self, observer: Observer<[T; N]>) -> Subscription {
        let slots = Rc::new(RefCell::new(Slots::<T, N>::new()));

        let parts = self
            .sources
            .iter()
            .enumerate()
            .map(|(index, source)| {
                let slots = Rc::clone(&slots);
                let observer = Rc::clone(&observer);
                source.observe(Rc::new(move |value: &T| {
                    let tuple = slots.borrow_mut().fill(index, value.clone());
                    if let Some(tuple) = tuple {
                        observer(&tuple);
                    }
                }))
            })
            .collect();

        Subscription::merge(parts)
    }
}

impl<T, const N: usize> Clone for CombineLatest<T, N> {
    fn clone(&self) -> Self {
        Self {
            sources: self.sources.clone(),
        }
    }
}

impl<T, const N: usize> fmt::Debug for CombineLatest<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombineLatest").field("sources", &N).finish()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::ValueStream;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn emission_count_matches_updates(updates in prop::collection::vec((0usize..3, -100i32..100), 0..40)) {
            let streams = [0, 0, 0].map(ValueStream::new);
            let combined = combine_latest(streams.each_ref().map(|s| s.source()));
            let last = Rc::new(RefCell::new(None));
            let count = Rc::new(RefCell::new(0usize));
            let (sink, counter) = (Rc::clone(&last), Rc::clone(&count));
            let _sub = combined.subscribe(move |t: &[i32; 3]| {
                *sink.borrow_mut() = Some(*t);
                *counter.borrow_mut() += 1;
            });

            let mut expected = [0, 0, 0];
            for (index, value) in &updates {
                streams[*index].set(*value);
                expected[*index] = *value;
            }

            prop_assert_eq!(*count.borrow(), updates.len() + 1);
            prop_assert_eq!(*last.borrow(), Some(expected));
        }
    }
}

//! The subscription contract shared by every stream type.

use std::rc::Rc;

use crate::Subscription;

/// Callback invoked with each emitted value.
pub type Observer<T> = Rc<dyn Fn(&T)>;

/// Anything that can push values of type `T` to registered observers.
///
/// The trait stays object-safe so heterogeneous sources can be combined
/// behind `Rc<dyn Observable<T>>`.
pub trait Observable<T> {
    /// Register an observer. Dropping the returned handle deregisters it.
    fn observe(&self, observer: Observer<T>) -> Subscription;

    /// Convenience wrapper around [`Observable::observe`] for closures.
    fn subscribe<F>(&self, f: F) -> Subscription
    where
        F: Fn(&T) + 'static,
        Self: Sized,
    {
        self.observe(Rc::new(f))
    }
}

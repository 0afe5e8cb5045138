//! Deregistration handles.

use std::fmt;

/// Handle returned by every subscribe call.
///
/// Dropping the handle (or calling [`Subscription::unsubscribe`]) removes the
/// observer from its source. A merged subscription tears down all of its
/// parts together.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a subscription that runs `teardown` exactly once when released.
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// Bundle several subscriptions into one handle.
    pub fn merge(parts: Vec<Subscription>) -> Self {
        Self::new(move || drop(parts))
    }

    /// Release the subscription now.
    pub fn unsubscribe(self) {
        drop(self);
    }

    /// Whether the teardown has not run yet.
    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Teardown handle for one sensor registration.
///
/// Acquired when a source activates and released on every exit path: an
/// explicit `cancel` call or the handle going out of scope. Providers keep a
/// [`SubscriptionHandle`] and stop delivering once it reports inactive, so
/// re-activation never accumulates duplicate listeners.
#[derive(Debug)]
pub struct Subscription {
    active: Arc<AtomicBool>,
}

/// Provider-side view of a subscription. Read-only.
#[derive(Debug, Clone)]
pub struct SubscriptionHandle {
    active: Arc<AtomicBool>,
}

impl Subscription {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn handle(&self) -> SubscriptionHandle {
        SubscriptionHandle {
            active: Arc::clone(&self.active),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl SubscriptionHandle {
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_visible_through_the_handle() {
        let subscription = Subscription::new();
        let handle = subscription.handle();

        assert!(handle.is_active());
        subscription.cancel();
        assert!(!handle.is_active());
    }

    #[test]
    fn test_drop_releases_the_registration() {
        let subscription = Subscription::new();
        let handle = subscription.handle();

        drop(subscription);
        assert!(!handle.is_active());
    }
}

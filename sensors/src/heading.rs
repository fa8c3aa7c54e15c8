use std::sync::mpsc::{self, Receiver, Sender};

use logger::Logger;

use crate::errors::SensorError;
use crate::subscription::Subscription;
use crate::types::OrientationSample;

/// The platform's absolute device-orientation event stream.
pub trait OrientationProvider {
    fn subscribe(&mut self, sink: Sender<OrientationSample>) -> Result<Subscription, SensorError>;
}

/// Consumer end of the orientation stream.
///
/// Exactly one sink registration exists per activation; cancelling the
/// subscription removes it, so a fresh activation never stacks listeners.
pub struct HeadingSource {
    events: Receiver<OrientationSample>,
    subscription: Option<Subscription>,
}

impl HeadingSource {
    pub fn start<P: OrientationProvider>(provider: &mut P, logger: Logger) -> Self {
        let (sender, events) = mpsc::channel();
        let subscription = match provider.subscribe(sender) {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                let _ = logger.warn(&format!("Orientation stream not started: {}", e), false);
                None
            }
        };

        Self {
            events,
            subscription,
        }
    }

    /// Applies every queued sample that carries a defined angle, in arrival
    /// order. Samples with no angle are skipped without comment.
    pub fn drain(&self, mut apply: impl FnMut(f64)) {
        while let Ok(sample) = self.events.try_recv() {
            if let Some(angle) = sample.absolute_angle {
                apply(angle);
            }
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription
            .as_ref()
            .map(|s| s.is_active())
            .unwrap_or(false)
    }

    /// Releases the listener registration.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}

impl Drop for HeadingSource {
    fn drop(&mut self) {
        self.stop();
    }
}

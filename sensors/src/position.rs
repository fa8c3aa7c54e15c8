use std::sync::mpsc::{self, Receiver, Sender};

use logger::Logger;

use crate::errors::SensorError;
use crate::subscription::Subscription;
use crate::types::{GeoFix, WatchOptions};

/// A single delivery from the location capability: either a fresh fix or a
/// failure report.
#[derive(Debug, Clone)]
pub enum PositionEvent {
    Fix(GeoFix),
    Failed(SensorError),
}

/// The platform capability that produces continuous location updates.
///
/// `watch` begins a continuous subscription pushing [`PositionEvent`]s into
/// `sink` until the returned [`Subscription`] is cancelled.
pub trait PositionProvider {
    fn watch(
        &mut self,
        options: WatchOptions,
        sink: Sender<PositionEvent>,
    ) -> Result<Subscription, SensorError>;
}

/// Consumer end of the continuous location watch.
///
/// The provider pushes events from its own thread; the owning component
/// drains them on its thread, so every slot update happens in arrival order.
pub struct PositionSource {
    events: Receiver<PositionEvent>,
    subscription: Option<Subscription>,
    logger: Logger,
}

impl PositionSource {
    /// Activates a continuous high-accuracy watch against `provider`.
    ///
    /// If the capability is unavailable on this host the source comes up
    /// inert: it never emits and never errors loudly. A single warning goes
    /// to the diagnostic log.
    pub fn start<P: PositionProvider>(
        provider: &mut P,
        options: WatchOptions,
        logger: Logger,
    ) -> Self {
        let (sender, events) = mpsc::channel();
        let subscription = match provider.watch(options, sender) {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                let _ = logger.warn(&format!("Location tracking not started: {}", e), false);
                None
            }
        };

        Self {
            events,
            subscription,
            logger,
        }
    }

    /// Applies every queued fix in arrival order, one wholesale replacement
    /// per event. Failure reports go to the diagnostic log and leave the
    /// consumer's position untouched.
    pub fn drain(&self, mut apply: impl FnMut(GeoFix)) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                PositionEvent::Fix(fix) => apply(fix),
                PositionEvent::Failed(e) => {
                    let _ = self
                        .logger
                        .error(&format!("Error getting user location: {}", e), false);
                }
            }
        }
    }

    pub fn is_watching(&self) -> bool {
        self.subscription
            .as_ref()
            .map(|s| s.is_active())
            .unwrap_or(false)
    }

    /// Releases the watch so no further fixes are delivered.
    pub fn stop(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}

impl Drop for PositionSource {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeoPosition;
    use chrono::Utc;
    use std::fs;
    use std::path::Path;

    struct FakeGeolocation {
        sink: Option<Sender<PositionEvent>>,
        available: bool,
    }

    impl FakeGeolocation {
        fn new(available: bool) -> Self {
            Self {
                sink: None,
                available,
            }
        }

        fn push_fix(&self, lat: f64, lng: f64) {
            let fix = GeoFix {
                position: GeoPosition::new(lat, lng),
                timestamp: Utc::now(),
            };
            self.sink
                .as_ref()
                .expect("watch was never started")
                .send(PositionEvent::Fix(fix))
                .expect("source hung up");
        }

        fn push_failure(&self, error: SensorError) {
            self.sink
                .as_ref()
                .expect("watch was never started")
                .send(PositionEvent::Failed(error))
                .expect("source hung up");
        }
    }

    impl PositionProvider for FakeGeolocation {
        fn watch(
            &mut self,
            _options: WatchOptions,
            sink: Sender<PositionEvent>,
        ) -> Result<Subscription, SensorError> {
            if !self.available {
                return Err(SensorError::Unavailable);
            }
            self.sink = Some(sink);
            Ok(Subscription::new())
        }
    }

    fn test_logger(name: &str) -> Logger {
        let dir = Path::new("/tmp/cottage_map_test_sensors");
        fs::create_dir_all(dir).expect("Failed to create test directory");
        Logger::new(dir, name).expect("Failed to create logger")
    }

    #[test]
    fn test_fixes_are_applied_in_arrival_order() {
        let mut provider = FakeGeolocation::new(true);
        let source = PositionSource::start(
            &mut provider,
            WatchOptions::default(),
            test_logger("position_order"),
        );

        provider.push_fix(56.0, -3.0);
        provider.push_fix(56.1, -3.1);
        provider.push_fix(56.2, -3.2);

        let mut slot: Option<GeoPosition> = None;
        let mut seen = Vec::new();
        source.drain(|fix| {
            seen.push(fix.position.lat);
            slot = Some(fix.position);
        });

        assert_eq!(seen, vec![56.0, 56.1, 56.2]);
        assert_eq!(slot.map(|p| p.lng), Some(-3.2));
    }

    #[test]
    fn test_failure_leaves_the_slot_untouched() {
        let mut provider = FakeGeolocation::new(true);
        let source = PositionSource::start(
            &mut provider,
            WatchOptions::default(),
            test_logger("position_failure"),
        );

        provider.push_fix(56.0, -3.0);
        let mut slot: Option<GeoPosition> = None;
        source.drain(|fix| slot = Some(fix.position));
        let before = slot;

        provider.push_failure(SensorError::FixTimeout);
        source.drain(|fix| slot = Some(fix.position));

        assert_eq!(slot, before);
    }

    #[test]
    fn test_unavailable_capability_yields_inert_source() {
        let mut provider = FakeGeolocation::new(false);
        let source = PositionSource::start(
            &mut provider,
            WatchOptions::default(),
            test_logger("position_unavailable"),
        );

        assert!(!source.is_watching());

        let mut applied = 0;
        source.drain(|_| applied += 1);
        assert_eq!(applied, 0);
    }

    #[test]
    fn test_stop_releases_the_watch() {
        let mut provider = FakeGeolocation::new(true);
        let mut source = PositionSource::start(
            &mut provider,
            WatchOptions::default(),
            test_logger("position_stop"),
        );

        assert!(source.is_watching());
        source.stop();
        assert!(!source.is_watching());
    }
}

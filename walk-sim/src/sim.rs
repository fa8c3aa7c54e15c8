use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};
use rand::Rng;
use threadpool::ThreadPool;

use sensors::{
    GeoFix, OrientationProvider, OrientationSample, PositionEvent, PositionProvider, SensorError,
    Subscription, SubscriptionHandle, WatchOptions,
};

use crate::errors::SimError;
use crate::route::Route;
use crate::timer::Timer;

type PositionSinks = Arc<Mutex<Vec<(SubscriptionHandle, Sender<PositionEvent>)>>>;
type OrientationSinks = Arc<Mutex<Vec<(SubscriptionHandle, Sender<OrientationSample>)>>>;

/// Tuning knobs for the simulated visitor.
#[derive(Debug, Clone, Copy)]
pub struct WalkConfig {
    /// Walking pace in km/h.
    pub pace_kmh: f64,
    /// Probability that a tick reports a fix timeout instead of a sample.
    pub dropout_rate: f64,
    /// Compass noise added to the route bearing, in degrees either way.
    pub heading_jitter_deg: f64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            pace_kmh: 4.0,
            dropout_rate: 0.05,
            heading_jitter_deg: 4.0,
        }
    }
}

/// Drives a walker along a route and fans the resulting sensor events out to
/// every live subscriber.
///
/// Implements both sensor provider traits, so the map shell can treat it
/// exactly like platform geolocation and compass hardware.
pub struct WalkSimulation {
    route: Arc<Route>,
    config: WalkConfig,
    timer: Arc<Timer>,
    start_time: DateTime<Utc>,
    thread_pool: Arc<ThreadPool>,
    position_sinks: PositionSinks,
    orientation_sinks: OrientationSinks,
}

impl WalkSimulation {
    pub fn new(route: Route, config: WalkConfig, tick_every: StdDuration) -> Result<Self, SimError> {
        if config.pace_kmh <= 0.0 || !config.pace_kmh.is_finite() {
            return Err(SimError::InvalidPace(config.pace_kmh.to_string()));
        }

        let start_time = Utc::now();
        Ok(Self {
            route: Arc::new(route),
            config,
            timer: Timer::new(start_time, 1, tick_every),
            start_time,
            thread_pool: Arc::new(ThreadPool::new(2)),
            position_sinks: Arc::new(Mutex::new(Vec::new())),
            orientation_sinks: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Starts the tick thread. Each tick computes the walker's position and
    /// facing direction and dispatches them to the subscribed sinks.
    pub fn start(&self) -> Result<(), SimError> {
        let route = Arc::clone(&self.route);
        let config = self.config;
        let start_time = self.start_time;
        let thread_pool = Arc::clone(&self.thread_pool);
        let position_sinks = Arc::clone(&self.position_sinks);
        let orientation_sinks = Arc::clone(&self.orientation_sinks);

        Arc::clone(&self.timer).start(move |current_time, _tick_count| {
            let elapsed_hours =
                current_time.signed_duration_since(start_time).num_seconds() as f64 / 3600.0;
            let distance_km = config.pace_kmh * elapsed_hours;
            let (position, bearing) = route.locate(distance_km);

            let mut rng = rand::thread_rng();

            let position_event = if rng.gen::<f64>() < config.dropout_rate {
                PositionEvent::Failed(SensorError::FixTimeout)
            } else {
                PositionEvent::Fix(GeoFix {
                    position,
                    timestamp: current_time,
                })
            };

            let orientation_sample = if rng.gen::<f64>() < config.dropout_rate {
                OrientationSample {
                    absolute_angle: None,
                }
            } else {
                let jitter = rng.gen_range(-config.heading_jitter_deg..=config.heading_jitter_deg);
                OrientationSample {
                    absolute_angle: Some((bearing + jitter).rem_euclid(360.0)),
                }
            };

            let sinks = Arc::clone(&position_sinks);
            thread_pool.execute(move || dispatch_position(&sinks, position_event));

            let sinks = Arc::clone(&orientation_sinks);
            thread_pool.execute(move || dispatch_orientation(&sinks, orientation_sample));
        })
    }

    /// Stops the tick thread and waits for in-flight dispatches to finish.
    pub fn stop(&self) {
        self.timer.stop();
        self.thread_pool.join();
    }

    pub fn pause(&self) {
        self.timer.pause();
    }

    pub fn resume(&self) {
        self.timer.resume();
    }
}

impl PositionProvider for WalkSimulation {
    fn watch(
        &mut self,
        _options: WatchOptions,
        sink: Sender<PositionEvent>,
    ) -> Result<Subscription, SensorError> {
        let subscription = Subscription::new();
        let mut sinks = self
            .position_sinks
            .lock()
            .map_err(|_| SensorError::SpawnError("position sink registry poisoned".to_string()))?;
        sinks.push((subscription.handle(), sink));
        Ok(subscription)
    }
}

impl OrientationProvider for WalkSimulation {
    fn subscribe(&mut self, sink: Sender<OrientationSample>) -> Result<Subscription, SensorError> {
        let subscription = Subscription::new();
        let mut sinks = self.orientation_sinks.lock().map_err(|_| {
            SensorError::SpawnError("orientation sink registry poisoned".to_string())
        })?;
        sinks.push((subscription.handle(), sink));
        Ok(subscription)
    }
}

// Cancelled subscriptions and hung-up receivers are pruned on dispatch, so a
// stopped source stops receiving without any unregister call.
fn dispatch_position(sinks: &PositionSinks, event: PositionEvent) {
    if let Ok(mut sinks) = sinks.lock() {
        sinks.retain(|(handle, sender)| handle.is_active() && sender.send(event.clone()).is_ok());
    } else {
        eprintln!("Failed to lock position sinks. Skipping dispatch.");
    }
}

fn dispatch_orientation(sinks: &OrientationSinks, sample: OrientationSample) {
    if let Ok(mut sinks) = sinks.lock() {
        sinks.retain(|(handle, sender)| handle.is_active() && sender.send(sample).is_ok());
    } else {
        eprintln!("Failed to lock orientation sinks. Skipping dispatch.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Waypoint;
    use std::sync::mpsc;

    fn test_route() -> Route {
        Route::new(vec![
            Waypoint {
                lat: 56.6159,
                lng: -3.8622,
            },
            Waypoint {
                lat: 56.6169,
                lng: -3.8622,
            },
        ])
        .expect("Failed to build route")
    }

    fn steady_config() -> WalkConfig {
        WalkConfig {
            pace_kmh: 4.0,
            dropout_rate: 0.0,
            heading_jitter_deg: 0.0,
        }
    }

    #[test]
    fn test_rejects_non_positive_pace() {
        let config = WalkConfig {
            pace_kmh: 0.0,
            ..steady_config()
        };
        let result = WalkSimulation::new(test_route(), config, StdDuration::from_millis(10));
        assert!(matches!(result, Err(SimError::InvalidPace(_))));
    }

    #[test]
    fn test_subscribers_receive_fixes() {
        let mut sim =
            WalkSimulation::new(test_route(), steady_config(), StdDuration::from_millis(10))
                .expect("Failed to build simulation");

        let (tx, rx) = mpsc::channel();
        let _subscription = sim
            .watch(WatchOptions::default(), tx)
            .expect("Failed to register watch");

        sim.start().expect("Failed to start simulation");

        let event = rx
            .recv_timeout(StdDuration::from_secs(2))
            .expect("No event arrived");
        match event {
            PositionEvent::Fix(fix) => {
                assert!((fix.position.lat - 56.6159).abs() < 0.01);
            }
            PositionEvent::Failed(e) => panic!("Unexpected failure event: {}", e),
        }

        sim.stop();
    }

    #[test]
    fn test_orientation_follows_the_route_bearing() {
        let mut sim =
            WalkSimulation::new(test_route(), steady_config(), StdDuration::from_millis(10))
                .expect("Failed to build simulation");

        let (tx, rx) = mpsc::channel();
        let _subscription = sim.subscribe(tx).expect("Failed to subscribe");

        sim.start().expect("Failed to start simulation");

        let sample = rx
            .recv_timeout(StdDuration::from_secs(2))
            .expect("No sample arrived");
        // The only leg runs due north; with jitter disabled the compass
        // reads 0 (or its 360-wrapped equivalent)
        let angle = sample.absolute_angle.expect("Angle should be defined");
        assert!(angle < 1e-6 || (360.0 - angle) < 1e-6, "got {}", angle);

        sim.stop();
    }

    #[test]
    fn test_cancelled_subscription_is_pruned() {
        let sinks: PositionSinks = Arc::new(Mutex::new(Vec::new()));
        let subscription = Subscription::new();
        let (tx, rx) = mpsc::channel();
        sinks
            .lock()
            .expect("sink registry poisoned")
            .push((subscription.handle(), tx));

        let fix = PositionEvent::Fix(GeoFix {
            position: sensors::GeoPosition::new(56.0, -3.0),
            timestamp: Utc::now(),
        });

        dispatch_position(&sinks, fix.clone());
        assert!(rx.try_recv().is_ok());

        subscription.cancel();
        dispatch_position(&sinks, fix);

        assert!(rx.try_recv().is_err());
        assert!(sinks.lock().expect("sink registry poisoned").is_empty());
    }

    #[test]
    fn test_dropped_receiver_is_pruned() {
        let sinks: PositionSinks = Arc::new(Mutex::new(Vec::new()));
        let subscription = Subscription::new();
        let (tx, rx) = mpsc::channel();
        sinks
            .lock()
            .expect("sink registry poisoned")
            .push((subscription.handle(), tx));

        drop(rx);
        dispatch_position(
            &sinks,
            PositionEvent::Failed(SensorError::FixTimeout),
        );

        assert!(sinks.lock().expect("sink registry poisoned").is_empty());
    }
}

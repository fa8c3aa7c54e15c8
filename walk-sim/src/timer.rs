use chrono::{DateTime, Duration, Utc};
use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex, RwLock,
    },
    thread,
    time::{Duration as StdDuration, Instant},
};

use crate::errors::SimError;

/// A timer for driving the walk simulation, with support for starting,
/// pausing, and resuming.
///
/// The `Timer` tracks the simulated wall-clock, advances it by a specified
/// duration on each tick, and runs a custom callback per tick.
pub struct Timer {
    pub current_time: Mutex<DateTime<Utc>>,
    pub tick_advance: RwLock<Duration>,
    pub tick_every: StdDuration,
    pub running: AtomicBool,
    pub paused: AtomicBool,
}

impl Timer {
    /// Creates a new timer.
    pub fn new(
        start_time: DateTime<Utc>,
        tick_advance_seconds: i64,
        tick_every: StdDuration,
    ) -> Arc<Self> {
        Arc::new(Self {
            current_time: Mutex::new(start_time),
            tick_advance: RwLock::new(Duration::seconds(tick_advance_seconds)),
            tick_every,
            running: AtomicBool::new(true),
            paused: AtomicBool::new(false),
        })
    }

    /// Changes the amount of simulated time advanced per tick.
    pub fn set_tick_advance(&self, new_tick_advance_seconds: i64) -> Result<(), SimError> {
        if new_tick_advance_seconds <= 0 || new_tick_advance_seconds > 3600 {
            return Err(SimError::InvalidDuration(
                new_tick_advance_seconds.to_string(),
            ));
        }

        let mut tick_advance_lock = self.tick_advance.write().map_err(|_| {
            SimError::TimerLockError("Failed to acquire write lock for tick_advance.".to_string())
        })?;
        *tick_advance_lock = Duration::seconds(new_tick_advance_seconds);
        Ok(())
    }

    /// Stops the timer.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Pauses the timer indefinitely.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
    }

    /// Resumes the timer.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::SeqCst);
    }

    /// Starts the timer and executes the callback function on each tick.
    pub fn start(
        self: Arc<Self>,
        tick_callback: impl Fn(DateTime<Utc>, usize) + Send + 'static,
    ) -> Result<(), SimError> {
        thread::Builder::new()
            .name("walk-timer".to_string())
            .spawn(move || {
                let mut tick_count = 0;
                while self.running.load(Ordering::SeqCst) {
                    while self.paused.load(Ordering::SeqCst) {
                        if !self.running.load(Ordering::SeqCst) {
                            return;
                        }
                        thread::sleep(StdDuration::from_millis(50));
                    }

                    let now = Instant::now();

                    let current_time;
                    {
                        let mut time_lock = match self.current_time.lock() {
                            Ok(lock) => lock,
                            Err(_) => {
                                eprintln!("Failed to acquire lock on current_time. Skipping tick.");
                                continue;
                            }
                        };

                        let tick_advance = match self.tick_advance.read() {
                            Ok(duration) => *duration,
                            Err(_) => {
                                eprintln!(
                                    "Failed to acquire read lock on tick_advance. Skipping tick."
                                );
                                continue;
                            }
                        };

                        *time_lock += tick_advance;
                        current_time = *time_lock;
                    }

                    tick_count += 1;

                    tick_callback(current_time, tick_count);

                    let elapsed = now.elapsed();
                    let sleep_duration = self.tick_every.saturating_sub(elapsed);
                    thread::sleep(sleep_duration);
                }
            })
            .map_err(|_| SimError::TimerStartError("Failed to start the timer thread.".to_string()))
            .map(|_| ())
    }
}

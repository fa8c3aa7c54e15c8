//! Simulated visitor walk around the resort grounds.
//!
//! Stands in for platform geolocation and compass hardware on desktop
//! builds: a tick timer moves a walker along a waypoint route and the
//! resulting fixes and orientation samples are fanned out to every
//! subscribed sensor sink.

pub const TICK_FREQUENCY_MILLIS: u64 = 1000;

pub mod errors;

pub mod route;

pub mod sim;

pub mod timer;

pub use errors::SimError;
pub use route::{Route, Waypoint};
pub use sim::{WalkConfig, WalkSimulation};
pub use timer::Timer;

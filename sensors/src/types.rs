use chrono::{DateTime, Utc};

/// A point on the globe in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPosition {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A single reported location sample: where, and when it was produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoFix {
    pub position: GeoPosition,
    pub timestamp: DateTime<Utc>,
}

/// One absolute device-orientation event. The primary-axis angle is in
/// degrees clockwise from north and may be undefined when the platform cannot
/// resolve it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSample {
    pub absolute_angle: Option<f64>,
}

/// Options handed to the location capability when a watch starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    pub high_accuracy: bool,
    /// Maximum acceptable age of a cached sample, in milliseconds. Zero
    /// means no cached samples at all.
    pub max_fix_age_ms: u64,
    /// How long a single fix attempt may take before it counts as failed.
    pub fix_timeout_ms: u64,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            max_fix_age_ms: 0,
            fix_timeout_ms: 5000,
        }
    }
}

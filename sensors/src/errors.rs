use std::fmt;

/// Represents failures reported by the location and orientation capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    Unavailable,
    PermissionDenied,
    FixTimeout,
    SpawnError(String),
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Unavailable => write!(f, "Capability is not available on this host"),
            SensorError::PermissionDenied => write!(f, "Permission to the capability was denied"),
            SensorError::FixTimeout => write!(f, "Timed out waiting for a fix"),
            SensorError::SpawnError(msg) => write!(f, "Failed to start sensor worker: {}", msg),
        }
    }
}

impl std::error::Error for SensorError {}

use std::fmt;

/// Represents errors that can occur in the walk simulator.
#[derive(Debug)]
pub enum SimError {
    EmptyRoute,
    InvalidPace(String),
    InvalidDuration(String),
    TimerLockError(String),
    TimerStartError(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::EmptyRoute => {
                write!(f, "A walk route needs at least two waypoints.")
            }
            SimError::InvalidPace(pace) => write!(f, "Invalid walking pace: {}", pace),
            SimError::InvalidDuration(msg) => write!(f, "Invalid duration: {}", msg),
            SimError::TimerLockError(msg) => write!(f, "Timer lock error: {}", msg),
            SimError::TimerStartError(msg) => write!(f, "Timer start error: {}", msg),
        }
    }
}

impl std::error::Error for SimError {}

use sensors::{GeoFix, GeoPosition};

/// Live sensor readings fused into the view.
///
/// Both slots start empty and are replaced wholesale per event; a failed
/// sensor simply leaves its slot at the last good value.
pub struct TrackingState {
    pub position: Option<GeoPosition>,
    pub heading: Option<f64>,
}

impl TrackingState {
    pub fn new() -> TrackingState {
        Self {
            position: None,
            heading: None,
        }
    }

    pub fn apply_fix(&mut self, fix: GeoFix) {
        self.position = Some(fix.position);
    }

    pub fn apply_heading(&mut self, angle: f64) {
        self.heading = Some(angle);
    }
}

/// The search form's input text and the message produced by the last search.
pub struct SearchState {
    pub input: String,
    pub message: String,
}

impl SearchState {
    pub fn new() -> SearchState {
        Self {
            input: String::new(),
            message: String::new(),
        }
    }
}

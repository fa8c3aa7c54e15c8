use serde::Deserialize;

use super::MarkerIcon;

/// A static point of interest (reception, parking, pool...). Pure reference
/// data, no state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MiscMarker {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub icon: MarkerIcon,
}

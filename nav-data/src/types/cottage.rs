use serde::Deserialize;

use super::MarkerIcon;

/// A cottage on the resort grounds, as listed in the navigation seed data.
///
/// `number` is the unique key of the record. `is_active` marks the cottage as
/// the current search result; it is never flipped in place, a search derives
/// a whole new collection instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Cottage {
    pub number: u32,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub icon: MarkerIcon,
    #[serde(default)]
    pub is_active: bool,
}

impl Cottage {
    /// Display label used for the marker popup and the search result message.
    pub fn label(&self) -> String {
        format!("Cottage {} - {}", self.number, self.name)
    }
}

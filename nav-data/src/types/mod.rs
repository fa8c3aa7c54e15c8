mod cottage;
pub use cottage::Cottage;

mod marker_icon;
pub use marker_icon::MarkerIcon;

mod misc_marker;
pub use misc_marker::MiscMarker;

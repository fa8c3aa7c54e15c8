use nav_data::Cottage;
use sensors::GeoPosition;
use walkers::{MapMemory, Position};

/// Zoom level used when centering on a matched cottage.
pub const COTTAGE_ZOOM: f64 = 17.0;
/// Zoom level used when centering on the visitor's own position.
pub const LOCATE_ZOOM: f64 = 15.0;

/// The slice of the map surface that view-centering commands drive. Keeping
/// it behind a trait lets the commands run against a recording fake in tests.
pub trait MapSurface {
    fn set_view(&mut self, center: Position, zoom: f64);
}

impl MapSurface for MapMemory {
    fn set_view(&mut self, center: Position, zoom: f64) {
        self.center_at(center);
        let _ = self.set_zoom(zoom);
    }
}

/// Centers the map on a matched cottage.
pub fn center_on_cottage(surface: &mut impl MapSurface, cottage: &Cottage) {
    surface.set_view(
        Position::from_lat_lon(cottage.lat, cottage.lng),
        COTTAGE_ZOOM,
    );
}

/// Centers the map on the visitor. Silent no-op while no fix has arrived.
pub fn center_on_user(surface: &mut impl MapSurface, position: Option<&GeoPosition>) {
    if let Some(position) = position {
        surface.set_view(
            Position::from_lat_lon(position.lat, position.lng),
            LOCATE_ZOOM,
        );
    }
}

use egui::{Rect, Response, Vec2};
use walkers::{Plugin, Position, Projector};

use nav_data::MiscMarker;

use super::icon_image;

/// Draws the static points of interest: reception, parking, pool and so on.
pub struct MiscMarkers<'a> {
    markers: &'a [MiscMarker],
}

impl<'a> MiscMarkers<'a> {
    pub fn new(markers: &'a [MiscMarker]) -> Self {
        Self { markers }
    }
}

impl Plugin for MiscMarkers<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for marker in self.markers {
            let screen_position =
                projector.project(Position::from_lat_lon(marker.lat, marker.lng));

            let symbol_size = Vec2::new(26.0, 26.0);

            let rect = {
                let min_pos =
                    screen_position.to_pos2() - Vec2::new(symbol_size.x / 2.0, symbol_size.y);
                Rect::from_min_size(min_pos, symbol_size)
            };

            let hover_area = ui.allocate_rect(rect, egui::Sense::hover());

            let image = icon_image(marker.icon).fit_to_exact_size(symbol_size);
            ui.put(rect, image);

            hover_area.on_hover_text(&marker.name);
        }
    }
}

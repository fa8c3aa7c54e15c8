use egui::{include_image, Image, Rect, Response, Vec2};
use walkers::{Plugin, Position, Projector};

use sensors::GeoPosition;

/// Draws the visitor's own position, and their facing direction once the
/// compass has delivered a reading.
pub struct UserMarker {
    position: Option<GeoPosition>,
    /// Facing direction in degrees clockwise from north, rotated about the
    /// marker center.
    rotation_degrees: Option<f64>,
}

impl UserMarker {
    pub fn new(position: Option<GeoPosition>, rotation_degrees: Option<f64>) -> Self {
        Self {
            position,
            rotation_degrees,
        }
    }
}

impl Plugin for UserMarker {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        let Some(position) = self.position else {
            return;
        };

        let screen_position =
            projector.project(Position::from_lat_lon(position.lat, position.lng));

        let dot_size = Vec2::new(20.0, 20.0);
        let dot_rect = Rect::from_center_size(screen_position.to_pos2(), dot_size);

        let hover_area = ui.allocate_rect(dot_rect, egui::Sense::hover());

        let dot = Image::new(include_image!(r"../../blue-dot.svg")).fit_to_exact_size(dot_size);
        ui.put(dot_rect, dot);

        if let Some(rotation_degrees) = self.rotation_degrees {
            let arrow_size = Vec2::new(30.0, 30.0);
            let arrow_rect = Rect::from_center_size(screen_position.to_pos2(), arrow_size);

            let arrow = Image::new(include_image!(r"../../arrow-icon.svg"))
                .fit_to_exact_size(arrow_size)
                .rotate((rotation_degrees as f32).to_radians(), Vec2::splat(0.5));

            ui.put(arrow_rect, arrow);
        }

        hover_area.on_hover_text("You are here!");
    }
}

use egui::{Align2, Color32, FontId, Rect, Response, Vec2};
use walkers::{Plugin, Position, Projector};

use nav_data::Cottage;

use super::icon_image;

/// Draws a marker and label for every cottage highlighted by the last
/// search.
pub struct ActiveCottages<'a> {
    cottages: &'a [Cottage],
}

impl<'a> ActiveCottages<'a> {
    pub fn new(cottages: &'a [Cottage]) -> Self {
        Self { cottages }
    }
}

impl Plugin for ActiveCottages<'_> {
    fn run(self: Box<Self>, ui: &mut egui::Ui, _response: &Response, projector: &Projector) {
        for cottage in self.cottages.iter().filter(|c| c.is_active) {
            draw_cottage(cottage, ui, projector);
        }
    }
}

fn draw_cottage(cottage: &Cottage, ui: &mut egui::Ui, projector: &Projector) {
    let screen_position = projector.project(Position::from_lat_lon(cottage.lat, cottage.lng));

    let symbol_size = Vec2::new(30.0, 30.0);

    // Pin tip sits on the coordinate, so the rect hangs above it
    let rect = {
        let min_pos = screen_position.to_pos2() - Vec2::new(symbol_size.x / 2.0, symbol_size.y);
        Rect::from_min_size(min_pos, symbol_size)
    };

    let hover_area = ui.allocate_rect(rect, egui::Sense::hover());

    let image = icon_image(cottage.icon).fit_to_exact_size(symbol_size);
    ui.put(rect, image);

    ui.painter().text(
        screen_position.to_pos2() + Vec2::new(0.0, 4.0),
        Align2::CENTER_TOP,
        cottage.label(),
        FontId::proportional(13.0),
        Color32::from_gray(20),
    );

    hover_area.on_hover_text(cottage.label());
}

use egui::Response;
use walkers::{Plugin, Projector};

use logger::{Color, Logger};

/// Reports clicked map coordinates to the diagnostic log. No state effect.
pub struct ClickLogger {
    logger: Logger,
}

impl ClickLogger {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl Plugin for ClickLogger {
    fn run(self: Box<Self>, _ui: &mut egui::Ui, response: &Response, projector: &Projector) {
        if response.clicked() {
            if let Some(pointer) = response.interact_pointer_pos() {
                let position = projector.unproject(pointer.to_vec2());
                let _ = self.logger.info(
                    &format!(
                        "Map clicked at: latitude {:.6}, longitude {:.6}",
                        position.lat(),
                        position.lon()
                    ),
                    Color::Cyan,
                    false,
                );
            }
        }
    }
}

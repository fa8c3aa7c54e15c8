use logger::Logger;
use nav_data::{Directory, MiscMarker};
use sensors::{HeadingSource, PositionSource};

mod map;
mod plugins;
mod state;
mod view;
mod widgets;
mod windows;

pub use map::CottageMapApp;
pub use view::{center_on_cottage, center_on_user, MapSurface, COTTAGE_ZOOM, LOCATE_ZOOM};

pub fn run(
    directory: Directory,
    misc_markers: Vec<MiscMarker>,
    position_source: PositionSource,
    heading_source: HeadingSource,
    logger: Logger,
) -> Result<(), eframe::Error> {
    eframe::run_native(
        "Cottage Map",
        Default::default(),
        Box::new(move |cc| {
            Ok(Box::new(CottageMapApp::new(
                cc.egui_ctx.clone(),
                directory,
                misc_markers,
                position_source,
                heading_source,
                logger,
            )))
        }),
    )
}

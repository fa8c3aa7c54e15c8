use egui::{include_image, Image};
use nav_data::MarkerIcon;

mod click_logger;
mod cottages;
mod misc;
mod user;

pub use click_logger::ClickLogger;
pub use cottages::ActiveCottages;
pub use misc::MiscMarkers;
pub use user::UserMarker;

pub(crate) fn icon_image(icon: MarkerIcon) -> Image<'static> {
    match icon {
        MarkerIcon::Cottage => Image::new(include_image!(r"../../cottage-pin.svg")),
        MarkerIcon::Reception => Image::new(include_image!(r"../../reception-pin.svg")),
        MarkerIcon::Parking => Image::new(include_image!(r"../../parking-pin.svg")),
        MarkerIcon::Pool => Image::new(include_image!(r"../../pool-pin.svg")),
        MarkerIcon::Playground => Image::new(include_image!(r"../../playground-pin.svg")),
        MarkerIcon::Trail => Image::new(include_image!(r"../../trail-pin.svg")),
    }
}

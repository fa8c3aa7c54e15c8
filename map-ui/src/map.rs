use std::time::Duration;

use egui::Context;
use egui_extras::install_image_loaders;
use walkers::{HttpOptions, HttpTiles, Map, MapMemory, Position, Tiles};

use logger::Logger;
use nav_data::{Directory, MiscMarker};
use sensors::{HeadingSource, PositionSource};

use crate::{
    plugins,
    state::{SearchState, TrackingState},
    view, widgets, windows,
};

const INITIAL_LAT: f64 = 56.61594463631259;
const INITIAL_LON: f64 = -3.8622468709945683;
const INITIAL_ZOOM: f64 = 16.0;
const REPAINT_TICK_MS: u64 = 250;

/// The main application struct that manages the state and UI of the cottage
/// map.
///
/// `CottageMapApp` fuses the live sensor feeds, the cottage directory and
/// the search form into one view over the walkers map surface.
pub struct CottageMapApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    tracking: TrackingState,
    search: SearchState,
    directory: Directory,
    misc_markers: Vec<MiscMarker>,
    position_source: PositionSource,
    heading_source: HeadingSource,
    logger: Logger,
}

impl CottageMapApp {
    /// Creates a new `CottageMapApp` instance, initializing the map, state
    /// slots and sensor wiring.
    pub fn new(
        egui_ctx: Context,
        directory: Directory,
        misc_markers: Vec<MiscMarker>,
        position_source: PositionSource,
        heading_source: HeadingSource,
        logger: Logger,
    ) -> Self {
        install_image_loaders(&egui_ctx);
        let mut initial_map_memory = MapMemory::default();
        let _ = initial_map_memory.set_zoom(INITIAL_ZOOM);

        Self {
            tiles: Box::new(HttpTiles::with_options(
                walkers::sources::OpenStreetMap,
                HttpOptions::default(),
                egui_ctx.to_owned(),
            )),
            map_memory: initial_map_memory,
            tracking: TrackingState::new(),
            search: SearchState::new(),
            directory,
            misc_markers,
            position_source,
            heading_source,
            logger,
        }
    }

    // Slot updates happen here, on the UI thread, in each source's arrival
    // order. Position and heading are independent of each other.
    fn drain_sensors(&mut self) {
        let tracking = &mut self.tracking;
        self.position_source.drain(|fix| tracking.apply_fix(fix));
        self.heading_source
            .drain(|angle| tracking.apply_heading(angle));
    }

    fn run_search(&mut self) {
        let outcome = self.directory.search(&self.search.input);
        self.search.message = outcome.message;
        self.directory = outcome.directory;

        if let Some(cottage) = self.directory.first_active() {
            view::center_on_cottage(&mut self.map_memory, cottage);
        }
    }
}

impl eframe::App for CottageMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_sensors();

        ctx.request_repaint_after(Duration::from_millis(REPAINT_TICK_MS));

        let mut submitted = false;
        egui::TopBottomPanel::top("search_header").show(ctx, |ui| {
            ui.add_space(6.0);
            submitted = widgets::search_header(ui, &mut self.search);
            ui.add_space(6.0);
        });
        if submitted {
            self.run_search();
        }

        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let home_position = Position::from_lat_lon(INITIAL_LAT, INITIAL_LON);

                let tiles = self.tiles.as_mut();

                let misc_plugin = plugins::MiscMarkers::new(&self.misc_markers);
                let cottage_plugin = plugins::ActiveCottages::new(self.directory.cottages());
                let user_plugin =
                    plugins::UserMarker::new(self.tracking.position, self.tracking.heading);
                let click_plugin = plugins::ClickLogger::new(self.logger.clone());

                let map = Map::new(Some(tiles), &mut self.map_memory, home_position)
                    .with_plugin(misc_plugin)
                    .with_plugin(cottage_plugin)
                    .with_plugin(user_plugin)
                    .with_plugin(click_plugin);

                ui.add(map);

                let _button_response = egui::Area::new("locate_me_button".into())
                    .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
                    .show(ctx, |ui| {
                        let button_size = [110.0, 36.0];

                        if ui
                            .add_sized(button_size, egui::Button::new("Locate me").rounding(8.0))
                            .clicked()
                        {
                            view::center_on_user(
                                &mut self.map_memory,
                                self.tracking.position.as_ref(),
                            );
                        }
                    });

                windows::zoom(ui, &mut self.map_memory);
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Release the sensor subscriptions before the shell goes away
        self.position_source.stop();
        self.heading_source.stop();
    }
}

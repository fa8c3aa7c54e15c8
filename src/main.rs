use std::path::Path;
use std::time::Duration;

use logger::{Color, Logger};
use sensors::{HeadingSource, PositionSource, WatchOptions};
use walk_sim::{Route, WalkConfig, WalkSimulation, Waypoint};

const LOG_DIR: &str = "logs";
const COTTAGES_SEED: &str = "data/cottages.csv";
const MISC_SEED: &str = "data/misc_markers.csv";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(LOG_DIR)?;
    let log_dir = Path::new(LOG_DIR);
    let logger = Logger::new(log_dir, "cottage-map")?;

    let directory = nav_data::load_cottages(Path::new(COTTAGES_SEED))?;
    let misc_markers = nav_data::load_misc_markers(Path::new(MISC_SEED))?;
    logger.info(
        &format!("Loaded {} cottages from the seed data.", directory.len()),
        Color::Green,
        true,
    )?;

    let route = Route::new(resort_route())?;
    let mut simulation = WalkSimulation::new(
        route,
        WalkConfig::default(),
        Duration::from_millis(walk_sim::TICK_FREQUENCY_MILLIS),
    )?;

    let position_source = PositionSource::start(
        &mut simulation,
        WatchOptions::default(),
        Logger::new(log_dir, "position-source")?,
    );
    let heading_source =
        HeadingSource::start(&mut simulation, Logger::new(log_dir, "heading-source")?);

    simulation.start()?;

    map_ui::run(
        directory,
        misc_markers,
        position_source,
        heading_source,
        Logger::new(log_dir, "map-ui")?,
    )?;

    simulation.stop();
    Ok(())
}

// A stroll around the grounds: up past the cottages, along the top row and
// back down by the reception.
fn resort_route() -> Vec<Waypoint> {
    vec![
        Waypoint {
            lat: 56.61577,
            lng: -3.86221,
        },
        Waypoint {
            lat: 56.61612,
            lng: -3.86330,
        },
        Waypoint {
            lat: 56.61669,
            lng: -3.86203,
        },
        Waypoint {
            lat: 56.61685,
            lng: -3.86130,
        },
        Waypoint {
            lat: 56.61598,
            lng: -3.86022,
        },
        Waypoint {
            lat: 56.61511,
            lng: -3.86243,
        },
    ]
}

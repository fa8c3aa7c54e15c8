use sensors::GeoPosition;

use crate::errors::SimError;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A single corner of the walk route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
}

/// The closed path a simulated visitor walks, with per-leg lengths
/// precomputed so a travelled distance maps straight to a position and a
/// facing direction.
#[derive(Debug, Clone)]
pub struct Route {
    waypoints: Vec<Waypoint>,
    leg_lengths_km: Vec<f64>,
    total_km: f64,
}

impl Route {
    /// Builds a route over the given waypoints. The walker loops back from
    /// the last waypoint to the first.
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, SimError> {
        if waypoints.len() < 2 {
            return Err(SimError::EmptyRoute);
        }

        let mut leg_lengths_km = Vec::with_capacity(waypoints.len());
        for i in 0..waypoints.len() {
            let from = waypoints[i];
            let to = waypoints[(i + 1) % waypoints.len()];
            leg_lengths_km.push(haversine_distance(from.lat, from.lng, to.lat, to.lng));
        }
        let total_km = leg_lengths_km.iter().sum();

        Ok(Self {
            waypoints,
            leg_lengths_km,
            total_km,
        })
    }

    pub fn total_km(&self) -> f64 {
        self.total_km
    }

    /// Maps a travelled distance to a position on the route and the bearing
    /// of the leg being walked, in degrees clockwise from north.
    pub fn locate(&self, distance_km: f64) -> (GeoPosition, f64) {
        let mut remaining = if self.total_km > 0.0 {
            distance_km.rem_euclid(self.total_km)
        } else {
            0.0
        };

        for (i, leg_length) in self.leg_lengths_km.iter().enumerate() {
            if remaining <= *leg_length || i == self.leg_lengths_km.len() - 1 {
                let from = self.waypoints[i];
                let to = self.waypoints[(i + 1) % self.waypoints.len()];
                let progress_ratio = if *leg_length > 0.0 {
                    (remaining / leg_length).min(1.0)
                } else {
                    0.0
                };
                let position = GeoPosition::new(
                    from.lat + progress_ratio * (to.lat - from.lat),
                    from.lng + progress_ratio * (to.lng - from.lng),
                );
                let bearing = calculate_bearing(from.lat, from.lng, to.lat, to.lng);
                return (position, bearing);
            }
            remaining -= leg_length;
        }

        // Zero-length route: stand still facing north
        let first = self.waypoints[0];
        (GeoPosition::new(first.lat, first.lng), 0.0)
    }
}

/// Great-circle distance between two points, in kilometers.
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Forward azimuth from the first point to the second, normalized to
/// [0, 360) degrees clockwise from north.
pub fn calculate_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lat2 = lat2.to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
    let bearing = y.atan2(x).to_degrees();

    (bearing + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resort_loop() -> Route {
        Route::new(vec![
            Waypoint {
                lat: 56.6159,
                lng: -3.8622,
            },
            Waypoint {
                lat: 56.6169,
                lng: -3.8622,
            },
            Waypoint {
                lat: 56.6169,
                lng: -3.8602,
            },
        ])
        .expect("Failed to build route")
    }

    #[test]
    fn test_route_needs_two_waypoints() {
        let result = Route::new(vec![Waypoint {
            lat: 56.0,
            lng: -3.0,
        }]);
        assert!(matches!(result, Err(SimError::EmptyRoute)));
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let d = haversine_distance(56.0, -3.0, 57.0, -3.0);
        // One degree of latitude is roughly 111 km everywhere
        assert!((d - 111.19).abs() < 0.5, "got {}", d);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let north = calculate_bearing(56.0, -3.0, 57.0, -3.0);
        assert!(north.abs() < 1e-6, "got {}", north);

        let east = calculate_bearing(0.0, 0.0, 0.0, 1.0);
        assert!((east - 90.0).abs() < 1e-6, "got {}", east);

        let south = calculate_bearing(57.0, -3.0, 56.0, -3.0);
        assert!((south - 180.0).abs() < 1e-6, "got {}", south);
    }

    #[test]
    fn test_bearing_is_normalized() {
        let west = calculate_bearing(0.0, 0.0, 0.0, -1.0);
        assert!((west - 270.0).abs() < 1e-6, "got {}", west);
        assert!((0.0..360.0).contains(&west));
    }

    #[test]
    fn test_locate_at_route_start() {
        let route = resort_loop();
        let (position, bearing) = route.locate(0.0);

        assert!((position.lat - 56.6159).abs() < 1e-9);
        assert!((position.lng - -3.8622).abs() < 1e-9);
        // First leg runs due north
        assert!(bearing.abs() < 1e-6, "got {}", bearing);
    }

    #[test]
    fn test_locate_interpolates_along_a_leg() {
        let route = resort_loop();
        let first_leg = haversine_distance(56.6159, -3.8622, 56.6169, -3.8622);
        let (position, _) = route.locate(first_leg / 2.0);

        assert!((position.lat - 56.6164).abs() < 1e-4, "got {}", position.lat);
        assert!((position.lng - -3.8622).abs() < 1e-9);
    }

    #[test]
    fn test_locate_wraps_past_the_loop_end() {
        let route = resort_loop();
        let (start, _) = route.locate(0.0);
        let (wrapped, _) = route.locate(route.total_km());

        assert!((start.lat - wrapped.lat).abs() < 1e-9);
        assert!((start.lng - wrapped.lng).abs() < 1e-9);
    }
}

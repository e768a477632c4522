//! Geographic coordinates and great-circle distance.

use std::fmt;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A WGS84 coordinate in decimal degrees.
#[derive(Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Create a coordinate. No range checking is done; any finite pair is accepted.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Returns true if both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Great-circle distance to `other` in kilometres.
    pub fn distance_km(&self, other: &LatLng) -> f64 {
        distance_km(*self, *other)
    }
}

impl fmt::Debug for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLng({}, {})", self.lat, self.lng)
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

/// Haversine distance between two coordinates in kilometres.
///
/// # Examples
///
/// ```
/// use transit_server::domain::{LatLng, distance_km};
///
/// let p = LatLng::new(40.7505, -73.9934);
/// assert_eq!(distance_km(p, p), 0.0);
/// ```
pub fn distance_km(a: LatLng, b: LatLng) -> f64 {
    distance_km_raw(a.lat, a.lng, b.lat, b.lng)
}

/// Haversine distance taking bare degrees.
pub fn distance_km_raw(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for near-antipodal points.
    let c = 2.0 * h.sqrt().min(1.0).asin();

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        let p = LatLng::new(40.7505, -73.9934);
        assert_eq!(distance_km(p, p), 0.0);
    }

    #[test]
    fn known_distance_new_york_to_los_angeles() {
        let nyc = LatLng::new(40.7128, -74.0060);
        let la = LatLng::new(34.0522, -118.2437);

        let d = distance_km(nyc, la);
        assert!((d - 3936.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn sample_stops_are_within_a_few_km() {
        let main_street = LatLng::new(40.7505, -73.9934);
        let airport = LatLng::new(40.7614, -73.9776);

        let d = main_street.distance_km(&airport);
        assert!(d > 1.5 && d < 2.0, "got {d}");
    }

    #[test]
    fn one_thousandth_degree_latitude_is_about_111_metres() {
        let a = LatLng::new(40.0, -73.0);
        let b = LatLng::new(40.001, -73.0);

        let d = distance_km(a, b);
        assert!((d - 0.1112).abs() < 0.001, "got {d}");
    }

    #[test]
    fn antipodal_points_are_half_circumference() {
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(0.0, 180.0);

        let d = distance_km(a, b);
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn non_finite_detection() {
        assert!(LatLng::new(1.0, 2.0).is_finite());
        assert!(!LatLng::new(f64::NAN, 2.0).is_finite());
        assert!(!LatLng::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn debug_and_display() {
        let p = LatLng::new(40.7505, -73.9934);
        assert_eq!(format!("{:?}", p), "LatLng(40.7505, -73.9934)");
        assert_eq!(format!("{}", p), "40.75050,-73.99340");
    }
}

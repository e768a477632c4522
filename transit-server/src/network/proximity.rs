//! Deciding whether a point is "at" a stop.

use crate::domain::{LatLng, Stop, distance_km};

/// Returns true if `point` is strictly closer than `threshold_km` to `stop`.
pub fn is_near(point: LatLng, stop: &Stop, threshold_km: f64) -> bool {
    distance_km(point, stop.location) < threshold_km
}

/// A proximity test with a fixed radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityMatcher {
    radius_km: f64,
}

impl ProximityMatcher {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Is `point` within the radius of `stop`?
    pub fn is_near(&self, point: LatLng, stop: &Stop) -> bool {
        is_near(point, stop, self.radius_km)
    }

    /// Are two stops (usually from different routes) the same physical stop?
    pub fn same_place(&self, a: &Stop, b: &Stop) -> bool {
        is_near(a.location, b, self.radius_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_at(lat: f64, lng: f64) -> Stop {
        Stop::new("Test", LatLng::new(lat, lng), 1)
    }

    #[test]
    fn point_on_stop_is_near() {
        let stop = stop_at(40.7505, -73.9934);
        assert!(is_near(LatLng::new(40.7505, -73.9934), &stop, 0.5));
    }

    #[test]
    fn threshold_is_strict() {
        let stop = stop_at(40.7505, -73.9934);
        // A zero radius never matches, not even the stop itself.
        assert!(!is_near(stop.location, &stop, 0.0));
    }

    #[test]
    fn rider_radius() {
        let matcher = ProximityMatcher::new(0.5);
        let stop = stop_at(40.0, -73.0);

        // ~0.33 km north
        assert!(matcher.is_near(LatLng::new(40.003, -73.0), &stop));
        // ~0.56 km north
        assert!(!matcher.is_near(LatLng::new(40.005, -73.0), &stop));
    }

    #[test]
    fn transfer_radius() {
        let matcher = ProximityMatcher::new(0.1);
        let a = stop_at(40.0, -73.0);
        // ~0.067 km apart
        let b = stop_at(40.0006, -73.0);
        // ~0.22 km apart
        let c = stop_at(40.002, -73.0);

        assert!(matcher.same_place(&a, &b));
        assert!(matcher.same_place(&b, &a));
        assert!(!matcher.same_place(&a, &c));
        assert_eq!(matcher.radius_km(), 0.1);
    }
}

//! Search configuration for the route planner.

use crate::network::ProximityMatcher;

/// Policy parameters for route matching.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// A rider is "at" a stop when closer than this (km).
    pub rider_radius_km: f64,

    /// Stops on different routes are the same place when closer than this (km).
    pub transfer_radius_km: f64,

    /// Estimated travel time per stop hop on a direct route (minutes).
    pub minutes_per_stop: u32,

    /// Fixed estimate for a two-bus journey (minutes).
    pub transfer_duration_minutes: u32,

    /// Fixed estimate of the wait at the transfer stop (minutes).
    pub transfer_wait_minutes: u32,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        rider_radius_km: f64,
        transfer_radius_km: f64,
        minutes_per_stop: u32,
        transfer_duration_minutes: u32,
        transfer_wait_minutes: u32,
    ) -> Self {
        Self {
            rider_radius_km,
            transfer_radius_km,
            minutes_per_stop,
            transfer_duration_minutes,
            transfer_wait_minutes,
        }
    }

    /// Matcher for origin and destination against stops.
    pub fn rider_matcher(&self) -> ProximityMatcher {
        ProximityMatcher::new(self.rider_radius_km)
    }

    /// Matcher for stops shared between routes.
    pub fn transfer_matcher(&self) -> ProximityMatcher {
        ProximityMatcher::new(self.transfer_radius_km)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            rider_radius_km: 0.5,
            transfer_radius_km: 0.1,
            minutes_per_stop: 8,
            transfer_duration_minutes: 18,
            transfer_wait_minutes: 4,
        }
    }
}

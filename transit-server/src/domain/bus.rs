//! Buses and their live positions.

use chrono::{DateTime, TimeZone, Utc};

use super::geo::LatLng;
use super::route::RouteId;

/// A vehicle in the fleet.
#[derive(Debug, Clone, PartialEq)]
pub struct Bus {
    pub id: String,
    /// Public line number painted on the bus (e.g. "42A").
    pub bus_number: String,
    pub route_id: RouteId,
    /// Last reported position, if the bus has ever reported one.
    pub position: Option<LatLng>,
    pub last_updated: Option<DateTime<Utc>>,
    pub active: bool,
    pub capacity: u32,
    pub current_passengers: u32,
}

impl Bus {
    /// Record a new position, returning the updated bus.
    pub fn moved_to(&self, location: LatLng, at: DateTime<Utc>) -> Self {
        Self {
            position: Some(location),
            last_updated: Some(at),
            ..self.clone()
        }
    }
}

/// A single report from the live-position feed.
#[derive(Debug, Clone, PartialEq)]
pub struct BusPosition {
    pub bus_id: String,
    pub bus_number: String,
    pub location: LatLng,
    /// Milliseconds since the Unix epoch.
    pub timestamp_millis: i64,
    /// Speed in km/h.
    pub speed: Option<f64>,
    /// Heading in degrees clockwise from north.
    pub heading: Option<f64>,
    pub route_id: RouteId,
}

impl BusPosition {
    /// Build a position report for `bus` at `location`.
    pub fn for_bus(bus: &Bus, location: LatLng, at: DateTime<Utc>) -> Self {
        Self {
            bus_id: bus.id.clone(),
            bus_number: bus.bus_number.clone(),
            location,
            timestamp_millis: at.timestamp_millis(),
            speed: None,
            heading: None,
            route_id: bus.route_id.clone(),
        }
    }

    /// Timestamp as a `DateTime`, if it is in range.
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.timestamp_millis).single()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bus() -> Bus {
        Bus {
            id: "bus-15-1".into(),
            bus_number: "15".into(),
            route_id: RouteId::new("route-15").unwrap(),
            position: None,
            last_updated: None,
            active: true,
            capacity: 45,
            current_passengers: 32,
        }
    }

    #[test]
    fn moved_to_updates_position_and_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let moved = sample_bus().moved_to(LatLng::new(40.75, -73.99), at);

        assert_eq!(moved.position, Some(LatLng::new(40.75, -73.99)));
        assert_eq!(moved.last_updated, Some(at));
        assert_eq!(moved.current_passengers, 32);
    }

    #[test]
    fn position_timestamp_roundtrip() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let pos = BusPosition::for_bus(&sample_bus(), LatLng::new(40.75, -73.99), at);

        assert_eq!(pos.bus_id, "bus-15-1");
        assert_eq!(pos.route_id.as_str(), "route-15");
        assert_eq!(pos.timestamp(), Some(at));
    }
}

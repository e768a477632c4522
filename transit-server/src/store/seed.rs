//! Built-in sample network.
//!
//! Two routes between Main Street Station and Airport Terminal, one via
//! City Center and one via Central Station, plus three buses.

use chrono::{DateTime, Utc};

use crate::domain::{Bus, BusStop, DomainError, LatLng, Route, RouteId, ScheduleEntry, Stop};

use super::error::StoreError;
use super::provider::RouteProvider;

const MAIN_STREET: LatLng = LatLng::new(40.7505, -73.9934);
const CITY_CENTER: LatLng = LatLng::new(40.7589, -73.9851);
const CENTRAL_STATION: LatLng = LatLng::new(40.7549, -73.9840);
const AIRPORT: LatLng = LatLng::new(40.7614, -73.9776);

/// Provider serving the built-in sample network.
#[derive(Debug, Clone)]
pub struct SeedProvider {
    loaded_at: DateTime<Utc>,
}

impl SeedProvider {
    pub fn new() -> Self {
        Self {
            loaded_at: Utc::now(),
        }
    }
}

impl Default for SeedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteProvider for SeedProvider {
    fn all_routes(&self) -> Result<Vec<Route>, StoreError> {
        Ok(sample_routes()?)
    }

    fn all_bus_stops(&self) -> Result<Vec<BusStop>, StoreError> {
        Ok(sample_bus_stops()?)
    }

    fn all_buses(&self) -> Result<Vec<Bus>, StoreError> {
        Ok(sample_buses(self.loaded_at)?)
    }
}

fn schedule(entries: &[(&str, &str)]) -> Vec<ScheduleEntry> {
    entries
        .iter()
        .map(|(time, stop)| ScheduleEntry {
            time: (*time).to_string(),
            stop: (*stop).to_string(),
        })
        .collect()
}

/// The sample routes, `route-42a` then `route-15`.
pub fn sample_routes() -> Result<Vec<Route>, DomainError> {
    let route_42a = Route::new(
        RouteId::new("route-42a")?,
        "42A",
        vec![
            Stop::new("Main Street Station", MAIN_STREET, 1),
            Stop::new("City Center", CITY_CENTER, 2),
            Stop::new("Airport Terminal", AIRPORT, 3),
        ],
        true,
    )?
    .with_schedule(schedule(&[
        ("06:00", "Main Street Station"),
        ("06:15", "City Center"),
        ("06:30", "Airport Terminal"),
    ]));

    let route_15 = Route::new(
        RouteId::new("route-15")?,
        "15",
        vec![
            Stop::new("Main Street Station", MAIN_STREET, 1),
            Stop::new("Central Station", CENTRAL_STATION, 2),
            Stop::new("Airport Terminal", AIRPORT, 3),
        ],
        true,
    )?
    .with_schedule(schedule(&[
        ("06:05", "Main Street Station"),
        ("06:25", "Central Station"),
        ("06:45", "Airport Terminal"),
    ]));

    Ok(vec![route_42a, route_15])
}

/// The sample stop directory.
pub fn sample_bus_stops() -> Result<Vec<BusStop>, DomainError> {
    let r42a = RouteId::new("route-42a")?;
    let r15 = RouteId::new("route-15")?;

    Ok(vec![
        BusStop {
            id: "stop-main-street".into(),
            name: "Main Street Station".into(),
            location: MAIN_STREET,
            routes: vec![r42a.clone(), r15.clone()],
        },
        BusStop {
            id: "stop-city-center".into(),
            name: "City Center".into(),
            location: CITY_CENTER,
            routes: vec![r42a.clone()],
        },
        BusStop {
            id: "stop-central-station".into(),
            name: "Central Station".into(),
            location: CENTRAL_STATION,
            routes: vec![r15.clone()],
        },
        BusStop {
            id: "stop-airport".into(),
            name: "Airport Terminal".into(),
            location: AIRPORT,
            routes: vec![r42a, r15],
        },
    ])
}

/// The sample fleet, each bus parked at a stop on its route.
pub fn sample_buses(loaded_at: DateTime<Utc>) -> Result<Vec<Bus>, DomainError> {
    let bus = |id: &str, number: &str, route: &str, at: LatLng, capacity, passengers| {
        Ok::<_, DomainError>(Bus {
            id: id.into(),
            bus_number: number.into(),
            route_id: RouteId::new(route)?,
            position: Some(at),
            last_updated: Some(loaded_at),
            active: true,
            capacity,
            current_passengers: passengers,
        })
    };

    Ok(vec![
        bus("bus-42a-1", "42A", "route-42a", CITY_CENTER, 50, 25)?,
        bus("bus-42a-2", "42A", "route-42a", AIRPORT, 50, 18)?,
        bus("bus-15-1", "15", "route-15", MAIN_STREET, 45, 32)?,
    ])
}

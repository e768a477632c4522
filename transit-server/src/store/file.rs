//! JSON seed file provider.
//!
//! The file uses the same field names as the public API:
//!
//! ```json
//! {
//!   "routes": [{"id": "route-15", "routeName": "15", "isActive": true,
//!               "stops": [{"name": "Main Street Station", "lat": 40.7505, "lng": -73.9934, "order": 1}],
//!               "schedule": [{"time": "06:05", "stop": "Main Street Station"}]}],
//!   "busStops": [{"id": "stop-main-street", "name": "Main Street Station",
//!                 "latitude": 40.7505, "longitude": -73.9934, "routes": ["route-15"]}],
//!   "buses": [{"id": "bus-15-1", "busNumber": "15", "route": "route-15"}]
//! }
//! ```
//!
//! Stop `order` values must be non-negative integers; anything else is
//! rejected as a JSON error when the file is opened.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::domain::{Bus, BusStop, DomainError, LatLng, Route, RouteId, ScheduleEntry, Stop};

use super::error::StoreError;
use super::provider::RouteProvider;

/// Top-level seed file document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedFile {
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
    #[serde(default)]
    pub bus_stops: Vec<BusStopRecord>,
    #[serde(default)]
    pub buses: Vec<BusRecord>,
}

/// A route as stored in the seed file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    pub id: String,
    pub route_name: String,
    pub stops: Vec<StopRecord>,
    #[serde(default)]
    pub schedule: Vec<ScheduleRecord>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StopRecord {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub order: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRecord {
    pub time: String,
    pub stop: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BusStopRecord {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub routes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRecord {
    pub id: String,
    pub bus_number: String,
    pub route: String,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    #[serde(default)]
    pub current_passengers: u32,
}

fn default_true() -> bool {
    true
}

fn default_capacity() -> u32 {
    50
}

impl SeedFile {
    /// Parse a seed document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Convert route records into validated routes.
    pub fn to_routes(&self) -> Result<Vec<Route>, DomainError> {
        self.routes.iter().map(RouteRecord::to_route).collect()
    }

    /// Convert stop records into the stop directory.
    pub fn to_bus_stops(&self) -> Result<Vec<BusStop>, DomainError> {
        self.bus_stops
            .iter()
            .map(|s| {
                let routes = s
                    .routes
                    .iter()
                    .map(RouteId::new)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(BusStop {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    location: LatLng::new(s.latitude, s.longitude),
                    routes,
                })
            })
            .collect()
    }

    /// Convert bus records into the fleet.
    pub fn to_buses(&self) -> Result<Vec<Bus>, DomainError> {
        let now = Utc::now();
        self.buses
            .iter()
            .map(|b| {
                let position = match (b.current_lat, b.current_lng) {
                    (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
                    _ => None,
                };
                Ok(Bus {
                    id: b.id.clone(),
                    bus_number: b.bus_number.clone(),
                    route_id: RouteId::new(b.route.as_str())?,
                    position,
                    last_updated: position.map(|_| now),
                    active: b.is_active,
                    capacity: b.capacity,
                    current_passengers: b.current_passengers,
                })
            })
            .collect()
    }
}

impl RouteRecord {
    fn to_route(&self) -> Result<Route, DomainError> {
        let stops = self
            .stops
            .iter()
            .map(|s| Stop::new(s.name.clone(), LatLng::new(s.lat, s.lng), s.order))
            .collect();
        let schedule = self
            .schedule
            .iter()
            .map(|e| ScheduleEntry {
                time: e.time.clone(),
                stop: e.stop.clone(),
            })
            .collect();

        Ok(Route::new(
            RouteId::new(self.id.as_str())?,
            self.route_name.clone(),
            stops,
            self.is_active,
        )?
        .with_schedule(schedule))
    }
}

/// Provider backed by a JSON seed file.
///
/// The file is read and validated once, when the provider is opened.
#[derive(Debug, Clone)]
pub struct FileProvider {
    path: PathBuf,
    seed: SeedFile,
}

impl FileProvider {
    /// Read and parse the seed file at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let json = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        let seed = SeedFile::from_json(&json).map_err(|e| StoreError::Json {
            path: path.clone(),
            message: e.to_string(),
        })?;

        info!(
            path = %path.display(),
            routes = seed.routes.len(),
            bus_stops = seed.bus_stops.len(),
            buses = seed.buses.len(),
            "loaded seed file"
        );

        Ok(Self { path, seed })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RouteProvider for FileProvider {
    fn all_routes(&self) -> Result<Vec<Route>, StoreError> {
        Ok(self.seed.to_routes()?)
    }

    fn all_bus_stops(&self) -> Result<Vec<BusStop>, StoreError> {
        Ok(self.seed.to_bus_stops()?)
    }

    fn all_buses(&self) -> Result<Vec<Bus>, StoreError> {
        Ok(self.seed.to_buses()?)
    }
}

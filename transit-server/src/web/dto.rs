//! Data transfer objects for web requests and responses.
//!
//! Field names follow the map client's camelCase JSON contract.

use serde::{Deserialize, Serialize};

use crate::domain::{Bus, BusPosition, BusStop, LatLng, Place, Route, Suggestion};
use crate::network::StopMatch;
use crate::planner::SearchQuery;

/// A named place in a search request.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceInput {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceInput {
    pub fn to_place(&self) -> Place {
        Place::new(
            self.name.clone(),
            LatLng::new(self.latitude, self.longitude),
        )
    }
}

/// Request to search for route suggestions.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    pub from: PlaceInput,
    pub to: PlaceInput,
}

impl SearchRequest {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new(self.from.to_place(), self.to.to_place())
    }
}

/// A route suggestion.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    pub id: String,

    /// "direct", "transfer" or "alternative"
    pub route_type: String,

    pub bus_number: String,

    /// Human-readable duration, e.g. "16 min"
    pub duration: String,

    /// Duration in minutes
    pub estimated_time: u32,

    /// Route description, e.g. "A → B → C"
    pub route: String,

    pub next_arrival: String,

    pub is_live_tracking: bool,

    /// Wait at the transfer stop, transfers only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_time: Option<String>,
}

impl SuggestionResult {
    pub fn from_suggestion(suggestion: &Suggestion) -> Self {
        Self {
            id: suggestion.id.clone(),
            route_type: suggestion.kind.as_str().to_string(),
            bus_number: suggestion.bus_label.clone(),
            duration: format_minutes(suggestion.estimated_duration_minutes),
            estimated_time: suggestion.estimated_duration_minutes,
            route: suggestion.description.clone(),
            next_arrival: suggestion.next_arrival_estimate.clone(),
            is_live_tracking: suggestion.has_live_tracking,
            transfer_time: suggestion.transfer_wait_minutes.map(format_minutes),
        }
    }
}

/// Response to a search.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub suggestions: Vec<SuggestionResult>,
}

/// A stop on a route.
#[derive(Debug, Serialize)]
pub struct RouteStopResult {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub order: u32,
}

/// A timetable entry.
#[derive(Debug, Serialize)]
pub struct ScheduleResult {
    pub time: String,
    pub stop: String,
}

/// A route with its stops and timetable.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResult {
    pub id: String,
    pub route_name: String,
    pub stops: Vec<RouteStopResult>,
    pub schedule: Vec<ScheduleResult>,
    pub is_active: bool,
}

impl RouteResult {
    pub fn from_route(route: &Route) -> Self {
        Self {
            id: route.id().to_string(),
            route_name: route.name().to_string(),
            stops: route
                .stops()
                .iter()
                .map(|s| RouteStopResult {
                    name: s.name.clone(),
                    lat: s.location.lat,
                    lng: s.location.lng,
                    order: s.order,
                })
                .collect(),
            schedule: route
                .schedule()
                .iter()
                .map(|e| ScheduleResult {
                    time: e.time.clone(),
                    stop: e.stop.clone(),
                })
                .collect(),
            is_active: route.is_active(),
        }
    }
}

/// A stop in the stop directory.
#[derive(Debug, Serialize)]
pub struct BusStopResult {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub routes: Vec<String>,
}

impl BusStopResult {
    pub fn from_bus_stop(stop: &BusStop) -> Self {
        Self {
            id: stop.id.clone(),
            name: stop.name.clone(),
            latitude: stop.location.lat,
            longitude: stop.location.lng,
            routes: stop.routes.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// A bus and its last known position.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusResult {
    pub id: String,
    pub bus_number: String,
    pub route: String,
    pub current_lat: Option<f64>,
    pub current_lng: Option<f64>,

    /// RFC 3339 timestamp of the last position report
    pub last_updated: Option<String>,

    pub is_active: bool,
    pub capacity: u32,
    pub current_passengers: u32,
}

impl BusResult {
    pub fn from_bus(bus: &Bus) -> Self {
        Self {
            id: bus.id.clone(),
            bus_number: bus.bus_number.clone(),
            route: bus.route_id.to_string(),
            current_lat: bus.position.map(|p| p.lat),
            current_lng: bus.position.map(|p| p.lng),
            last_updated: bus.last_updated.map(|t| t.to_rfc3339()),
            is_active: bus.active,
            capacity: bus.capacity,
            current_passengers: bus.current_passengers,
        }
    }
}

/// Position report from a bus.
///
/// Coordinates are optional here so that a missing one is reported as a
/// bad request rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationUpdateRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub speed: Option<f64>,
    pub heading: Option<f64>,
}

impl LocationUpdateRequest {
    /// The reported location, if both coordinates are present and finite.
    pub fn location(&self) -> Option<LatLng> {
        let location = LatLng::new(self.latitude?, self.longitude?);
        location.is_finite().then_some(location)
    }
}

/// A live position, as sent to map clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusPositionResult {
    pub bus_id: String,
    pub bus_number: String,
    pub lat: f64,
    pub lng: f64,

    /// Milliseconds since the Unix epoch
    pub timestamp: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,

    pub route: String,
}

impl BusPositionResult {
    pub fn from_position(position: &BusPosition) -> Self {
        Self {
            bus_id: position.bus_id.clone(),
            bus_number: position.bus_number.clone(),
            lat: position.location.lat,
            lng: position.location.lng,
            timestamp: position.timestamp_millis,
            speed: position.speed,
            heading: position.heading,
            route: position.route_id.to_string(),
        }
    }
}

/// Request to search stops by name.
#[derive(Debug, Deserialize)]
pub struct StopSearchRequest {
    /// Search query
    pub q: String,

    /// Maximum results (default 10)
    pub limit: Option<usize>,
}

/// A stop in search results.
#[derive(Debug, Serialize)]
pub struct StopSearchResult {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<StopMatch> for StopSearchResult {
    fn from(m: StopMatch) -> Self {
        Self {
            id: m.id,
            name: m.name,
            latitude: m.location.lat,
            longitude: m.location.lng,
        }
    }
}

/// Response from stop search.
#[derive(Debug, Serialize)]
pub struct StopSearchResponse {
    pub stops: Vec<StopSearchResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Format a whole number of minutes, e.g. "16 min".
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}

//! Domain types for the bus route planner.
//!
//! This module contains the core domain model types that represent
//! validated transit reference data. Routes enforce their invariants at
//! construction time, so code that receives a `Route` can trust it.

mod bus;
mod error;
mod geo;
mod place;
mod route;
mod suggestion;

pub use bus::{Bus, BusPosition};
pub use error::DomainError;
pub use geo::{EARTH_RADIUS_KM, LatLng, distance_km, distance_km_raw};
pub use place::Place;
pub use route::{BusStop, Route, RouteId, ScheduleEntry, Stop};
pub use suggestion::{Suggestion, SuggestionKind};

//! Routes and the stops they serve.

use std::fmt;

use super::error::DomainError;
use super::geo::LatLng;

/// Identifier of a route (e.g. `route-42a`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(String);

impl RouteId {
    /// Create a route ID. Empty IDs are rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyRouteId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteId({})", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stop as listed by one route.
///
/// The same physical stop may appear in several routes as independent
/// values; proximity is the only link between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub location: LatLng,
    /// Route-local sequence index along the route's direction of travel.
    pub order: u32,
}

impl Stop {
    pub fn new(name: impl Into<String>, location: LatLng, order: u32) -> Self {
        Self {
            name: name.into(),
            location,
            order,
        }
    }
}

/// A timetabled departure from a stop, kept as reference data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Departure time as "HH:MM".
    pub time: String,
    /// Name of the stop.
    pub stop: String,
}

/// A bus route: an ordered sequence of stops.
///
/// A `Route` always has at least one stop, and stop `order` values are
/// strictly increasing along the sequence. Both are checked by [`Route::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    id: RouteId,
    name: String,
    stops: Vec<Stop>,
    schedule: Vec<ScheduleEntry>,
    active: bool,
}

impl Route {
    /// Create a validated route.
    pub fn new(
        id: RouteId,
        name: impl Into<String>,
        stops: Vec<Stop>,
        active: bool,
    ) -> Result<Self, DomainError> {
        if stops.is_empty() {
            return Err(DomainError::EmptyRoute(id));
        }

        for pair in stops.windows(2) {
            if pair[1].order <= pair[0].order {
                return Err(DomainError::StopOrder {
                    route: id,
                    stop: pair[1].name.clone(),
                });
            }
        }

        for stop in &stops {
            if !stop.location.is_finite() {
                return Err(DomainError::InvalidLocation {
                    route: id,
                    stop: stop.name.clone(),
                });
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            stops,
            schedule: Vec::new(),
            active,
        })
    }

    /// Attach a timetable to the route.
    pub fn with_schedule(mut self, schedule: Vec<ScheduleEntry>) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn id(&self) -> &RouteId {
        &self.id
    }

    /// Display name shown to riders (e.g. "42A").
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// All stop names joined with arrows, first to last.
    pub fn path_summary(&self) -> String {
        self.stops
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(" → ")
    }
}

/// An entry in the stop directory.
#[derive(Debug, Clone, PartialEq)]
pub struct BusStop {
    pub id: String,
    pub name: String,
    pub location: LatLng,
    /// Routes that call at this stop.
    pub routes: Vec<RouteId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rid(s: &str) -> RouteId {
        RouteId::new(s).unwrap()
    }

    fn stop(name: &str, order: u32) -> Stop {
        Stop::new(name, LatLng::new(40.0, -73.0), order)
    }

    #[test]
    fn route_id_rejects_blank() {
        assert!(RouteId::new("").is_err());
        assert!(RouteId::new("   ").is_err());
        assert_eq!(rid("route-15").as_str(), "route-15");
    }

    #[test]
    fn route_id_debug_and_display() {
        let id = rid("route-42a");
        assert_eq!(format!("{}", id), "route-42a");
        assert_eq!(format!("{:?}", id), "RouteId(route-42a)");
    }

    #[test]
    fn valid_route() {
        let route = Route::new(
            rid("r1"),
            "42A",
            vec![stop("A", 1), stop("B", 2), stop("C", 5)],
            true,
        )
        .unwrap();

        assert_eq!(route.name(), "42A");
        assert_eq!(route.stops().len(), 3);
        assert!(route.is_active());
        assert!(route.schedule().is_empty());
    }

    #[test]
    fn empty_route_rejected() {
        let err = Route::new(rid("r1"), "42A", vec![], true).unwrap_err();
        assert!(matches!(err, DomainError::EmptyRoute(_)));
    }

    #[test]
    fn repeated_order_rejected() {
        let err = Route::new(rid("r1"), "42A", vec![stop("A", 1), stop("B", 1)], true)
            .unwrap_err();
        match err {
            DomainError::StopOrder { stop, .. } => assert_eq!(stop, "B"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn decreasing_order_rejected() {
        let result = Route::new(rid("r1"), "42A", vec![stop("A", 3), stop("B", 2)], true);
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_location_rejected() {
        let bad = Stop::new("Nowhere", LatLng::new(f64::NAN, 0.0), 1);
        let err = Route::new(rid("r1"), "42A", vec![bad], true).unwrap_err();
        assert!(matches!(err, DomainError::InvalidLocation { .. }));
    }

    #[test]
    fn path_summary_joins_all_stops() {
        let route = Route::new(
            rid("r1"),
            "42A",
            vec![stop("Main Street", 1), stop("City Center", 2), stop("Airport", 3)],
            true,
        )
        .unwrap();

        assert_eq!(route.path_summary(), "Main Street → City Center → Airport");
    }

    #[test]
    fn schedule_is_attached() {
        let route = Route::new(rid("r1"), "42A", vec![stop("A", 1)], false)
            .unwrap()
            .with_schedule(vec![ScheduleEntry {
                time: "06:00".into(),
                stop: "A".into(),
            }]);

        assert_eq!(route.schedule().len(), 1);
        assert!(!route.is_active());
    }
}

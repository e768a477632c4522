//! In-memory route graph.

use std::collections::HashSet;

use crate::domain::{DomainError, LatLng, Route, RouteId, Stop};

use super::proximity::ProximityMatcher;

/// All known routes, in load order.
///
/// Built once and never mutated. Inactive routes are kept so they can be
/// listed, but every query skips them.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    routes: Vec<Route>,
}

impl RouteGraph {
    /// Build a graph, rejecting duplicate route IDs.
    pub fn new(routes: Vec<Route>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for route in &routes {
            if !seen.insert(route.id()) {
                return Err(DomainError::DuplicateRoute(route.id().clone()));
            }
        }
        Ok(Self { routes })
    }

    /// An empty graph.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every route, active or not.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Active routes in load order.
    pub fn active_routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(|r| r.is_active())
    }

    pub fn has_active_routes(&self) -> bool {
        self.routes.iter().any(|r| r.is_active())
    }

    pub fn get(&self, id: &RouteId) -> Option<&Route> {
        self.routes.iter().find(|r| r.id() == id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The stop of `route` that `point` is at, if any.
    ///
    /// When several stops are within the radius, the one furthest along the
    /// route wins.
    pub fn matched_stop<'a>(
        route: &'a Route,
        point: LatLng,
        matcher: &ProximityMatcher,
    ) -> Option<&'a Stop> {
        route.stops().iter().rev().find(|s| matcher.is_near(point, s))
    }

    /// Active routes with a stop near `point`, paired with that stop.
    pub fn find_routes_serving(
        &self,
        point: LatLng,
        matcher: &ProximityMatcher,
    ) -> Vec<(&Route, &Stop)> {
        self.active_routes()
            .filter_map(|route| Self::matched_stop(route, point, matcher).map(|s| (route, s)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rid(s: &str) -> RouteId {
        RouteId::new(s).unwrap()
    }

    fn route(id: &str, active: bool, stops: &[(&str, f64, f64)]) -> Route {
        let stops = stops
            .iter()
            .enumerate()
            .map(|(i, (name, lat, lng))| Stop::new(*name, LatLng::new(*lat, *lng), i as u32 + 1))
            .collect();
        Route::new(rid(id), id.to_uppercase(), stops, active).unwrap()
    }

    fn graph() -> RouteGraph {
        RouteGraph::new(vec![
            route("a", true, &[("A1", 40.0, -73.0), ("A2", 40.01, -73.0)]),
            route("b", false, &[("B1", 40.0, -73.0)]),
            route("c", true, &[("C1", 40.01, -73.0), ("C2", 40.02, -73.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn duplicate_ids_rejected() {
        let err = RouteGraph::new(vec![
            route("a", true, &[("A1", 40.0, -73.0)]),
            route("a", true, &[("A2", 41.0, -73.0)]),
        ])
        .unwrap_err();
        assert!(matches!(err, DomainError::DuplicateRoute(_)));
    }

    #[test]
    fn active_routes_skip_inactive() {
        let g = graph();
        let ids: Vec<_> = g.active_routes().map(|r| r.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(g.len(), 3);
        assert!(g.has_active_routes());
    }

    #[test]
    fn graph_with_only_inactive_routes() {
        let g = RouteGraph::new(vec![route("b", false, &[("B1", 40.0, -73.0)])]).unwrap();
        assert!(!g.has_active_routes());
        assert!(!g.is_empty());
        assert!(RouteGraph::empty().is_empty());
    }

    #[test]
    fn find_routes_serving_point() {
        let g = graph();
        let matcher = ProximityMatcher::new(0.5);

        let at_a1 = g.find_routes_serving(LatLng::new(40.0, -73.0), &matcher);
        assert_eq!(at_a1.len(), 1);
        assert_eq!(at_a1[0].0.id().as_str(), "a");
        assert_eq!(at_a1[0].1.name, "A1");

        let at_a2 = g.find_routes_serving(LatLng::new(40.01, -73.0), &matcher);
        let names: Vec<_> = at_a2.iter().map(|(_, s)| s.name.as_str()).collect();
        assert_eq!(names, vec!["A2", "C1"]);

        assert!(
            g.find_routes_serving(LatLng::new(45.0, -73.0), &matcher)
                .is_empty()
        );
    }

    #[test]
    fn matched_stop_prefers_later_stop() {
        let r = route("loop", true, &[("Start", 40.0, -73.0), ("End", 40.001, -73.0)]);
        let matcher = ProximityMatcher::new(0.5);

        let stop = RouteGraph::matched_stop(&r, LatLng::new(40.0, -73.0), &matcher).unwrap();
        assert_eq!(stop.name, "End");
        assert_eq!(stop.order, 2);
    }

    #[test]
    fn get_by_id() {
        let g = graph();
        assert!(g.get(&rid("c")).is_some());
        assert!(g.get(&rid("z")).is_none());
    }
}

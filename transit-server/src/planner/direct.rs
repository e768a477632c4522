//! Direct route matching: one bus from origin to destination.

use tracing::trace;

use crate::domain::{Route, Suggestion, SuggestionKind};
use crate::network::{ProximityMatcher, RouteGraph};

use super::config::SearchConfig;
use super::search::SearchQuery;

/// Where a query's origin and destination fall on one route.
#[derive(Debug, Clone, Copy)]
pub struct DirectMatch<'a> {
    pub route: &'a Route,
    pub origin_order: u32,
    pub destination_order: u32,
}

impl DirectMatch<'_> {
    /// Number of stop hops between origin and destination.
    pub fn hops(&self) -> u32 {
        self.destination_order - self.origin_order
    }
}

/// Match a query against a single route.
///
/// Scans the stops once. If several stops are near the origin (or the
/// destination), the last one scanned wins. The route only matches when it
/// reaches the origin before the destination; a route running the other way
/// does not match even if it serves both points.
pub fn match_route<'a>(
    route: &'a Route,
    query: &SearchQuery,
    matcher: &ProximityMatcher,
) -> Option<DirectMatch<'a>> {
    let mut origin_order = None;
    let mut destination_order = None;

    for stop in route.stops() {
        if matcher.is_near(query.origin.location, stop) {
            origin_order = Some(stop.order);
        }
        if matcher.is_near(query.destination.location, stop) {
            destination_order = Some(stop.order);
        }
    }

    match (origin_order, destination_order) {
        (Some(origin_order), Some(destination_order)) if origin_order < destination_order => {
            Some(DirectMatch {
                route,
                origin_order,
                destination_order,
            })
        }
        _ => None,
    }
}

/// Find every active route that serves the trip directly.
///
/// One suggestion per matching route, in route load order.
pub fn find_direct(
    graph: &RouteGraph,
    query: &SearchQuery,
    config: &SearchConfig,
) -> Vec<Suggestion> {
    let matcher = config.rider_matcher();

    graph
        .active_routes()
        .filter_map(|route| {
            let found = match_route(route, query, &matcher);
            if found.is_none() {
                trace!(route = %route.id(), "no direct match");
            }
            found
        })
        .map(|m| direct_suggestion(&m, config))
        .collect()
}

fn direct_suggestion(m: &DirectMatch<'_>, config: &SearchConfig) -> Suggestion {
    Suggestion {
        id: format!("direct-{}", m.route.id()),
        kind: SuggestionKind::Direct,
        bus_label: m.route.name().to_string(),
        estimated_duration_minutes: m.hops().saturating_mul(config.minutes_per_stop),
        // The whole route, not just the part the rider travels.
        description: m.route.path_summary(),
        next_arrival_estimate: "3 min".to_string(),
        // Asserted, not checked against the live feed.
        has_live_tracking: true,
        transfer_wait_minutes: None,
    }
}

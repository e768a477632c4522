//! Transfer matching: two buses joined at a shared stop.

use tracing::debug;

use crate::domain::{Route, Stop, Suggestion, SuggestionKind};
use crate::network::{ProximityMatcher, RouteGraph};

use super::config::SearchConfig;
use super::search::SearchQuery;

/// Two routes and the stop where a rider can change between them.
#[derive(Debug, Clone, Copy)]
pub struct TransferPoint<'a> {
    pub first: &'a Route,
    pub second: &'a Route,
    /// The shared stop, as listed by `first`.
    pub stop: &'a Stop,
}

/// The first stop of `first` that lies within the matcher's radius of any
/// stop of `second`.
pub fn shared_stop<'a>(
    first: &'a Route,
    second: &Route,
    matcher: &ProximityMatcher,
) -> Option<&'a Stop> {
    first
        .stops()
        .iter()
        .find(|s1| second.stops().iter().any(|s2| matcher.same_place(s1, s2)))
}

/// The first pair of active routes, in load order, that share a stop.
///
/// Search stops at the first pair found.
pub fn first_transfer_point<'a>(
    graph: &'a RouteGraph,
    matcher: &ProximityMatcher,
) -> Option<TransferPoint<'a>> {
    let routes: Vec<&Route> = graph.active_routes().collect();

    for (i, &first) in routes.iter().enumerate() {
        for &second in &routes[i + 1..] {
            if let Some(stop) = shared_stop(first, second, matcher) {
                return Some(TransferPoint {
                    first,
                    second,
                    stop,
                });
            }
        }
    }

    None
}

/// Build the single transfer suggestion, if any two active routes connect.
///
/// Only meant to run when no direct route serves the query. The origin and
/// destination are used for the description only; route pairs are not
/// checked against them.
pub fn find_transfer(
    graph: &RouteGraph,
    query: &SearchQuery,
    config: &SearchConfig,
) -> Option<Suggestion> {
    let point = first_transfer_point(graph, &config.transfer_matcher())?;

    debug!(
        first = %point.first.id(),
        second = %point.second.id(),
        stop = %point.stop.name,
        "transfer point found"
    );

    Some(Suggestion {
        id: format!("transfer-{}-{}", point.first.id(), point.second.id()),
        kind: SuggestionKind::Transfer,
        bus_label: format!("{}, {}", point.first.name(), point.second.name()),
        estimated_duration_minutes: config.transfer_duration_minutes,
        description: format!(
            "{} → {} → {}",
            query.origin.name, point.stop.name, query.destination.name
        ),
        next_arrival_estimate: "5 min".to_string(),
        has_live_tracking: true,
        transfer_wait_minutes: Some(config.transfer_wait_minutes),
    })
}

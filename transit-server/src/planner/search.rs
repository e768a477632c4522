//! The search pipeline.
//!
//! A search runs three stages over one route graph snapshot:
//! direct matching, transfer matching (only when direct found nothing),
//! and the alternative stage. The stages' results are merged in that order.

use tracing::debug;

use crate::domain::{Place, Suggestion};
use crate::network::RouteGraph;

use super::config::SearchConfig;
use super::direct::find_direct;
use super::rank::{Matched, alternative_suggestion, merge};
use super::transfer::find_transfer;

/// Error from route search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// Invalid search query
    #[error("invalid search query: {0}")]
    InvalidQuery(String),
}

/// A rider's trip request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub origin: Place,
    pub destination: Place,
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new(origin: Place, destination: Place) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// Validate the query.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.origin.location.is_finite() {
            return Err(SearchError::InvalidQuery(
                "origin coordinates must be finite".to_string(),
            ));
        }

        if !self.destination.location.is_finite() {
            return Err(SearchError::InvalidQuery(
                "destination coordinates must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

/// Result of a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Suggestions in display order.
    pub suggestions: Vec<Suggestion>,

    /// Number of active routes examined.
    pub routes_considered: usize,
}

/// Route planner over a fixed route graph.
///
/// Searching is synchronous and never modifies the graph, so any number of
/// planners can share one graph.
pub struct Planner<'a> {
    graph: &'a RouteGraph,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RouteGraph, config: &'a SearchConfig) -> Self {
        Self { graph, config }
    }

    /// Search for route suggestions.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResult, SearchError> {
        query.validate()?;

        let matched = self.match_routes(query);
        debug!(
            origin = %query.origin.name,
            destination = %query.destination.name,
            stage = matched.label(),
            "routes matched"
        );

        let alternative = alternative_suggestion(self.graph, query);

        Ok(SearchResult {
            suggestions: merge(matched, alternative),
            routes_considered: self.graph.active_routes().count(),
        })
    }

    /// Run the matching stages: direct first, transfer only as a fallback.
    pub fn match_routes(&self, query: &SearchQuery) -> Matched {
        let direct = find_direct(self.graph, query, self.config);
        if !direct.is_empty() {
            return Matched::Direct(direct);
        }

        match find_transfer(self.graph, query, self.config) {
            Some(transfer) => Matched::Transfer(transfer),
            None => Matched::None,
        }
    }
}

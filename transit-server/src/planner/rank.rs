//! Assembling the final suggestion list.
//!
//! There is no scoring. Order is structural: matched suggestions first,
//! then the advisory alternative.

use crate::domain::{Suggestion, SuggestionKind};
use crate::network::RouteGraph;

use super::search::SearchQuery;

/// Outcome of the matching stages.
///
/// Transfers are only looked for when no direct route exists, so a result
/// is never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matched {
    /// One or more routes serve the trip directly.
    Direct(Vec<Suggestion>),
    /// No direct route; two routes connect at a shared stop.
    Transfer(Suggestion),
    /// Nothing matched.
    None,
}

impl Matched {
    /// Stage label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Matched::Direct(_) => "direct",
            Matched::Transfer(_) => "transfer",
            Matched::None => "none",
        }
    }

    pub fn into_suggestions(self) -> Vec<Suggestion> {
        match self {
            Matched::Direct(direct) => direct,
            Matched::Transfer(transfer) => vec![transfer],
            Matched::None => Vec::new(),
        }
    }
}

/// The fixed alternative suggestion.
///
/// Offered whenever the network has at least one active route, whatever the
/// query. Its content does not come from route data.
pub fn alternative_suggestion(graph: &RouteGraph, query: &SearchQuery) -> Option<Suggestion> {
    if !graph.has_active_routes() {
        return None;
    }

    Some(Suggestion {
        id: "alternative-1".to_string(),
        kind: SuggestionKind::Alternative,
        bus_label: "67".to_string(),
        estimated_duration_minutes: 25,
        description: format!(
            "{} → North Route → {}",
            query.origin.name, query.destination.name
        ),
        next_arrival_estimate: "8 min".to_string(),
        has_live_tracking: false,
        transfer_wait_minutes: None,
    })
}

/// Merge stage outputs into the list returned to the rider.
pub fn merge(matched: Matched, alternative: Option<Suggestion>) -> Vec<Suggestion> {
    let mut suggestions = matched.into_suggestions();
    suggestions.extend(alternative);
    suggestions
}

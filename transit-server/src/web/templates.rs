//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{Route, Suggestion};

use super::dto::format_minutes;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the trip search form and live map.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub routes: Vec<RouteView>,
}

// ============================================================================
// Fragment Templates (AJAX responses, no base.html)
// ============================================================================

/// Suggestion list fragment (search results).
#[derive(Template)]
#[template(path = "suggestion_list.html")]
pub struct SuggestionListTemplate {
    pub origin: String,
    pub destination: String,
    pub suggestions: Vec<SuggestionView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Suggestion view model for templates.
#[derive(Debug, Clone)]
pub struct SuggestionView {
    pub kind: String,
    pub bus_number: String,
    pub duration: String,
    pub description: String,
    pub next_arrival: String,
    pub is_live_tracking: bool,
    pub transfer_time: Option<String>,
}

impl SuggestionView {
    /// Create from a domain Suggestion.
    pub fn from_suggestion(suggestion: &Suggestion) -> Self {
        Self {
            kind: suggestion.kind.as_str().to_string(),
            bus_number: suggestion.bus_label.clone(),
            duration: format_minutes(suggestion.estimated_duration_minutes),
            description: suggestion.description.clone(),
            next_arrival: suggestion.next_arrival_estimate.clone(),
            is_live_tracking: suggestion.has_live_tracking,
            transfer_time: suggestion.transfer_wait_minutes.map(format_minutes),
        }
    }

    /// Heading shown on the suggestion card.
    pub fn heading(&self) -> String {
        let kind = match self.kind.as_str() {
            "direct" => "Direct",
            "transfer" => "With transfer",
            _ => "Alternative",
        };
        format!("{kind}: bus {}", self.bus_number)
    }
}

/// Route view model for the route list on the index page.
#[derive(Debug, Clone)]
pub struct RouteView {
    pub name: String,
    pub path: String,
    pub stop_count: usize,
    pub first_departure: Option<String>,
}

impl RouteView {
    /// Create from a domain Route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            name: route.name().to_string(),
            path: route.path_summary(),
            stop_count: route.stops().len(),
            first_departure: route.schedule().first().map(|e| e.time.clone()),
        }
    }
}

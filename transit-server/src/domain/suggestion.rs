//! Route suggestions produced by a search.

use std::fmt;

/// How a suggestion gets the rider to their destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionKind {
    /// One bus serving origin then destination.
    Direct,
    /// Two buses connected by a shared stop.
    Transfer,
    /// Fixed advisory option, not computed from route data.
    Alternative,
}

impl SuggestionKind {
    /// Lowercase label used on the wire and in templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionKind::Direct => "direct",
            SuggestionKind::Transfer => "transfer",
            SuggestionKind::Alternative => "alternative",
        }
    }
}

impl fmt::Display for SuggestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in a search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Stable identifier, e.g. `direct-route-15`.
    pub id: String,
    pub kind: SuggestionKind,
    /// Bus line(s) to take. Transfer suggestions list both, comma separated.
    pub bus_label: String,
    pub estimated_duration_minutes: u32,
    /// Human-readable path, stops separated by arrows.
    pub description: String,
    pub next_arrival_estimate: String,
    pub has_live_tracking: bool,
    /// Only set for transfers.
    pub transfer_wait_minutes: Option<u32>,
}

impl Suggestion {
    pub fn is_direct(&self) -> bool {
        self.kind == SuggestionKind::Direct
    }

    pub fn is_transfer(&self) -> bool {
        self.kind == SuggestionKind::Transfer
    }

    pub fn is_alternative(&self) -> bool {
        self.kind == SuggestionKind::Alternative
    }
}

//! Best-effort log of searches and what they suggested.
//!
//! Records are kept in a bounded in-memory cache and are never used to
//! answer a search. Old records are evicted once capacity is reached.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use moka::future::Cache as MokaCache;

use crate::domain::{Suggestion, SuggestionKind};
use crate::planner::SearchQuery;

/// Default number of records kept.
pub const DEFAULT_HISTORY_CAPACITY: u64 = 1000;

/// One logged search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRecord {
    pub from_location: String,
    pub to_location: String,
    /// Bus label of the first direct suggestion, if any.
    pub direct_route: Option<String>,
    /// Bus labels of transfer suggestions.
    pub connecting_routes: Vec<String>,
    /// Duration of the first suggestion, in minutes.
    pub estimated_time: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl SearchRecord {
    /// Summarise a search and its suggestions.
    pub fn new(query: &SearchQuery, suggestions: &[Suggestion], at: DateTime<Utc>) -> Self {
        let direct_route = suggestions
            .iter()
            .find(|s| s.kind == SuggestionKind::Direct)
            .map(|s| s.bus_label.clone());

        let connecting_routes = suggestions
            .iter()
            .filter(|s| s.kind == SuggestionKind::Transfer)
            .map(|s| s.bus_label.clone())
            .collect();

        Self {
            from_location: query.origin.name.clone(),
            to_location: query.destination.name.clone(),
            direct_route,
            connecting_routes,
            estimated_time: suggestions.first().map(|s| s.estimated_duration_minutes),
            created_at: at,
        }
    }
}

/// Bounded, write-mostly search log.
pub struct SearchHistory {
    records: MokaCache<u64, SearchRecord>,
    next_id: AtomicU64,
}

impl SearchHistory {
    pub fn new(capacity: u64) -> Self {
        Self {
            records: MokaCache::builder().max_capacity(capacity).build(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Log a search, returning the record's ID.
    pub async fn record(&self, query: &SearchQuery, suggestions: &[Suggestion]) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = SearchRecord::new(query, suggestions, Utc::now());
        self.records.insert(id, record).await;
        id
    }

    /// Look up a record, if it has not been evicted.
    pub async fn get(&self, id: u64) -> Option<SearchRecord> {
        self.records.get(&id).await
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

//! Application state for the web layer.

use std::sync::Arc;

use crate::history::SearchHistory;
use crate::live::{Fleet, LiveFeed};
use crate::network::{NetworkSnapshot, StopDirectory};
use crate::planner::SearchConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Current route graph
    pub network: NetworkSnapshot,

    /// Named stops, for listing and name search
    pub stops: Arc<StopDirectory>,

    /// Bus registry
    pub fleet: Fleet,

    /// Live position feed
    pub feed: LiveFeed,

    /// Log of searches
    pub history: Arc<SearchHistory>,

    /// Route matching configuration
    pub config: Arc<SearchConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        network: NetworkSnapshot,
        stops: StopDirectory,
        fleet: Fleet,
        feed: LiveFeed,
        history: SearchHistory,
        config: SearchConfig,
    ) -> Self {
        Self {
            network,
            stops: Arc::new(stops),
            fleet,
            feed,
            history: Arc::new(history),
            config: Arc::new(config),
        }
    }
}

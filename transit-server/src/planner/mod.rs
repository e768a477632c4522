//! Route suggestion planner.
//!
//! This module implements the matching algorithm that answers:
//! "Which buses get me from here to there?"
//!
//! A search first looks for routes serving both ends of the trip in the
//! right direction. Only if there are none does it look for two routes that
//! share a stop. A fixed alternative is appended whenever any route is active.

mod config;
mod direct;
mod rank;
mod search;
mod transfer;


pub use config::SearchConfig;
pub use direct::{DirectMatch, find_direct, match_route};
pub use rank::{Matched, alternative_suggestion, merge};
pub use search::{Planner, SearchError, SearchQuery, SearchResult};
pub use transfer::{TransferPoint, find_transfer, first_transfer_point, shared_stop};

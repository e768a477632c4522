//! The route network held in memory for searches.
//!
//! A [`RouteGraph`] is an immutable snapshot of all routes. Searches borrow
//! it read-only; reloading builds a new graph and swaps it in whole.

mod graph;
mod proximity;
mod snapshot;
mod stops;

pub use graph::RouteGraph;
pub use proximity::{ProximityMatcher, is_near};
pub use snapshot::NetworkSnapshot;
pub use stops::{StopDirectory, StopMatch};

//! Reference data: routes, the stop directory and the bus fleet.
//!
//! Data is loaded once at startup, either from the built-in sample network
//! or from a JSON seed file. Nothing in the search path writes to it.

mod error;
mod file;
mod provider;
mod seed;

pub use error::StoreError;
pub use file::{FileProvider, SeedFile};
pub use provider::RouteProvider;
pub use seed::{SeedProvider, sample_bus_stops, sample_buses, sample_routes};

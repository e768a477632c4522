//! The reference data provider abstraction.

use crate::domain::{Bus, BusStop, Route};

use super::error::StoreError;

/// Source of static reference data.
///
/// This abstraction lets the server start from the built-in sample network
/// or a seed file, and lets tests supply their own routes.
pub trait RouteProvider {
    /// All routes, active or not, in a stable order.
    fn all_routes(&self) -> Result<Vec<Route>, StoreError>;

    /// The stop directory.
    fn all_bus_stops(&self) -> Result<Vec<BusStop>, StoreError>;

    /// The bus fleet.
    fn all_buses(&self) -> Result<Vec<Bus>, StoreError>;
}

//! Named places entered by riders.

use super::geo::LatLng;

/// A rider-supplied location, already resolved to coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    /// Label shown back to the rider (e.g. "Airport Terminal").
    pub name: String,
    pub location: LatLng,
}

impl Place {
    pub fn new(name: impl Into<String>, location: LatLng) -> Self {
        Self {
            name: name.into(),
            location,
        }
    }
}

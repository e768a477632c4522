//! Domain error types.
//!
//! These errors represent invalid reference data. They are distinct from
//! storage and HTTP errors.

use super::RouteId;

/// Domain-level errors for validation of routes and stops.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route identifier is empty
    #[error("route id must not be empty")]
    EmptyRouteId,

    /// Route has no stops
    #[error("route {0} has no stops")]
    EmptyRoute(RouteId),

    /// Stop order does not strictly increase along the route
    #[error("route {route}: stop {stop:?} does not follow its predecessor in order")]
    StopOrder { route: RouteId, stop: String },

    /// Stop coordinates are NaN or infinite
    #[error("route {route}: stop {stop:?} has a non-finite location")]
    InvalidLocation { route: RouteId, stop: String },

    /// Two routes share an identifier
    #[error("duplicate route id {0}")]
    DuplicateRoute(RouteId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyRouteId;
        assert_eq!(err.to_string(), "route id must not be empty");

        let id = RouteId::new("route-15").unwrap();
        let err = DomainError::EmptyRoute(id.clone());
        assert_eq!(err.to_string(), "route route-15 has no stops");

        let err = DomainError::StopOrder {
            route: id.clone(),
            stop: "Airport".into(),
        };
        assert_eq!(
            err.to_string(),
            "route route-15: stop \"Airport\" does not follow its predecessor in order"
        );

        let err = DomainError::InvalidLocation {
            route: id.clone(),
            stop: "Airport".into(),
        };
        assert_eq!(
            err.to_string(),
            "route route-15: stop \"Airport\" has a non-finite location"
        );

        let err = DomainError::DuplicateRoute(id);
        assert_eq!(err.to_string(), "duplicate route id route-15");
    }
}

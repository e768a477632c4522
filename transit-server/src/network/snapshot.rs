//! Shared, swappable handle to the current route graph.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::store::{RouteProvider, StoreError};

use super::graph::RouteGraph;

/// Thread-safe handle to the current [`RouteGraph`].
///
/// Readers take an `Arc` to the graph and search it without holding the lock,
/// so a reload never disturbs a search in progress.
#[derive(Clone)]
pub struct NetworkSnapshot {
    inner: Arc<RwLock<Arc<RouteGraph>>>,
}

impl NetworkSnapshot {
    pub fn new(graph: RouteGraph) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(graph))),
        }
    }

    /// Build a snapshot from a provider's routes.
    pub fn load<P: RouteProvider + ?Sized>(provider: &P) -> Result<Self, StoreError> {
        let graph = build_graph(provider)?;
        info!(routes = graph.len(), "route graph loaded");
        Ok(Self::new(graph))
    }

    /// The graph searches should run against.
    pub async fn current(&self) -> Arc<RouteGraph> {
        self.inner.read().await.clone()
    }

    /// Swap in a new graph, returning the number of routes it holds.
    pub async fn replace(&self, graph: RouteGraph) -> usize {
        let count = graph.len();
        *self.inner.write().await = Arc::new(graph);
        count
    }

    /// Rebuild the graph from `provider`.
    ///
    /// On failure the current graph is kept and the error is returned.
    pub async fn reload<P: RouteProvider + ?Sized>(
        &self,
        provider: &P,
    ) -> Result<usize, StoreError> {
        let graph = build_graph(provider)?;
        let count = self.replace(graph).await;
        info!(routes = count, "route graph reloaded");
        Ok(count)
    }
}

fn build_graph<P: RouteProvider + ?Sized>(provider: &P) -> Result<RouteGraph, StoreError> {
    let routes = provider.all_routes()?;
    Ok(RouteGraph::new(routes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Bus, BusStop, DomainError, LatLng, Route, RouteId, Stop};
    use crate::store::SeedProvider;

    struct FailingProvider;

    impl RouteProvider for FailingProvider {
        fn all_routes(&self) -> Result<Vec<Route>, StoreError> {
            let id = RouteId::new("broken").unwrap();
            Err(StoreError::Invalid(DomainError::EmptyRoute(id)))
        }

        fn all_bus_stops(&self) -> Result<Vec<BusStop>, StoreError> {
            Ok(Vec::new())
        }

        fn all_buses(&self) -> Result<Vec<Bus>, StoreError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn load_from_seed() {
        let snapshot = NetworkSnapshot::load(&SeedProvider::new()).unwrap();
        let graph = snapshot.current().await;
        assert_eq!(graph.len(), 2);
    }

    #[tokio::test]
    async fn replace_does_not_affect_held_graph() {
        let snapshot = NetworkSnapshot::load(&SeedProvider::new()).unwrap();
        let before = snapshot.current().await;

        let route = Route::new(
            RouteId::new("solo").unwrap(),
            "S",
            vec![Stop::new("Only", LatLng::new(0.0, 0.0), 1)],
            true,
        )
        .unwrap();
        let count = snapshot.replace(RouteGraph::new(vec![route]).unwrap()).await;

        assert_eq!(count, 1);
        assert_eq!(before.len(), 2);
        assert_eq!(snapshot.current().await.len(), 1);
    }

    #[tokio::test]
    async fn failed_reload_keeps_current_graph() {
        let snapshot = NetworkSnapshot::load(&SeedProvider::new()).unwrap();

        assert!(snapshot.reload(&FailingProvider).await.is_err());
        assert_eq!(snapshot.current().await.len(), 2);

        assert_eq!(snapshot.reload(&SeedProvider::new()).await.unwrap(), 2);
    }
}

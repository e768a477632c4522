//! Registry of buses and their last known positions.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::{Bus, LatLng};

/// Thread-safe bus registry, keyed by bus ID.
#[derive(Clone, Default)]
pub struct Fleet {
    inner: Arc<RwLock<BTreeMap<String, Bus>>>,
}

impl Fleet {
    pub fn new(buses: Vec<Bus>) -> Self {
        let map = buses.into_iter().map(|b| (b.id.clone(), b)).collect();
        Self {
            inner: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn get(&self, bus_id: &str) -> Option<Bus> {
        self.inner.read().await.get(bus_id).cloned()
    }

    /// Every bus, ordered by ID.
    pub async fn all(&self) -> Vec<Bus> {
        self.inner.read().await.values().cloned().collect()
    }

    /// Buses in service, ordered by ID.
    pub async fn active(&self) -> Vec<Bus> {
        self.inner
            .read()
            .await
            .values()
            .filter(|b| b.active)
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// Record a new position for a bus.
    ///
    /// Returns the updated bus, or `None` if the ID is unknown.
    pub async fn update_location(
        &self,
        bus_id: &str,
        location: LatLng,
        at: DateTime<Utc>,
    ) -> Option<Bus> {
        let mut guard = self.inner.write().await;
        let bus = guard.get_mut(bus_id)?;
        *bus = bus.moved_to(location, at);
        Some(bus.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::sample_buses;
    use chrono::TimeZone;

    fn fleet() -> Fleet {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 6, 0, 0).unwrap();
        Fleet::new(sample_buses(at).unwrap())
    }

    #[tokio::test]
    async fn lists_buses_in_id_order() {
        let fleet = fleet();
        let ids: Vec<_> = fleet.all().await.into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["bus-15-1", "bus-42a-1", "bus-42a-2"]);
        assert_eq!(fleet.len().await, 3);
    }

    #[tokio::test]
    async fn active_filters_out_of_service() {
        let fleet = fleet();
        {
            let mut guard = fleet.inner.write().await;
            guard.get_mut("bus-42a-2").unwrap().active = false;
        }

        let ids: Vec<_> = fleet.active().await.into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["bus-15-1", "bus-42a-1"]);
    }

    #[tokio::test]
    async fn update_known_bus() {
        let fleet = fleet();
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 6, 10, 0).unwrap();

        let bus = fleet
            .update_location("bus-15-1", LatLng::new(40.755, -73.984), at)
            .await
            .unwrap();

        assert_eq!(bus.position, Some(LatLng::new(40.755, -73.984)));
        assert_eq!(bus.last_updated, Some(at));
        assert_eq!(fleet.get("bus-15-1").await.unwrap(), bus);
    }

    #[tokio::test]
    async fn update_unknown_bus() {
        let fleet = fleet();
        let result = fleet
            .update_location("bus-99", LatLng::new(0.0, 0.0), Utc::now())
            .await;
        assert!(result.is_none());
    }
}

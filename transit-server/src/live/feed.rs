//! Publish/subscribe feed of bus positions.
//!
//! Subscribers receive every report published after they subscribe. The
//! latest report per bus is also kept in a TTL cache, so a new subscriber
//! can be sent the current picture first. Buses that stop reporting drop
//! out of that picture when their entry expires.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tokio::sync::broadcast;
use tracing::trace;

use chrono::Utc;

use crate::domain::{Bus, BusPosition};

/// Configuration for the live feed.
#[derive(Debug, Clone)]
pub struct LiveFeedConfig {
    /// How long a position stays in the latest-position snapshot.
    pub position_ttl: Duration,

    /// Maximum number of buses tracked in the snapshot.
    pub max_buses: u64,

    /// Reports buffered per subscriber before a slow subscriber lags.
    pub channel_capacity: usize,
}

impl Default for LiveFeedConfig {
    fn default() -> Self {
        Self {
            position_ttl: Duration::from_secs(300),
            max_buses: 10_000,
            channel_capacity: 256,
        }
    }
}

/// Live position feed.
#[derive(Clone)]
pub struct LiveFeed {
    latest: MokaCache<String, BusPosition>,
    sender: broadcast::Sender<BusPosition>,
}

impl LiveFeed {
    /// Create a new feed with the given configuration.
    pub fn new(config: &LiveFeedConfig) -> Self {
        let latest = MokaCache::builder()
            .time_to_live(config.position_ttl)
            .max_capacity(config.max_buses)
            .build();
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));

        Self { latest, sender }
    }

    /// Publish a position report.
    ///
    /// Returns the number of subscribers that will receive it.
    pub async fn publish(&self, position: BusPosition) -> usize {
        self.latest
            .insert(position.bus_id.clone(), position.clone())
            .await;

        // Sending only fails when nobody is subscribed.
        let receivers = self.sender.send(position).unwrap_or(0);
        trace!(receivers, "position published");
        receivers
    }

    /// Publish the last known position of each active bus that has one.
    ///
    /// Used at startup so the snapshot is not empty before the first report.
    pub async fn publish_known_positions(&self, buses: &[Bus]) -> usize {
        let mut published = 0;
        for bus in buses.iter().filter(|b| b.active) {
            let Some(location) = bus.position else {
                continue;
            };
            let at = bus.last_updated.unwrap_or_else(Utc::now);
            self.publish(BusPosition::for_bus(bus, location, at)).await;
            published += 1;
        }
        published
    }

    /// Subscribe to reports published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<BusPosition> {
        self.sender.subscribe()
    }

    /// The latest report for one bus, if it has not expired.
    pub async fn latest(&self, bus_id: &str) -> Option<BusPosition> {
        self.latest.get(bus_id).await
    }

    /// Latest report for every bus, ordered by bus ID.
    pub fn snapshot(&self) -> Vec<BusPosition> {
        let mut positions: Vec<BusPosition> = self.latest.iter().map(|(_, p)| p).collect();
        positions.sort_by(|a, b| a.bus_id.cmp(&b.bus_id));
        positions
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

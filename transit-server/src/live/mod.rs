//! Live bus tracking.
//!
//! The fleet registry keeps each bus's last reported position. The feed
//! fans position reports out to subscribers and remembers the latest report
//! per bus for a limited time. The route planner never reads either.

mod feed;
mod fleet;

pub use feed::{LiveFeed, LiveFeedConfig};
pub use fleet::Fleet;

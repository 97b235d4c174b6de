//! Persistence adapter for the saved-items library.
//!
//! The current implementation is a latency simulator: there is no real
//! remote store yet, but the trait boundary is where one would plug in
//! (save/unsave as upsert/delete against a keyed store by item ID).

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use crate::app::Result;
use crate::domain::ContentItem;

/// Remote persistence operations for saved items.
#[async_trait]
pub trait Persistence: Send + Sync {
    /// Persist the item as saved; resolves with `is_saved = true`.
    async fn save(&self, item: &ContentItem) -> Result<ContentItem>;

    /// Remove the item from the saved store; resolves with `is_saved = false`.
    async fn unsave(&self, item: &ContentItem) -> Result<ContentItem>;
}

/// Simulates save/unsave round-trips with a fixed delay; always succeeds.
pub struct SimulatedRemote {
    latency: Duration,
}

impl SimulatedRemote {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl Persistence for SimulatedRemote {
    async fn save(&self, item: &ContentItem) -> Result<ContentItem> {
        debug!(id = %item.short_id(), "simulating save round-trip");
        sleep(self.latency).await;

        let mut item = item.clone();
        item.is_saved = true;
        Ok(item)
    }

    async fn unsave(&self, item: &ContentItem) -> Result<ContentItem> {
        debug!(id = %item.short_id(), "simulating unsave round-trip");
        sleep(self.latency).await;

        let mut item = item.clone();
        item.is_saved = false;
        Ok(item)
    }
}

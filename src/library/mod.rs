//! Saved-items library: the optimistic save/unsave protocol.
//!
//! A toggle flips the flag in the store immediately, then confirms the new
//! state with the persistence adapter. On rejection the store is restored
//! to the captured value. Toggles on the same item are serialized, so the
//! persisted state always settles to the last flip the caller made.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::warn;

use crate::app::{CurioError, Result};
use crate::domain::ContentItem;
use crate::persist::Persistence;
use crate::store::ContentStore;

/// Terminal state of one optimistic toggle.
#[derive(Debug, Clone)]
pub enum ToggleOutcome {
    /// The remote accepted the new state.
    Committed(ContentItem),
    /// The remote rejected it; the store was restored to the captured value.
    RolledBack { item: ContentItem, reason: String },
}

pub struct Library {
    store: Arc<ContentStore>,
    persistence: Arc<dyn Persistence>,
    toggle_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Library {
    pub fn new(store: Arc<ContentStore>, persistence: Arc<dyn Persistence>) -> Self {
        Self {
            store,
            persistence,
            toggle_locks: Mutex::new(HashMap::new()),
        }
    }

    async fn lock_for(&self, id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.toggle_locks.lock().await;
        locks
            .entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Flip an item's saved flag optimistically, then confirm with the
    /// persistence adapter; revert on rejection.
    pub async fn toggle_saved(&self, id: &str) -> Result<ToggleOutcome> {
        let item_lock = self.lock_for(id).await;
        let _guard = item_lock.lock().await;

        let current = self
            .store
            .get(id)?
            .ok_or_else(|| CurioError::ItemNotFound(id.to_string()))?;
        let original = current.is_saved;
        let target = !original;

        // Optimistic flip: the store reflects the change before the
        // round-trip settles
        let optimistic = self
            .store
            .set_saved(id, target)?
            .ok_or_else(|| CurioError::ItemNotFound(id.to_string()))?;

        let persisted = if target {
            self.persistence.save(&optimistic).await
        } else {
            self.persistence.unsave(&optimistic).await
        };

        match persisted {
            Ok(item) => Ok(ToggleOutcome::Committed(item)),
            Err(e) => {
                self.store.set_saved(id, original)?;
                warn!(id = %optimistic.short_id(), error = %e, "persistence rejected toggle, reverted");
                Ok(ToggleOutcome::RolledBack {
                    item: current,
                    reason: e.to_string(),
                })
            }
        }
    }
}

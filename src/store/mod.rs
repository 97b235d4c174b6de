//! In-memory content store: the source of truth for every view.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use crate::app::{CurioError, Result};
use crate::domain::ContentItem;

/// Ordered collection of content items, newest scraped items first.
///
/// Items are never deleted: a "remove from saved" action only clears
/// `is_saved`. All mutation happens under one lock, so the two-step
/// optimistic toggle in [`crate::library`] is the only read-modify-write
/// sequence that needs extra coordination.
pub struct ContentStore {
    items: Mutex<Vec<ContentItem>>,
}

impl ContentStore {
    /// Create a store from a seed set, dropping any duplicate IDs.
    pub fn new(seed: Vec<ContentItem>) -> Self {
        let mut seen = HashSet::new();
        let items = seed
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        Self {
            items: Mutex::new(items),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<ContentItem>>> {
        self.items
            .lock()
            .map_err(|_| CurioError::Other("content store lock poisoned".into()))
    }

    /// Snapshot of the full collection in display order.
    pub fn items(&self) -> Result<Vec<ContentItem>> {
        Ok(self.lock()?.clone())
    }

    pub fn get(&self, id: &str) -> Result<Option<ContentItem>> {
        let items = self.lock()?;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    /// Resolve a unique item ID prefix, for CLI convenience.
    pub fn resolve_prefix(&self, prefix: &str) -> Result<ContentItem> {
        let items = self.lock()?;
        let mut matches = items.iter().filter(|item| item.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(item), None) => Ok(item.clone()),
            (Some(_), Some(_)) => Err(CurioError::AmbiguousId(prefix.to_string())),
            (None, _) => Err(CurioError::ItemNotFound(prefix.to_string())),
        }
    }

    /// Prepend freshly scraped items, skipping IDs already present.
    ///
    /// Returns the number of items actually added. Input order is preserved
    /// at the front of the collection.
    pub fn merge_scraped(&self, incoming: Vec<ContentItem>) -> Result<usize> {
        let mut items = self.lock()?;

        let mut seen: HashSet<String> = items.iter().map(|item| item.id.clone()).collect();
        let mut merged: Vec<ContentItem> = incoming
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();
        let added = merged.len();

        merged.extend(items.drain(..));
        *items = merged;

        tracing::debug!(added, "merged scraped items into store");
        Ok(added)
    }

    /// Set an item's saved flag. Returns the updated item, or `None` when
    /// the ID is unknown.
    pub fn set_saved(&self, id: &str, saved: bool) -> Result<Option<ContentItem>> {
        let mut items = self.lock()?;
        match items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_saved = saved;
                Ok(Some(item.clone()))
            }
            None => Ok(None),
        }
    }
}

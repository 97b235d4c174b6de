//! Social-media hook generation.
//!
//! [`CannedHookGenerator`] stands in for a real AI call: it resolves after a
//! fixed delay with one twitter and one linkedin hook of fixed text,
//! independent of the item's content. The trait boundary is where a real
//! generation backend would plug in.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::time::sleep;
use tracing::debug;

use crate::app::Result;
use crate::domain::{ContentItem, GeneratedHook, Platform};

/// Produces platform-tagged promotional texts for a content item.
#[async_trait]
pub trait HookGenerator: Send + Sync {
    async fn generate(&self, item: &ContentItem) -> Result<Vec<GeneratedHook>>;
}

const TWITTER_HOOK: &str = "Just read an incredible piece about this topic.\n\n\
    The key takeaway? We're optimizing for the wrong metrics.\n\n\
    Here's why that matters for your dev workflow \u{1f9f5}\u{1f447}";

const LINKEDIN_HOOK: &str = "\u{1f680} Breaking down the latest shifts in the industry.\n\n\
    It's not just about the technology, it's about the methodology behind it.\n\n\
    #TechTrends #Developer #Growth";

/// Fixed-text generator with simulated latency.
pub struct CannedHookGenerator {
    latency: Duration,
    next_id: AtomicU64,
}

impl CannedHookGenerator {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            next_id: AtomicU64::new(1),
        }
    }

    fn hook(&self, item: &ContentItem, platform: Platform, text: &str) -> GeneratedHook {
        GeneratedHook {
            id: format!("hook-{}", self.next_id.fetch_add(1, Ordering::Relaxed)),
            content_item_id: item.id.clone(),
            text: text.to_string(),
            platform,
            created_at: Utc::now(),
        }
    }
}

#[async_trait]
impl HookGenerator for CannedHookGenerator {
    async fn generate(&self, item: &ContentItem) -> Result<Vec<GeneratedHook>> {
        debug!(id = %item.short_id(), "simulating hook generation");
        sleep(self.latency).await;

        Ok(vec![
            self.hook(item, Platform::Twitter, TWITTER_HOOK),
            self.hook(item, Platform::Linkedin, LINKEDIN_HOOK),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SourceType;

    fn item() -> ContentItem {
        ContentItem {
            id: ContentItem::generate_id("r/test", "post", "https://example.com"),
            title: "post".into(),
            source: SourceType::Reddit,
            source_name: "r/test".into(),
            preview_text: String::new(),
            full_content: "long form content".into(),
            url: "https://example.com".into(),
            timestamp: Utc::now(),
            tags: vec![],
            is_saved: false,
            is_read: false,
        }
    }

    #[tokio::test]
    async fn test_exactly_two_hooks_one_per_platform() {
        let generator = CannedHookGenerator::new(Duration::from_millis(1));
        let hooks = generator.generate(&item()).await.unwrap();

        assert_eq!(hooks.len(), 2);
        let twitter = hooks.iter().filter(|h| h.platform == Platform::Twitter).count();
        let linkedin = hooks.iter().filter(|h| h.platform == Platform::Linkedin).count();
        assert_eq!(twitter, 1);
        assert_eq!(linkedin, 1);
    }

    #[tokio::test]
    async fn test_hooks_conform_to_schema() {
        let generator = CannedHookGenerator::new(Duration::from_millis(1));
        let source = item();
        let hooks = generator.generate(&source).await.unwrap();

        for hook in &hooks {
            assert!(!hook.text.is_empty());
            assert!(!hook.id.is_empty());
            assert_eq!(hook.content_item_id, source.id);
        }
    }

    #[tokio::test]
    async fn test_hook_ids_unique_across_generations() {
        let generator = CannedHookGenerator::new(Duration::from_millis(1));
        let source = item();

        let first = generator.generate(&source).await.unwrap();
        let second = generator.generate(&source).await.unwrap();

        let mut ids: Vec<&str> = first.iter().chain(second.iter()).map(|h| h.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}

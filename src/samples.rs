//! Bundled sample content: the startup seed set and the scrape fallback set.

use chrono::{Duration, Utc};

use crate::domain::{ContentItem, SourceType};

fn item(
    title: &str,
    source: SourceType,
    source_name: &str,
    preview_text: &str,
    full_content: &str,
    url: &str,
    age: Duration,
    tags: &[&str],
    is_saved: bool,
    is_read: bool,
) -> ContentItem {
    ContentItem {
        id: ContentItem::generate_id(source_name, title, url),
        title: title.to_string(),
        source,
        source_name: source_name.to_string(),
        preview_text: preview_text.to_string(),
        full_content: full_content.to_string(),
        url: url.to_string(),
        timestamp: Utc::now() - age,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        is_saved,
        is_read,
    }
}

/// Items the store is seeded with at startup.
pub fn seed_items() -> Vec<ContentItem> {
    vec![
        item(
            "The Future of React Server Components",
            SourceType::Newsletter,
            "React Weekly",
            "Server Components are changing how we build hybrid applications. \
             In this issue, we dive deep into the hydration mechanics...",
            "Server Components are changing how we build hybrid applications. \
             In this issue, we dive deep into the hydration mechanics and how \
             Next.js 14 implements them. The key takeaway is that we are moving \
             towards a default-server mental model where client interactivity \
             is opt-in.",
            "https://react.dev",
            Duration::hours(2),
            &["React", "Frontend", "Performance"],
            false,
            false,
        ),
        item(
            "Why I switched from VS Code to Zed",
            SourceType::Reddit,
            "r/programming",
            "The performance difference is night and day. Rust-based \
             architecture really shines when opening large monorepos...",
            "The performance difference is night and day. Rust-based \
             architecture really shines when opening large monorepos. I was \
             skeptical at first because of the lack of extensions, but the core \
             experience is so much faster that I do not miss the bloat.",
            "https://reddit.com",
            Duration::hours(5),
            &["Editors", "Productivity", "Rust"],
            true,
            true,
        ),
        item(
            "Understanding PostgreSQL Indexing",
            SourceType::Newsletter,
            "ByteByteGo",
            "B-Trees are the default, but have you considered BRIN indexes for \
             time-series data? Here is a visual guide...",
            "B-Trees are the default, but have you considered BRIN indexes for \
             time-series data? Here is a visual guide to how database pages are \
             structured and why random I/O kills your query performance on \
             spinning rust, though NVMe changes the math slightly.",
            "https://blog.bytebytego.com",
            Duration::hours(24),
            &["Database", "Backend", "System Design"],
            false,
            false,
        ),
    ]
}

/// Items served when the scrape workflow fails or returns nothing usable.
pub fn fallback_items() -> Vec<ContentItem> {
    vec![
        item(
            "Gemini 1.5 Pro is now available via API",
            SourceType::Reddit,
            "r/LocalLLaMA",
            "Google just dropped the 1M context window model to the public API. \
             The reasoning capabilities seem to surpass GPT-4 in specific \
             retrieval tasks...",
            "Google just dropped the 1M context window model to the public API. \
             The reasoning capabilities seem to surpass GPT-4 in specific \
             retrieval tasks. I tested it with a 500 page PDF and it found the \
             needle in the haystack instantly.",
            "https://reddit.com",
            Duration::zero(),
            &["AI", "LLM", "Google"],
            false,
            false,
        ),
        item(
            "Design Systems in 2025",
            SourceType::Newsletter,
            "Smashing Magazine",
            "Tokens are out, semantic variables are in. We explore how major \
             tech companies are restructuring their design languages...",
            "Tokens are out, semantic variables are in. We explore how major \
             tech companies are restructuring their design languages to \
             accommodate dark mode automatically and support multi-brand \
             systems from a single codebase.",
            "https://smashingmagazine.com",
            Duration::zero(),
            &["Design", "CSS", "System"],
            false,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_is_non_empty_with_unique_ids() {
        let seed = seed_items();
        assert_eq!(seed.len(), 3);
        let ids: HashSet<&str> = seed.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), seed.len());
    }

    #[test]
    fn test_fallback_is_non_empty_with_unique_ids() {
        let fallback = fallback_items();
        assert_eq!(fallback.len(), 2);
        let ids: HashSet<&str> = fallback.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), fallback.len());
    }

    #[test]
    fn test_seed_and_fallback_do_not_collide() {
        let mut ids = HashSet::new();
        for item in seed_items().iter().chain(fallback_items().iter()) {
            assert!(ids.insert(item.id.clone()));
        }
    }

    #[test]
    fn test_ids_are_stable_across_calls() {
        let a = seed_items();
        let b = seed_items();
        assert_eq!(a[0].id, b[0].id);
    }
}

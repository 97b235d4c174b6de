use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Origin of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Reddit,
    Newsletter,
}

impl SourceType {
    /// Parse a payload source string, case-insensitively.
    ///
    /// Unknown values return `None`; the normalizer substitutes its default.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reddit" => Some(Self::Reddit),
            "newsletter" => Some(Self::Newsletter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reddit => "reddit",
            Self::Newsletter => "newsletter",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit of curated content.
///
/// Membership in the "saved" view is derived from `is_saved`; there is no
/// separate saved collection. `is_read` is set at creation and reserved for
/// future filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub source: SourceType,
    pub source_name: String,
    pub preview_text: String,
    pub full_content: String,
    pub url: String,
    pub timestamp: DateTime<Utc>,
    pub tags: Vec<String>,
    pub is_saved: bool,
    pub is_read: bool,
}

impl ContentItem {
    /// Generate a deterministic ID from an item's identity fields.
    ///
    /// Re-scraping the same story yields the same ID, so the store can
    /// deduplicate across scrape runs.
    pub fn generate_id(source_name: &str, title: &str, url: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(source_name.as_bytes());
        hasher.update(title.as_bytes());
        hasher.update(url.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Leading ID fragment used for display and prefix lookup.
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_item(id: &str) -> ContentItem {
        ContentItem {
            id: id.into(),
            title: "t".into(),
            source: SourceType::Reddit,
            source_name: "r/test".into(),
            preview_text: String::new(),
            full_content: String::new(),
            url: "u".into(),
            timestamp: Utc::now(),
            tags: vec![],
            is_saved: false,
            is_read: false,
        }
    }

    #[test]
    fn test_id_generation_deterministic() {
        let id1 = ContentItem::generate_id("r/programming", "Why I switched", "https://reddit.com");
        let id2 = ContentItem::generate_id("r/programming", "Why I switched", "https://reddit.com");
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_id_generation_different_inputs() {
        let id1 = ContentItem::generate_id("r/programming", "Post A", "https://reddit.com");
        let id2 = ContentItem::generate_id("r/programming", "Post B", "https://reddit.com");
        let id3 = ContentItem::generate_id("r/webdev", "Post A", "https://reddit.com");
        assert_ne!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_is_hex_sha256() {
        let id = ContentItem::generate_id("Morning Brew", "Headline", "https://example.com");
        assert_eq!(id.len(), 64); // SHA256 produces 32 bytes = 64 hex chars
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_short_id_of_generated_id() {
        let item = bare_item(&ContentItem::generate_id("r/test", "t", "u"));
        assert_eq!(item.short_id().len(), 8);
        assert!(item.id.starts_with(item.short_id()));
    }

    #[test]
    fn test_short_id_of_short_payload_id() {
        let item = bare_item("abc");
        assert_eq!(item.short_id(), "abc");
    }

    #[test]
    fn test_source_type_parse() {
        assert_eq!(SourceType::parse("reddit"), Some(SourceType::Reddit));
        assert_eq!(SourceType::parse("Newsletter"), Some(SourceType::Newsletter));
        assert_eq!(SourceType::parse(" REDDIT "), Some(SourceType::Reddit));
        assert_eq!(SourceType::parse("rss"), None);
        assert_eq!(SourceType::parse(""), None);
    }
}

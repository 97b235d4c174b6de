//! Mapping from a raw `tools/call` response to content items.

use chrono::Utc;
use html_escape::decode_html_entities;
use serde_json::Value;

use crate::domain::{ContentItem, SourceType};

const DEFAULT_TITLE: &str = "New Trending Item";
const DEFAULT_SOURCE_NAME: &str = "Workflow Trending";
const DEFAULT_PREVIEW: &str = "No preview available";
const DEFAULT_CONTENT: &str = "Content fetched via workflow.";

/// Extract content items from a `tools/call` result.
///
/// The result is expected to carry a `content` list with a `text` entry
/// whose text parses as a JSON array of items. Returns `None` when no such
/// entry exists, the text isn't JSON, the JSON isn't an array, or the array
/// is empty — the orchestrator treats all of these as a failed scrape.
pub fn items_from_call_result(result: &Value) -> Option<Vec<ContentItem>> {
    let content = result.get("content")?.as_array()?;
    let text = content
        .iter()
        .find(|entry| entry.get("type").and_then(Value::as_str) == Some("text"))?
        .get("text")?
        .as_str()?;

    let parsed: Value = serde_json::from_str(text).ok()?;
    let entries = parsed.as_array()?;
    if entries.is_empty() {
        return None;
    }

    Some(entries.iter().map(item_from_entry).collect())
}

/// Map one payload entry with field-by-field fallbacks.
///
/// The timestamp is always "now"; payload timestamps are ignored.
fn item_from_entry(entry: &Value) -> ContentItem {
    let text_field = |key: &str| {
        entry
            .get(key)
            .and_then(Value::as_str)
            .map(|s| decode_html_entities(s).to_string())
    };

    let title = text_field("title").unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let source = entry
        .get("source")
        .and_then(Value::as_str)
        .and_then(SourceType::parse)
        .unwrap_or(SourceType::Newsletter);
    let source_name = text_field("sourceName").unwrap_or_else(|| DEFAULT_SOURCE_NAME.to_string());
    let preview_text = text_field("previewText")
        .or_else(|| text_field("description"))
        .unwrap_or_else(|| DEFAULT_PREVIEW.to_string());
    let full_content = text_field("content")
        .or_else(|| text_field("text"))
        .unwrap_or_else(|| DEFAULT_CONTENT.to_string());
    let url = entry
        .get("url")
        .and_then(Value::as_str)
        .unwrap_or("#")
        .to_string();

    let id = entry
        .get("id")
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| ContentItem::generate_id(&source_name, &title, &url));

    let tags = entry
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .filter(|tags| !tags.is_empty())
        .unwrap_or_else(|| vec!["Trending".to_string(), "News".to_string()]);

    ContentItem {
        id,
        title,
        source,
        source_name,
        preview_text,
        full_content,
        url,
        timestamp: Utc::now(),
        tags,
        is_saved: false,
        is_read: false,
    }
}

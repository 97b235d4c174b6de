//! Pure, stateless view filtering.
//!
//! Recomputed from current inputs on every call; no incremental indexing.

use crate::domain::{ContentItem, SourceType};

/// Which collection the caller is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// All items.
    Feed,
    /// Only items with `is_saved` set.
    Saved,
}

/// Source restriction applied on top of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFilter {
    All,
    Only(SourceType),
}

/// An item passes if (query is empty OR title/preview contains it,
/// case-insensitively) AND the source filter allows it AND the view
/// admits it.
pub fn matches(item: &ContentItem, view: View, query: &str, source: SourceFilter) -> bool {
    if view == View::Saved && !item.is_saved {
        return false;
    }

    if let SourceFilter::Only(wanted) = source {
        if item.source != wanted {
            return false;
        }
    }

    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item.preview_text.to_lowercase().contains(&needle)
}

/// Compute the displayed subset, preserving store order.
pub fn visible<'a>(
    items: &'a [ContentItem],
    view: View,
    query: &str,
    source: SourceFilter,
) -> Vec<&'a ContentItem> {
    items
        .iter()
        .filter(|item| matches(item, view, query, source))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(title: &str, preview: &str, source: SourceType, saved: bool) -> ContentItem {
        ContentItem {
            id: ContentItem::generate_id("test", title, "https://example.com"),
            title: title.into(),
            source,
            source_name: "test".into(),
            preview_text: preview.into(),
            full_content: String::new(),
            url: "https://example.com".into(),
            timestamp: Utc::now(),
            tags: vec![],
            is_saved: saved,
            is_read: false,
        }
    }

    #[test]
    fn test_query_matches_title_case_insensitively() {
        let items = vec![
            item(
                "The Future of React Server Components",
                "Server Components are changing...",
                SourceType::Newsletter,
                false,
            ),
            item(
                "Why I switched from VS Code to Zed",
                "The performance difference is night and day...",
                SourceType::Reddit,
                false,
            ),
        ];

        let shown = visible(&items, View::Feed, "react", SourceFilter::All);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "The Future of React Server Components");
    }

    #[test]
    fn test_query_matches_preview_text() {
        let items = vec![item(
            "Untitled",
            "B-Trees are the default",
            SourceType::Newsletter,
            false,
        )];
        assert_eq!(visible(&items, View::Feed, "b-trees", SourceFilter::All).len(), 1);
        assert_eq!(visible(&items, View::Feed, "brin", SourceFilter::All).len(), 0);
    }

    #[test]
    fn test_empty_query_passes_everything() {
        let items = vec![
            item("a", "", SourceType::Reddit, false),
            item("b", "", SourceType::Newsletter, false),
        ];
        assert_eq!(visible(&items, View::Feed, "", SourceFilter::All).len(), 2);
    }

    #[test]
    fn test_source_filter_independent_of_query() {
        let items = vec![
            item("React on Reddit", "", SourceType::Reddit, false),
            item("React in a Newsletter", "", SourceType::Newsletter, false),
        ];

        let shown = visible(
            &items,
            View::Feed,
            "",
            SourceFilter::Only(SourceType::Reddit),
        );
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].source, SourceType::Reddit);

        let shown = visible(
            &items,
            View::Feed,
            "react",
            SourceFilter::Only(SourceType::Newsletter),
        );
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "React in a Newsletter");
    }

    #[test]
    fn test_saved_view_derives_from_flag() {
        let items = vec![
            item("saved one", "", SourceType::Reddit, true),
            item("not saved", "", SourceType::Reddit, false),
        ];

        let shown = visible(&items, View::Saved, "", SourceFilter::All);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "saved one");
    }

    #[test]
    fn test_saved_view_combines_with_query_and_source() {
        let items = vec![
            item("rust tips", "", SourceType::Reddit, true),
            item("rust tricks", "", SourceType::Newsletter, true),
            item("rust tools", "", SourceType::Reddit, false),
        ];

        let shown = visible(
            &items,
            View::Saved,
            "rust",
            SourceFilter::Only(SourceType::Reddit),
        );
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].title, "rust tips");
    }
}

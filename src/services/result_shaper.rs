//! Flattens a raw Bing response into [`SearchResultItem`]s.

use serde_json::Value;

use crate::models::{SearchResultItem, NO_SNIPPET, NO_TITLE, NO_URL};

/// Walks `webPages.value` in source order. A missing path, or one that is not
/// an array, yields no results. Fields that are absent or not strings are
/// replaced by the fixed placeholders.
pub fn shape_results(raw: &Value) -> Vec<SearchResultItem> {
    raw.get("webPages")
        .and_then(|pages| pages.get("value"))
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(shape_entry).collect())
        .unwrap_or_default()
}

fn shape_entry(entry: &Value) -> SearchResultItem {
    SearchResultItem {
        name: string_or(entry, "name", NO_TITLE),
        url: string_or(entry, "url", NO_URL),
        snippet: string_or(entry, "snippet", NO_SNIPPET),
    }
}

fn string_or(entry: &Value, key: &str, placeholder: &str) -> String {
    entry
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(placeholder)
        .to_string()
}

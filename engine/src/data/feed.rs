// Item feed loading. The feed is JSON: either an array of items or an object
// with an `items` array. Any other shape loads as an empty catalog.
use crate::error::EngineError;
use serde_json::Value;
use shared::models::Item;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub struct ItemFeedParser;

impl ItemFeedParser {
    /// Reads and parses a feed file. I/O failures and JSON syntax errors are
    /// returned; an unrecognized document shape is not an error.
    pub fn load_items_from_json(path: impl AsRef<Path>) -> Result<Vec<Item>, EngineError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| EngineError::FeedError(format!("Failed to read item feed '{}': {}", path.display(), e)))?;
        let items = Self::parse_str(&contents)?;
        info!(path = %path.display(), count = items.len(), "Loaded item feed");
        Ok(items)
    }

    pub fn parse_str(contents: &str) -> Result<Vec<Item>, EngineError> {
        let document: Value = serde_json::from_str(contents)?;
        Ok(Self::items_from_value(document))
    }

    /// Extracts items from an already-parsed feed document.
    ///
    /// Elements that cannot be read as an item (for example a string where
    /// the price should be) are skipped with a warning.
    pub fn items_from_value(document: Value) -> Vec<Item> {
        let entries = match document {
            Value::Array(entries) => entries,
            Value::Object(mut map) => match map.remove("items") {
                Some(Value::Array(entries)) => entries,
                _ => {
                    warn!("Item feed format not recognized: object without an `items` array");
                    return Vec::new();
                }
            },
            other => {
                warn!(kind = json_kind(&other), "Item feed format not recognized");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(idx, entry)| match serde_json::from_value::<Item>(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(index = idx, error = %e, "Skipping unreadable item in feed");
                    None
                }
            })
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

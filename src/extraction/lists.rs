//! Bullet list extraction.

use regex::Regex;
use tracing::debug;

use super::Extractor;
use super::types::{Category, MAIN_POINTS_CATEGORY};
use crate::error::{InfographicError, Result};

/// A line starting (after optional indentation) with `-` or `•`.
const LIST_ITEM_PATTERN: &str = r"(?m)^[ \t]*[-•][ \t]*([^\n]+)";

/// Collects dash and bullet lines into a single "main points" category.
#[derive(Debug, Clone)]
pub struct ListExtractor {
    pattern: Regex,
}

impl ListExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(LIST_ITEM_PATTERN)
            .map_err(|e| InfographicError::analysis(format!("Invalid list pattern: {e}")))?;
        Ok(ListExtractor { pattern })
    }

    /// Item texts with the marker stripped, trimmed, empty ones dropped.
    pub fn items(&self, text: &str) -> Vec<String> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|item| item.as_str().trim().to_string())
            .filter(|item| !item.is_empty())
            .collect()
    }
}

impl Extractor for ListExtractor {
    /// `None` when the text has no list lines.
    type Output = Option<Category>;

    fn extract(&self, text: &str) -> Result<Option<Category>> {
        let items = self.items(text);
        debug!(count = items.len(), "extracted list items");

        if items.is_empty() {
            return Ok(None);
        }
        Ok(Some(Category::new(MAIN_POINTS_CATEGORY, items)))
    }

    fn name(&self) -> &'static str {
        "lists"
    }
}

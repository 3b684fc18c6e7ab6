//! Chronological reference extraction.
//!
//! Recognizes standalone four-digit years and Russian month names. Months are
//! matched by stem so inflected forms (`марта`, `сентябре`) are found too.
//! Year boundaries are ASCII, so abbreviated forms like `2019г.` still count.

use regex::Regex;
use tracing::debug;

use super::Extractor;
use super::types::TimelineEntry;
use crate::error::{InfographicError, Result};

/// Russian month stems, January to December.
pub const MONTH_STEMS: &[&str] = &[
    "январ", "феврал", "март", "апрел", "ма[йя]", "июн", "июл", "август", "сентябр", "октябр",
    "ноябр", "декабр",
];

fn timeline_pattern() -> String {
    format!(
        r"(?i)(?-u:\b)[0-9]{{4}}(?-u:\b)|\b(?:{})\w*\b",
        MONTH_STEMS.join("|")
    )
}

/// The text between the nearest `.` before `start` and the nearest `.` at or
/// after `start` (or the end of the text), trimmed.
pub fn enclosing_sentence(text: &str, start: usize) -> &str {
    let from = text[..start].rfind('.').map_or(0, |i| i + 1);
    let to = text[start..].find('.').map_or(text.len(), |i| start + i);
    text[from..to].trim()
}

/// Finds years and month names and pairs each with its enclosing sentence.
#[derive(Debug, Clone)]
pub struct TemporalExtractor {
    pattern: Regex,
}

impl TemporalExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(&timeline_pattern())
            .map_err(|e| InfographicError::analysis(format!("Invalid timeline pattern: {e}")))?;
        Ok(TemporalExtractor { pattern })
    }
}

impl Extractor for TemporalExtractor {
    type Output = Vec<TimelineEntry>;

    fn extract(&self, text: &str) -> Result<Vec<TimelineEntry>> {
        let entries: Vec<TimelineEntry> = self
            .pattern
            .find_iter(text)
            .filter_map(|mat| {
                let sentence = enclosing_sentence(text, mat.start());
                (!sentence.is_empty()).then(|| TimelineEntry {
                    period: mat.as_str().to_string(),
                    events: vec![sentence.to_string()],
                })
            })
            .collect();

        debug!(count = entries.len(), "extracted timeline entries");
        Ok(entries)
    }

    fn name(&self) -> &'static str {
        "timeline"
    }
}

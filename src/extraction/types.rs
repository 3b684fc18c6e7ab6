//! Types produced by the extraction engine.
//!
//! These are the wire types of the analysis endpoint: field names serialize
//! in camelCase (`keyPoints`, `chartData`) so that existing consumers can read
//! them unchanged.

use serde::{Deserialize, Serialize};

/// Name of the single category produced by the list extractor.
pub const MAIN_POINTS_CATEGORY: &str = "Основные пункты";

/// Summary used when the text has no sentences.
pub const SUMMARY_FALLBACK: &str = "Не удалось создать краткое содержание";

/// Statistic labels, in the order they always appear.
pub const WORD_COUNT_LABEL: &str = "Количество слов";
pub const SENTENCE_COUNT_LABEL: &str = "Количество предложений";
pub const AVG_WORDS_LABEL: &str = "Слов в предложении (среднее)";
pub const NUMBERS_FOUND_LABEL: &str = "Найдено чисел";

/// A labelled numeric summary of the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub label: String,
    pub value: String,
}

impl Statistic {
    pub fn new<L: Into<String>, V: ToString>(label: L, value: V) -> Self {
        Statistic {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

/// A numeric literal found in the text, with the characters around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberMention {
    /// `"Значение {n}"`, where `n` is the 1-based index among all matches.
    pub label: String,
    /// Parsed value, always finite.
    pub value: f64,
    /// Up to 50 characters on each side of the match, trimmed.
    pub context: String,
}

/// A named group of list items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<String>,
    pub count: usize,
}

impl Category {
    /// Build a category whose count always equals the number of items.
    pub fn new<S: Into<String>>(name: S, items: Vec<String>) -> Self {
        Category {
            name: name.into(),
            count: items.len(),
            items,
        }
    }
}

/// A year or month reference together with the sentence it appears in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub events: Vec<String>,
}

/// Chart-ready collections derived from the text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub numbers: Vec<NumberMention>,
    pub categories: Vec<Category>,
    pub timeline: Vec<TimelineEntry>,
}

impl ChartData {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty() && self.categories.is_empty() && self.timeline.is_empty()
    }
}

/// The structured summary of one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub key_points: Vec<String>,
    pub statistics: Vec<Statistic>,
    pub themes: Vec<String>,
    pub summary: String,
    pub chart_data: ChartData,
}

/// A ranked theme word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFrequency {
    pub word: String,
    pub count: usize,
}

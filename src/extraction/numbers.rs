//! Numeric literal extraction.
//!
//! Every match of `[0-9]+(?:[.,][0-9]+)?%?` becomes a [`NumberMention`] labelled
//! by its 1-based index among all matches. The context window is cut around
//! the match's own offsets, so repeated literals each get their own context.

use regex::Regex;
use tracing::debug;

use super::Extractor;
use super::types::NumberMention;
use crate::error::{InfographicError, Result};

const NUMBER_PATTERN: &str = r"[0-9]+(?:[.,][0-9]+)?%?";

/// Finds numeric literals, optionally with a decimal part and a percent sign.
#[derive(Debug, Clone)]
pub struct NumericExtractor {
    pattern: Regex,
    context_radius: usize,
}

impl NumericExtractor {
    /// Create an extractor keeping `context_radius` characters on each side.
    pub fn new(context_radius: usize) -> Result<Self> {
        let pattern = Regex::new(NUMBER_PATTERN)
            .map_err(|e| InfographicError::analysis(format!("Invalid number pattern: {e}")))?;
        Ok(NumericExtractor {
            pattern,
            context_radius,
        })
    }

    pub fn context_radius(&self) -> usize {
        self.context_radius
    }
}

/// Parse a matched literal: drop `%`, treat `,` as the decimal separator.
///
/// Returns `None` for values that do not parse to a finite number.
pub fn parse_number(literal: &str) -> Option<f64> {
    let normalized = literal.trim_end_matches('%').replace(',', ".");
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// The trimmed slice of `text` spanning `radius` characters before `start`
/// and after `end`, clamped to the text bounds.
///
/// `start` and `end` are byte offsets on character boundaries.
pub fn context_window(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let to = text[end..]
        .char_indices()
        .nth(radius)
        .map_or(text.len(), |(i, _)| end + i);
    text[from..to].trim()
}

impl Extractor for NumericExtractor {
    type Output = Vec<NumberMention>;

    fn extract(&self, text: &str) -> Result<Vec<NumberMention>> {
        let mut mentions = Vec::new();

        for (index, mat) in self.pattern.find_iter(text).enumerate() {
            let Some(value) = parse_number(mat.as_str()) else {
                debug!(literal = mat.as_str(), "dropping unparsable number");
                continue;
            };
            mentions.push(NumberMention {
                label: format!("Значение {}", index + 1),
                value,
                context: context_window(text, mat.start(), mat.end(), self.context_radius)
                    .to_string(),
            });
        }

        debug!(count = mentions.len(), "extracted numbers");
        Ok(mentions)
    }

    fn name(&self) -> &'static str {
        "numbers"
    }
}

//! Assembly of the extractor outputs into an [`AnalysisResult`].
//!
//! # Examples
//!
//! ```
//! use infographic::config::AnalysisConfig;
//! use infographic::extraction::AnalysisEngine;
//!
//! let engine = AnalysisEngine::new(AnalysisConfig::default()).unwrap();
//! let result = engine
//!     .analyze("Рост составил 25% в 2023 году. Это хороший результат.")
//!     .unwrap();
//!
//! assert_eq!(result.chart_data.numbers[0].value, 25.0);
//! assert_eq!(result.chart_data.timeline[0].period, "2023");
//! assert_eq!(result.summary, "Рост составил 25% в 2023 году. Это хороший результат");
//! ```

use tracing::debug;

use super::Extractor;
use super::lists::ListExtractor;
use super::numbers::NumericExtractor;
use super::segmenter::{Segmentation, Segmenter};
use super::themes::ThemeRanker;
use super::timeline::TemporalExtractor;
use super::types::*;
use crate::config::AnalysisConfig;
use crate::error::{InfographicError, Result};

/// Runs every extractor over a text and packages the results.
///
/// The engine is immutable after construction; clone it or share it behind
/// an `Arc` to analyze from several threads.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    config: AnalysisConfig,
    segmenter: Segmenter,
    numbers: NumericExtractor,
    lists: ListExtractor,
    timeline: TemporalExtractor,
    themes: ThemeRanker,
}

impl AnalysisEngine {
    /// Compile all extractors for the given configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(AnalysisEngine {
            segmenter: Segmenter::new()?,
            numbers: NumericExtractor::new(config.context_radius)?,
            lists: ListExtractor::new()?,
            timeline: TemporalExtractor::new()?,
            themes: ThemeRanker::new(config.min_theme_chars)?,
            config,
        })
    }

    /// Engine with the default limits.
    pub fn with_defaults() -> Result<Self> {
        Self::new(AnalysisConfig::default())
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Reject empty text and text longer than the configured bound.
    pub fn validate(&self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(InfographicError::invalid_input("text is empty"));
        }
        let len = text.chars().count();
        if len > self.config.max_input_chars {
            return Err(InfographicError::too_long(len, self.config.max_input_chars));
        }
        Ok(())
    }

    /// Validate and analyze `text`.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        self.validate(text)?;

        let segmentation = run_step(&self.segmenter, text)?;
        let numbers = run_step(&self.numbers, text)?;
        let category = run_step(&self.lists, text)?;
        let timeline = run_step(&self.timeline, text)?;
        let ranked = run_step(&self.themes, text)?;

        let statistics = statistics(&segmentation, numbers.len());
        let key_points = self.key_points(&segmentation.sentences);
        let summary = self.summary(&segmentation.sentences);
        let themes: Vec<String> = ranked
            .into_iter()
            .take(self.config.theme_display_limit)
            .map(|frequency| frequency.word)
            .collect();

        let chart_data = ChartData {
            numbers: numbers.into_iter().take(self.config.max_numbers).collect(),
            categories: category.into_iter().collect(),
            timeline: timeline.into_iter().take(self.config.max_timeline).collect(),
        };

        debug!(
            key_points = key_points.len(),
            themes = themes.len(),
            numbers = chart_data.numbers.len(),
            timeline = chart_data.timeline.len(),
            "assembled analysis result"
        );

        Ok(AnalysisResult {
            key_points,
            statistics,
            themes,
            summary,
            chart_data,
        })
    }

    /// First sentence plus the first sentences containing a digit,
    /// deduplicated in order and capped.
    fn key_points(&self, sentences: &[String]) -> Vec<String> {
        let with_digits = sentences
            .iter()
            .filter(|sentence| sentence.chars().any(|c| c.is_ascii_digit()))
            .take(self.config.max_numeric_key_points);

        let mut key_points: Vec<String> = Vec::with_capacity(self.config.max_key_points);
        for sentence in sentences.iter().take(1).chain(with_digits) {
            if key_points.len() == self.config.max_key_points {
                break;
            }
            if !key_points.contains(sentence) {
                key_points.push(sentence.clone());
            }
        }
        key_points
    }

    fn summary(&self, sentences: &[String]) -> String {
        let limit = self.config.summary_sentences.min(sentences.len());
        let summary = sentences[..limit].join(". ").trim().to_string();
        if summary.is_empty() {
            SUMMARY_FALLBACK.to_string()
        } else {
            summary
        }
    }
}

/// Run one extractor, tagging its log line and any failure with its name.
fn run_step<E: Extractor>(extractor: &E, text: &str) -> Result<E::Output> {
    debug!(step = extractor.name(), "running extractor");
    extractor.extract(text).map_err(|e| match e {
        InfographicError::Analysis(msg) => {
            InfographicError::analysis(format!("{}: {msg}", extractor.name()))
        }
        other => other,
    })
}

/// The four fixed statistics, in their fixed order.
fn statistics(segmentation: &Segmentation, numbers_found: usize) -> Vec<Statistic> {
    vec![
        Statistic::new(WORD_COUNT_LABEL, segmentation.word_count()),
        Statistic::new(SENTENCE_COUNT_LABEL, segmentation.sentence_count()),
        Statistic::new(AVG_WORDS_LABEL, segmentation.avg_words_per_sentence()),
        Statistic::new(NUMBERS_FOUND_LABEL, numbers_found),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AnalysisEngine {
        AnalysisEngine::with_defaults().unwrap()
    }

    struct FailingStep;

    impl Extractor for FailingStep {
        type Output = ();

        fn extract(&self, _text: &str) -> Result<()> {
            Err(InfographicError::analysis("pattern blew up"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn test_step_failures_carry_the_extractor_name() {
        let err = run_step(&FailingStep, "текст").unwrap_err();
        assert_eq!(err.to_string(), "Analysis error: failing: pattern blew up");
    }

    #[test]
    fn test_extractor_names() {
        let engine = engine();
        let names = [
            engine.segmenter.name(),
            engine.numbers.name(),
            engine.lists.name(),
            engine.timeline.name(),
            engine.themes.name(),
        ];
        assert_eq!(names, ["segmenter", "numbers", "lists", "timeline", "themes"]);
    }

    #[test]
    fn test_reference_scenario() {
        let result = engine()
            .analyze("Рост составил 25% в 2023 году. Это хороший результат.")
            .unwrap();

        assert_eq!(result.key_points, vec!["Рост составил 25% в 2023 году"]);
        assert_eq!(result.chart_data.timeline.len(), 1);
        assert_eq!(result.chart_data.timeline[0].period, "2023");
        assert_eq!(
            result.chart_data.timeline[0].events,
            vec!["Рост составил 25% в 2023 году"]
        );
        assert_eq!(result.statistics[0].value, "9");
        assert_eq!(result.statistics[1].value, "2");
        assert_eq!(result.statistics[2].value, "5");
        assert_eq!(result.statistics[3].value, "2");
    }

    #[test]
    fn test_key_points_dedupe_and_cap() {
        let text = "В 2020 было 1. Затем 2. Потом 3. Итого 4. И 5.";
        let result = engine().analyze(text).unwrap();

        // First sentence is also the first one with a digit.
        assert_eq!(
            result.key_points,
            vec!["В 2020 было 1", "Затем 2", "Потом 3"]
        );
    }

    #[test]
    fn test_key_points_first_sentence_without_digits() {
        let text = "Вступление. Было 1. Было 2. Было 3. Было 4.";
        let result = engine().analyze(text).unwrap();

        assert_eq!(
            result.key_points,
            vec!["Вступление", "Было 1", "Было 2", "Было 3"]
        );
    }

    #[test]
    fn test_summary_uses_first_three_sentences() {
        let result = engine().analyze("Один. Два! Три? Четыре.").unwrap();
        assert_eq!(result.summary, "Один. Два. Три");
    }

    #[test]
    fn test_summary_fallback_without_sentences() {
        let result = engine().analyze("?!...").unwrap();

        assert_eq!(result.summary, SUMMARY_FALLBACK);
        assert!(result.key_points.is_empty());
        assert_eq!(result.statistics[2].value, "0");
    }

    #[test]
    fn test_caps_keep_scan_order() {
        let text = (1..=15)
            .map(|i| format!("Пункт {i} в {} году.", 2000 + i))
            .collect::<Vec<_>>()
            .join(" ");
        let result = engine().analyze(&text).unwrap();

        assert_eq!(result.chart_data.numbers.len(), 10);
        assert_eq!(result.chart_data.numbers[0].value, 1.0);
        assert_eq!(result.chart_data.numbers[1].value, 2001.0);
        assert_eq!(result.chart_data.timeline.len(), 5);
        assert_eq!(result.chart_data.timeline[0].period, "2001");
        // The statistic counts every number, not just the displayed ones.
        assert_eq!(result.statistics[3].value, "30");
    }

    #[test]
    fn test_validation() {
        let engine = engine();
        assert!(matches!(
            engine.analyze(""),
            Err(InfographicError::InvalidInput(_))
        ));
        assert!(engine.analyze(&"а".repeat(5000)).is_ok());
        assert!(matches!(
            engine.analyze(&"а".repeat(5001)),
            Err(InfographicError::TooLong { len: 5001, max: 5000 })
        ));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = AnalysisConfig {
            max_timeline: 0,
            ..Default::default()
        };
        assert!(AnalysisEngine::new(config).is_err());
    }
}

//! Frequency-based theme ranking.
//!
//! Words are lower-cased, stripped of non-alphanumeric characters, filtered
//! by length and by the Russian stop-word list, then counted. Ranking is a
//! stable sort by descending count, so ties keep first-occurrence order.

use std::sync::Arc;

use ahash::AHashMap;
use tracing::debug;

use super::Extractor;
use super::types::ThemeFrequency;
use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::{
    LowercaseFilter, MinLengthFilter, RemoveEmptyFilter, StopFilter, StripFilter,
};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// Ranks content words by how often they occur.
#[derive(Debug, Clone)]
pub struct ThemeRanker {
    analyzer: PipelineAnalyzer,
}

impl ThemeRanker {
    /// Create a ranker keeping words of at least `min_chars` characters.
    pub fn new(min_chars: usize) -> Result<Self> {
        Self::with_stop_filter(min_chars, StopFilter::new())
    }

    /// Create a ranker with a custom stop-word list.
    pub fn with_stop_filter(min_chars: usize, stop_filter: StopFilter) -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::words()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StripFilter::new()))
            .add_filter(Arc::new(MinLengthFilter::new(min_chars)))
            .add_filter(Arc::new(stop_filter.remove_stopped(false)))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("themes");

        Ok(ThemeRanker { analyzer })
    }

    /// Frequencies of every candidate word, most frequent first.
    pub fn rank(&self, text: &str) -> Result<Vec<ThemeFrequency>> {
        let mut positions: AHashMap<String, usize> = AHashMap::new();
        let mut frequencies: Vec<ThemeFrequency> = Vec::new();

        for token in self.analyzer.analyze(text)? {
            match positions.get(&token.text) {
                Some(&index) => frequencies[index].count += 1,
                None => {
                    positions.insert(token.text.clone(), frequencies.len());
                    frequencies.push(ThemeFrequency {
                        word: token.text,
                        count: 1,
                    });
                }
            }
        }

        // Stable: equal counts stay in encounter order.
        frequencies.sort_by(|a, b| b.count.cmp(&a.count));
        Ok(frequencies)
    }

    /// The `limit` most frequent words.
    pub fn top(&self, text: &str, limit: usize) -> Result<Vec<String>> {
        Ok(self
            .rank(text)?
            .into_iter()
            .take(limit)
            .map(|frequency| frequency.word)
            .collect())
    }
}

impl Extractor for ThemeRanker {
    type Output = Vec<ThemeFrequency>;

    fn extract(&self, text: &str) -> Result<Vec<ThemeFrequency>> {
        let ranked = self.rank(text)?;
        debug!(candidates = ranked.len(), "ranked themes");
        Ok(ranked)
    }

    fn name(&self) -> &'static str {
        "themes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_by_frequency() {
        let ranker = ThemeRanker::new(4).unwrap();
        let ranked = ranker
            .rank("Рынок растёт. Рынок меняется, рынок! Продажи растут. Продажи")
            .unwrap();

        assert_eq!(ranked[0].word, "рынок");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].word, "продажи");
        assert_eq!(ranked[1].count, 2);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let ranker = ThemeRanker::new(4).unwrap();
        let top = ranker.top("бета альфа гамма альфа бета гамма", 3).unwrap();
        assert_eq!(top, vec!["бета", "альфа", "гамма"]);
    }

    #[test]
    fn test_short_and_stop_words_are_excluded() {
        let ranker = ThemeRanker::new(4).unwrap();
        let ranked = ranker
            .rank("который между через также и в на год это")
            .unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_inflections_stay_distinct() {
        let ranker = ThemeRanker::new(4).unwrap();
        let top = ranker.top("рост роста рост", 5).unwrap();
        assert_eq!(top, vec!["рост", "роста"]);
    }

    #[test]
    fn test_top_respects_limit() {
        let ranker = ThemeRanker::new(4).unwrap();
        let top = ranker
            .top("один1 два22 три333 четыре пять6 шесть семь", 2)
            .unwrap();
        assert_eq!(top.len(), 2);
    }
}

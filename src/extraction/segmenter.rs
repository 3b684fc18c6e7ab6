//! Sentence and word segmentation.

use std::sync::Arc;

use tracing::debug;

use super::Extractor;
use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::{RegexTokenizer, Tokenizer};
use crate::error::Result;

/// Sentences and words of one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmentation {
    /// Trimmed, non-empty sentences in source order.
    pub sentences: Vec<String>,
    /// Lower-cased, non-empty whitespace-separated words in source order.
    pub words: Vec<String>,
}

impl Segmentation {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Words per sentence rounded half-up; `0` when there are no sentences.
    pub fn avg_words_per_sentence(&self) -> u64 {
        if self.sentences.is_empty() {
            return 0;
        }
        (self.word_count() as f64 / self.sentence_count() as f64).round() as u64
    }
}

/// Splits text into sentences on runs of `.`, `!`, `?` and into words on
/// runs of whitespace.
#[derive(Debug, Clone)]
pub struct Segmenter {
    sentences: RegexTokenizer,
    words: PipelineAnalyzer,
}

impl Segmenter {
    pub fn new() -> Result<Self> {
        let words = PipelineAnalyzer::new(Arc::new(RegexTokenizer::words()?))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .with_name("words");

        Ok(Segmenter {
            sentences: RegexTokenizer::sentences()?,
            words,
        })
    }

    /// Trimmed, non-empty sentences of `text`.
    pub fn sentences(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .sentences
            .tokenize(text)?
            .map(|token| token.text.trim().to_string())
            .filter(|sentence| !sentence.is_empty())
            .collect())
    }

    /// Lower-cased words of `text`.
    pub fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.words.analyze(text)?.map(|token| token.text).collect())
    }
}

impl Extractor for Segmenter {
    type Output = Segmentation;

    fn extract(&self, text: &str) -> Result<Segmentation> {
        let segmentation = Segmentation {
            sentences: self.sentences(text)?,
            words: self.words(text)?,
        };
        debug!(
            sentences = segmentation.sentence_count(),
            words = segmentation.word_count(),
            "segmented text"
        );
        Ok(segmentation)
    }

    fn name(&self) -> &'static str {
        "segmenter"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_are_trimmed_and_non_empty() {
        let segmenter = Segmenter::new().unwrap();
        let sentences = segmenter
            .sentences("Первое предложение.  Второе!!! ... Третье?  ")
            .unwrap();

        assert_eq!(sentences, vec!["Первое предложение", "Второе", "Третье"]);
    }

    #[test]
    fn test_words_are_lowercased() {
        let segmenter = Segmenter::new().unwrap();
        let words = segmenter.words("Рост  ВВП\nсоставил 3%").unwrap();

        assert_eq!(words, vec!["рост", "ввп", "составил", "3%"]);
    }

    #[test]
    fn test_average_rounds_half_up() {
        let segmentation = Segmentation {
            sentences: vec!["a".into(), "b".into()],
            words: vec!["x".into(); 5],
        };
        assert_eq!(segmentation.avg_words_per_sentence(), 3);

        let segmentation = Segmentation {
            sentences: vec!["a".into(), "b".into(), "c".into()],
            words: vec!["x".into(); 4],
        };
        assert_eq!(segmentation.avg_words_per_sentence(), 1);
    }

    #[test]
    fn test_average_without_sentences_is_zero() {
        let segmenter = Segmenter::new().unwrap();
        let segmentation = segmenter.extract("...!!!").unwrap();

        assert_eq!(segmentation.sentence_count(), 0);
        assert_eq!(segmentation.word_count(), 1);
        assert_eq!(segmentation.avg_words_per_sentence(), 0);
    }
}

//! The text extraction engine.
//!
//! Five independent extractors run over the same input string and the
//! [`AnalysisEngine`] assembles their outputs into an [`AnalysisResult`]:
//!
//! - [`Segmenter`] - sentences and words
//! - [`NumericExtractor`] - numbers with a context window
//! - [`ListExtractor`] - bullet lines grouped into one category
//! - [`TemporalExtractor`] - years and month names with their sentence
//! - [`ThemeRanker`] - most frequent content words
//!
//! None of them holds mutable state, so one engine can serve any number of
//! concurrent requests.

use crate::error::Result;

/// A pure extraction step over raw text.
pub trait Extractor: Send + Sync {
    /// What the step produces.
    type Output;

    /// Run the step over `text`.
    fn extract(&self, text: &str) -> Result<Self::Output>;

    /// Get the name of this extractor (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod engine;
pub mod lists;
pub mod numbers;
pub mod segmenter;
pub mod themes;
pub mod timeline;
pub mod types;

pub use engine::AnalysisEngine;
pub use lists::ListExtractor;
pub use numbers::NumericExtractor;
pub use segmenter::{Segmentation, Segmenter};
pub use themes::ThemeRanker;
pub use timeline::TemporalExtractor;
pub use types::*;

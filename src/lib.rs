//! # Infographic
//!
//! A text analysis engine that turns free-form Russian text into
//! chart-ready infographic data.
//!
//! ## Features
//!
//! - Sentence and word segmentation with a composable analysis pipeline
//! - Numeric mentions with their surrounding context
//! - Bullet-list, year and month extraction
//! - Frequency-based theme ranking with a Russian stop-word list
//! - Six infographic templates with colour schemes and export
//! - An HTTP endpoint and a command line interface
//!
//! ## Example
//!
//! ```
//! use infographic::prelude::*;
//!
//! let engine = AnalysisEngine::with_defaults().unwrap();
//! let result = engine.analyze("Выручка выросла на 12% в 2024 году.").unwrap();
//!
//! let infographic = render(VisualizationKind::Statistics, &result, &StyleSettings::default());
//! assert!(!infographic.is_placeholder());
//! ```

pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod extraction;
pub mod store;
pub mod visualization;

pub mod prelude {
    pub use crate::config::{AnalysisConfig, AppConfig};
    pub use crate::error::{InfographicError, Result};
    pub use crate::extraction::{AnalysisEngine, AnalysisResult};
    pub use crate::visualization::{StyleSettings, VisualizationKind, render};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

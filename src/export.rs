//! Exporting rendered infographics as JSON documents or plain text.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{InfographicError, Result};
use crate::extraction::AnalysisResult;
use crate::visualization::templates::{CATEGORIES_HEADING, KEY_POINTS_HEADING};
use crate::visualization::{Infographic, InfographicBody};

/// File name stem used when none is given.
pub const DEFAULT_FILENAME: &str = "infographic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => f.write_str("json"),
            ExportFormat::Text => f.write_str("text"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = InfographicError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "text" | "txt" => Ok(ExportFormat::Text),
            _ => Err(InfographicError::invalid_input(format!(
                "unknown export format: {s} (expected json or text)"
            ))),
        }
    }
}

/// The JSON export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// RFC 3339 UTC time of the export.
    pub timestamp: String,
    pub filename: String,
    /// Plain-text rendering of the infographic.
    pub content: String,
    pub analysis: AnalysisResult,
}

impl ExportDocument {
    pub fn new(
        infographic: &Infographic,
        analysis: &AnalysisResult,
        filename: &str,
        timestamp: DateTime<Utc>,
    ) -> Self {
        ExportDocument {
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            filename: filename.to_string(),
            content: render_text(infographic),
            analysis: analysis.clone(),
        }
    }
}

/// Serialize an infographic in `format`, stamped with the current time.
pub fn export(
    format: ExportFormat,
    infographic: &Infographic,
    analysis: &AnalysisResult,
    filename: &str,
) -> Result<String> {
    match format {
        ExportFormat::Json => {
            let document = ExportDocument::new(infographic, analysis, filename, Utc::now());
            Ok(serde_json::to_string_pretty(&document)?)
        }
        ExportFormat::Text => Ok(render_text(infographic)),
    }
}

/// Where an export named `filename` lands inside `dir`.
pub fn export_path(dir: &Path, filename: &str, format: ExportFormat) -> PathBuf {
    dir.join(format!("{filename}.{}", format.extension()))
}

/// Write exported content, creating parent directories as needed.
pub fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    info!(path = %path.display(), bytes = content.len(), "export written");
    Ok(())
}

/// Plain-text rendering: the title, then the template content line by line.
pub fn render_text(infographic: &Infographic) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_body(&mut out, infographic);
    out
}

fn write_body(out: &mut String, infographic: &Infographic) -> fmt::Result {
    writeln!(out, "{}", infographic.title)?;
    writeln!(out)?;
    match &infographic.body {
        InfographicBody::Placeholder { message } => writeln!(out, "{message}")?,
        InfographicBody::Statistics { chart, contexts } => {
            if let Some(dataset) = chart.datasets.first() {
                for (label, value) in chart.labels.iter().zip(&dataset.data) {
                    writeln!(out, "{label}: {value}")?;
                }
            }
            if !contexts.is_empty() {
                writeln!(out)?;
                for number in contexts {
                    writeln!(out, "{}: {}", number.label, number.context)?;
                }
            }
        }
        InfographicBody::Comparison { headers, rows } => {
            writeln!(out, "{}", headers.join(" | "))?;
            for row in rows {
                writeln!(out, "{} | {}", row.label, row.value)?;
            }
        }
        InfographicBody::Timeline { entries } => {
            for entry in entries {
                writeln!(out, "{}", entry.period)?;
                for event in &entry.events {
                    writeln!(out, "  - {event}")?;
                }
            }
        }
        InfographicBody::List {
            key_points,
            categories,
        } => {
            if !key_points.is_empty() {
                writeln!(out, "{KEY_POINTS_HEADING}")?;
                for point in key_points {
                    writeln!(out, "- {point}")?;
                }
            }
            if !categories.is_empty() {
                if !key_points.is_empty() {
                    writeln!(out)?;
                }
                writeln!(out, "{CATEGORIES_HEADING}")?;
                for category in categories {
                    writeln!(out, "{} ({})", category.name, category.count)?;
                    for item in &category.items {
                        writeln!(out, "  - {item}")?;
                    }
                }
            }
        }
        InfographicBody::Trends { tags } => {
            let words: Vec<&str> = tags.iter().map(|tag| tag.text.as_str()).collect();
            writeln!(out, "{}", words.join(", "))?;
        }
        InfographicBody::Summary { text, .. } => writeln!(out, "{text}")?,
    }
    Ok(())
}

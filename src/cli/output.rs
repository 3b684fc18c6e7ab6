//! Output formatting for CLI commands.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{InfographicArgs, OutputFormat};
use crate::error::Result;
use crate::export::{ExportFormat, render_text};
use crate::extraction::AnalysisResult;
use crate::visualization::{Infographic, StyleSettings, VisualizationKind};

/// Something that can be printed for a person as well as serialized.
pub trait HumanReadable {
    fn human(&self) -> String;
}

impl HumanReadable for AnalysisResult {
    fn human(&self) -> String {
        let mut out = String::new();

        out.push_str("Key points:\n");
        for point in &self.key_points {
            let _ = writeln!(out, "  - {point}");
        }

        out.push_str("\nStatistics:\n");
        for stat in &self.statistics {
            let _ = writeln!(out, "  {}: {}", stat.label, stat.value);
        }

        let _ = writeln!(out, "\nThemes: {}", self.themes.join(", "));
        let _ = writeln!(out, "\nSummary:\n  {}", self.summary);

        let chart = &self.chart_data;
        let _ = writeln!(
            out,
            "\nChart data: {} numbers, {} categories, {} timeline entries",
            chart.numbers.len(),
            chart.categories.len(),
            chart.timeline.len()
        );
        for number in &chart.numbers {
            let _ = writeln!(out, "  {} = {} ({})", number.label, number.value, number.context);
        }
        for entry in &chart.timeline {
            let _ = writeln!(out, "  {}: {} events", entry.period, entry.events.len());
        }

        let suitable: Vec<&str> = VisualizationKind::suitable_for(self)
            .iter()
            .map(|kind| kind.id())
            .collect();
        let _ = writeln!(out, "\nSuitable templates: {}", suitable.join(", "));
        out
    }
}

impl HumanReadable for Infographic {
    fn human(&self) -> String {
        render_text(self)
    }
}

impl HumanReadable for StyleSettings {
    fn human(&self) -> String {
        let resolved = self.resolve();
        let mut out = String::new();
        let _ = writeln!(out, "colorScheme:     {} (primary {})", self.color_scheme, resolved.scheme.primary);
        let _ = writeln!(out, "fontSize:        {} (base {})", self.font_size, resolved.fonts.base);
        let _ = writeln!(out, "layout:          {}", self.layout);
        let _ = writeln!(out, "backgroundStyle: {}", self.background_style);
        out
    }
}

/// Result of an export command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResult {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub bytes: usize,
}

impl HumanReadable for ExportResult {
    fn human(&self) -> String {
        format!(
            "Exported {} ({} bytes) to {}\n",
            self.format,
            self.bytes,
            self.path.display()
        )
    }
}

/// Format a result in the selected output format.
pub fn format_result<T: Serialize + HumanReadable>(
    result: &T,
    args: &InfographicArgs,
) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.human()),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(format!("{json}\n"))
        }
    }
}

/// Print a result to standard output in the selected format.
pub fn output_result<T: Serialize + HumanReadable>(
    message: &str,
    result: &T,
    args: &InfographicArgs,
) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{}", format_result(result, args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::AnalysisEngine;
    use clap::Parser;

    fn analysis() -> AnalysisResult {
        AnalysisEngine::with_defaults()
            .unwrap()
            .analyze("Рост составил 25% в 2023 году. Это хороший результат.")
            .unwrap()
    }

    #[test]
    fn test_human_analysis() {
        let text = analysis().human();
        assert!(text.contains("Key points:\n  - Рост составил 25% в 2023 году\n"));
        assert!(text.contains("  Количество слов: 9\n"));
        assert!(text.contains("  2023: 1 events\n"));
        assert!(text.contains("Suitable templates: statistics, comparison, timeline"));
    }

    #[test]
    fn test_json_output_is_the_wire_format() {
        let args = InfographicArgs::parse_from(["infographic", "-f", "json", "analyze"]);
        let out = format_result(&analysis(), &args).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("keyPoints").is_some());
        assert!(value.get("chartData").is_some());
        assert!(!out.trim_end().contains('\n'));
    }

    #[test]
    fn test_style_human() {
        let text = StyleSettings::default().human();
        assert!(text.contains("colorScheme:     blue (primary #3B82F6)"));
        assert!(text.contains("backgroundStyle: gradient"));
    }
}

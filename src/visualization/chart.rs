//! Chart specifications for the overview panel.

use serde::{Deserialize, Serialize};

use super::style::{ColorScheme, hex_to_rgba};
use crate::extraction::{Category, ChartData, NumberMention, TimelineEntry};

/// Shown instead of the panel when the text yielded no chart data.
pub const CHART_PLACEHOLDER: &str = "Недостаточно данных для создания диаграмм.";

pub const NUMBERS_CHART_TITLE: &str = "Числовые показатели";
pub const THEMES_CHART_TITLE: &str = "Ключевые темы";
pub const TIMELINE_CHART_TITLE: &str = "Временная шкала";

const NUMBERS_DATASET: &str = "Числовые данные";
const THEMES_DATASET: &str = "Частота тем";
const TIMELINE_DATASET: &str = "События по времени";

/// Themes shown in the pie chart.
const PIE_THEMES: usize = 6;
/// Number contexts and periods listed under their charts.
const HIGHLIGHTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    HorizontalBar,
    Pie,
    Line,
}

/// One data series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
    pub border_color: Vec<String>,
}

/// A chart ready to hand to a plotting front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl ChartSpec {
    /// A bar chart of numeric mentions coloured from `scheme`.
    pub fn numbers(
        kind: ChartKind,
        title: &str,
        dataset: &str,
        numbers: &[NumberMention],
        scheme: &ColorScheme,
    ) -> Self {
        let colors = scheme.chart_colors();
        ChartSpec {
            kind,
            title: title.to_string(),
            labels: numbers.iter().map(|number| number.label.clone()).collect(),
            datasets: vec![Dataset {
                label: dataset.to_string(),
                data: numbers.iter().map(|number| number.value).collect(),
                background_color: colors.backgrounds(numbers.len()),
                border_color: colors.borders(numbers.len()),
            }],
        }
    }

    /// The pie chart of themes. Weights descend from six by rank.
    pub fn themes(themes: &[String], scheme: &ColorScheme) -> Self {
        let shown = &themes[..themes.len().min(PIE_THEMES)];
        let colors = scheme.chart_colors();
        ChartSpec {
            kind: ChartKind::Pie,
            title: THEMES_CHART_TITLE.to_string(),
            labels: shown.to_vec(),
            datasets: vec![Dataset {
                label: THEMES_DATASET.to_string(),
                data: (0..shown.len()).map(|i| (PIE_THEMES - i) as f64).collect(),
                background_color: colors.backgrounds(shown.len()),
                border_color: colors.borders(shown.len()),
            }],
        }
    }

    /// Events per period as a line.
    pub fn timeline(timeline: &[TimelineEntry], scheme: &ColorScheme) -> Self {
        ChartSpec {
            kind: ChartKind::Line,
            title: TIMELINE_CHART_TITLE.to_string(),
            labels: timeline.iter().map(|entry| entry.period.clone()).collect(),
            datasets: vec![Dataset {
                label: TIMELINE_DATASET.to_string(),
                data: timeline.iter().map(|entry| entry.events.len() as f64).collect(),
                background_color: hex_to_rgba(scheme.primary, 0.1).into_iter().collect(),
                border_color: hex_to_rgba(scheme.primary, 1.0).into_iter().collect(),
            }],
        }
    }
}

/// Everything the overview panel shows for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPanel {
    pub charts: Vec<ChartSpec>,
    pub number_highlights: Vec<NumberMention>,
    pub period_highlights: Vec<TimelineEntry>,
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl ChartPanel {
    /// Build the panel. With no numbers, categories or timeline entries the
    /// panel holds only the placeholder message, whatever the themes.
    pub fn build(chart_data: &ChartData, themes: &[String], scheme: &ColorScheme) -> Self {
        if chart_data.is_empty() {
            return ChartPanel {
                charts: Vec::new(),
                number_highlights: Vec::new(),
                period_highlights: Vec::new(),
                categories: Vec::new(),
                placeholder: Some(CHART_PLACEHOLDER.to_string()),
            };
        }

        let mut charts = Vec::new();
        if !chart_data.numbers.is_empty() {
            charts.push(ChartSpec::numbers(
                ChartKind::Bar,
                NUMBERS_CHART_TITLE,
                NUMBERS_DATASET,
                &chart_data.numbers,
                scheme,
            ));
        }
        if !themes.is_empty() {
            charts.push(ChartSpec::themes(themes, scheme));
        }
        if !chart_data.timeline.is_empty() {
            charts.push(ChartSpec::timeline(&chart_data.timeline, scheme));
        }

        ChartPanel {
            charts,
            number_highlights: chart_data.numbers.iter().take(HIGHLIGHTS).cloned().collect(),
            period_highlights: chart_data.timeline.iter().take(HIGHLIGHTS).cloned().collect(),
            categories: chart_data.categories.clone(),
            placeholder: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder.is_some()
    }
}

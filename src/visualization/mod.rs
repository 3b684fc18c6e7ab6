//! Infographic templates, charts and styles built on top of an analysis.
//!
//! Nothing here touches the text again: every function takes an
//! [`AnalysisResult`] and the current [`StyleSettings`] and is pure.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InfographicError, Result};
use crate::extraction::AnalysisResult;

pub mod chart;
pub mod style;
pub mod templates;

pub use chart::{ChartKind, ChartPanel, ChartSpec, Dataset};
pub use style::{Background, ChartColors, ColorScheme, FontSizes, Layout, ResolvedStyle, StyleSettings};
pub use templates::{Infographic, InfographicBody, render};

/// Leading themes inspected by the trends template.
const TREND_THEMES: usize = 5;
/// Items listed by [`VisualizationKind::preview`].
const PREVIEW_ITEMS: usize = 3;
const PREVIEW_KEY_POINT_CHARS: usize = 50;
const PREVIEW_SUMMARY_CHARS: usize = 200;

/// The six infographic templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualizationKind {
    Statistics,
    Comparison,
    Timeline,
    List,
    Trends,
    Summary,
}

impl VisualizationKind {
    pub const ALL: [VisualizationKind; 6] = [
        VisualizationKind::Statistics,
        VisualizationKind::Comparison,
        VisualizationKind::Timeline,
        VisualizationKind::List,
        VisualizationKind::Trends,
        VisualizationKind::Summary,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            VisualizationKind::Statistics => "statistics",
            VisualizationKind::Comparison => "comparison",
            VisualizationKind::Timeline => "timeline",
            VisualizationKind::List => "list",
            VisualizationKind::Trends => "trends",
            VisualizationKind::Summary => "summary",
        }
    }

    /// Display name shown when choosing a template.
    pub fn name(&self) -> &'static str {
        match self {
            VisualizationKind::Statistics => "Статистическая инфографика",
            VisualizationKind::Comparison => "Сравнительная таблица",
            VisualizationKind::Timeline => "Временная шкала",
            VisualizationKind::List => "Структурированный список",
            VisualizationKind::Trends => "Анализ трендов",
            VisualizationKind::Summary => "Краткая сводка",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VisualizationKind::Statistics => "Диаграммы и графики с числовыми данными",
            VisualizationKind::Comparison => "Сравнение ключевых показателей",
            VisualizationKind::Timeline => "Хронология событий и процессов",
            VisualizationKind::List => "Организованное представление информации",
            VisualizationKind::Trends => "Тенденции и закономерности",
            VisualizationKind::Summary => "Основные выводы и заключения",
        }
    }

    /// Heading of the rendered infographic.
    pub fn title(&self) -> &'static str {
        match self {
            VisualizationKind::Statistics => "Статистическая инфографика",
            VisualizationKind::Comparison => "Сравнительная инфографика",
            VisualizationKind::Timeline => "Временная шкала",
            VisualizationKind::List => "Списковая инфографика",
            VisualizationKind::Trends => "Анализ трендов",
            VisualizationKind::Summary => "Краткая сводка",
        }
    }

    /// Message rendered when the analysis has nothing for this template.
    pub fn placeholder(&self) -> &'static str {
        match self {
            VisualizationKind::Statistics => {
                "Недостаточно числовых данных для построения диаграммы."
            }
            VisualizationKind::Comparison => {
                "Недостаточно данных для построения сравнительной таблицы."
            }
            VisualizationKind::Timeline => "Недостаточно данных для построения временной шкалы.",
            VisualizationKind::List => {
                "Недостаточно данных для построения структурированного списка."
            }
            VisualizationKind::Trends => "Недостаточно данных для анализа трендов.",
            VisualizationKind::Summary => "Недостаточно данных для генерации краткой сводки.",
        }
    }

    /// Whether the analysis has enough material for this template.
    pub fn is_suitable(&self, result: &AnalysisResult) -> bool {
        match self {
            VisualizationKind::Statistics => !result.chart_data.numbers.is_empty(),
            VisualizationKind::Comparison => result.statistics.len() > 2,
            VisualizationKind::Timeline => !result.chart_data.timeline.is_empty(),
            VisualizationKind::List => result.key_points.len() > 2,
            VisualizationKind::Trends => result.themes.iter().take(TREND_THEMES).count() > 3,
            VisualizationKind::Summary => result.summary.chars().count() > 50,
        }
    }

    /// Templates the analysis is suitable for, in display order.
    pub fn suitable_for(result: &AnalysisResult) -> Vec<VisualizationKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| kind.is_suitable(result))
            .collect()
    }

    /// A short textual preview of what the template will show.
    pub fn preview(&self, result: &AnalysisResult) -> Vec<String> {
        match self {
            VisualizationKind::Statistics => result
                .chart_data
                .numbers
                .iter()
                .take(PREVIEW_ITEMS)
                .map(|number| format!("{}: {}", number.label, number.value))
                .collect(),
            VisualizationKind::Comparison => result
                .statistics
                .iter()
                .take(PREVIEW_ITEMS)
                .map(|stat| format!("{}: {}", stat.label, stat.value))
                .collect(),
            VisualizationKind::Timeline => result
                .chart_data
                .timeline
                .iter()
                .take(PREVIEW_ITEMS)
                .map(|entry| format!("{} - {} событий", entry.period, entry.events.len()))
                .collect(),
            VisualizationKind::List => result
                .key_points
                .iter()
                .take(PREVIEW_ITEMS)
                .map(|point| truncate(point, PREVIEW_KEY_POINT_CHARS))
                .collect(),
            VisualizationKind::Trends => result
                .themes
                .iter()
                .take(TREND_THEMES)
                .cloned()
                .collect(),
            VisualizationKind::Summary => vec![truncate(&result.summary, PREVIEW_SUMMARY_CHARS)],
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}

impl fmt::Display for VisualizationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for VisualizationKind {
    type Err = InfographicError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                InfographicError::invalid_input(format!("unknown visualization kind: {s}"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{ChartData, NumberMention, Statistic, TimelineEntry};

    fn result() -> AnalysisResult {
        AnalysisResult {
            key_points: vec!["Первый пункт".into(), "Второй пункт".into()],
            statistics: vec![
                Statistic::new("Количество слов", 9),
                Statistic::new("Количество предложений", 2),
                Statistic::new("Слов в предложении (среднее)", 5),
                Statistic::new("Найдено чисел", 1),
            ],
            themes: vec!["рынок".into(), "рост".into(), "цены".into(), "спрос".into()],
            summary: "Коротко".into(),
            chart_data: ChartData {
                numbers: vec![NumberMention {
                    label: "Значение 1".into(),
                    value: 25.0,
                    context: "Рост составил 25%".into(),
                }],
                categories: Vec::new(),
                timeline: vec![TimelineEntry {
                    period: "2023".into(),
                    events: vec!["Рост в 2023".into(), "Спад в 2023".into()],
                }],
            },
        }
    }

    #[test]
    fn test_suitability() {
        let result = result();
        assert_eq!(
            VisualizationKind::suitable_for(&result),
            vec![
                VisualizationKind::Statistics,
                VisualizationKind::Comparison,
                VisualizationKind::Timeline,
                VisualizationKind::Trends,
            ]
        );
    }

    #[test]
    fn test_summary_suitability_counts_chars() {
        let mut result = result();
        result.summary = "я".repeat(50);
        assert!(!VisualizationKind::Summary.is_suitable(&result));
        result.summary.push('я');
        assert!(VisualizationKind::Summary.is_suitable(&result));
    }

    #[test]
    fn test_preview() {
        let result = result();
        assert_eq!(
            VisualizationKind::Statistics.preview(&result),
            vec!["Значение 1: 25"]
        );
        assert_eq!(
            VisualizationKind::Timeline.preview(&result),
            vec!["2023 - 2 событий"]
        );
        assert_eq!(VisualizationKind::Comparison.preview(&result).len(), 3);
        assert_eq!(VisualizationKind::Summary.preview(&result), vec!["Коротко..."]);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(
            "Trends".parse::<VisualizationKind>().unwrap(),
            VisualizationKind::Trends
        );
        assert_eq!(VisualizationKind::List.to_string(), "list");
        assert!("chart".parse::<VisualizationKind>().is_err());
        assert_eq!(
            serde_json::to_string(&VisualizationKind::Summary).unwrap(),
            "\"summary\""
        );
    }
}

//! Rendering an analysis into one of the infographic templates.

use serde::Serialize;

use super::VisualizationKind;
use super::chart::{ChartKind, ChartSpec};
use super::style::{ResolvedStyle, StyleSettings, hex_to_rgba};
use crate::extraction::{AnalysisResult, Category, NumberMention, TimelineEntry};

const STATISTICS_CHART_TITLE: &str = "Статистика";
const STATISTICS_DATASET: &str = "Значения";
const CONTEXT_HIGHLIGHTS: usize = 3;

pub const COMPARISON_HEADERS: [&str; 2] = ["Показатель", "Значение"];
pub const KEY_POINTS_HEADING: &str = "Ключевые пункты:";
pub const CATEGORIES_HEADING: &str = "Категории:";

const MUTED_TEXT: &str = "#6B7280";
const WHITE: &str = "#ffffff";

/// A rendered infographic: template, heading, applied style and content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Infographic {
    pub kind: VisualizationKind,
    pub title: String,
    pub style: ResolvedStyle,
    pub body: InfographicBody,
}

impl Infographic {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, InfographicBody::Placeholder { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub label: String,
    pub value: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub text: String,
    pub background: String,
    pub color: String,
}

/// Template-specific content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InfographicBody {
    Placeholder {
        message: String,
    },
    Statistics {
        chart: ChartSpec,
        contexts: Vec<NumberMention>,
    },
    Comparison {
        headers: Vec<String>,
        rows: Vec<TableRow>,
    },
    Timeline {
        entries: Vec<TimelineEntry>,
    },
    List {
        key_points: Vec<String>,
        categories: Vec<Category>,
    },
    Trends {
        tags: Vec<Tag>,
    },
    Summary {
        text: String,
        background: String,
    },
}

/// Render `result` with the chosen template and style.
///
/// Rendering never fails: a template with nothing to show gets its
/// placeholder message instead.
pub fn render(kind: VisualizationKind, result: &AnalysisResult, settings: &StyleSettings) -> Infographic {
    let style = settings.resolve();
    let body = match kind {
        VisualizationKind::Statistics => statistics(result, &style),
        VisualizationKind::Comparison => comparison(result, &style),
        VisualizationKind::Timeline => timeline(result),
        VisualizationKind::List => list(result),
        VisualizationKind::Trends => trends(result, &style),
        VisualizationKind::Summary => summary(result, &style),
    }
    .unwrap_or_else(|| InfographicBody::Placeholder {
        message: kind.placeholder().to_string(),
    });

    Infographic {
        kind,
        title: kind.title().to_string(),
        style,
        body,
    }
}

fn statistics(result: &AnalysisResult, style: &ResolvedStyle) -> Option<InfographicBody> {
    let numbers = &result.chart_data.numbers;
    if numbers.is_empty() {
        return None;
    }
    Some(InfographicBody::Statistics {
        chart: ChartSpec::numbers(
            ChartKind::HorizontalBar,
            STATISTICS_CHART_TITLE,
            STATISTICS_DATASET,
            numbers,
            style.scheme,
        ),
        contexts: numbers.iter().take(CONTEXT_HIGHLIGHTS).cloned().collect(),
    })
}

fn comparison(result: &AnalysisResult, style: &ResolvedStyle) -> Option<InfographicBody> {
    if result.statistics.is_empty() {
        return None;
    }
    let rows = result
        .statistics
        .iter()
        .enumerate()
        .map(|(index, stat)| TableRow {
            label: stat.label.clone(),
            value: stat.value.clone(),
            background: if index % 2 == 0 {
                WHITE.to_string()
            } else {
                style.scheme.light_bg.to_string()
            },
        })
        .collect();
    Some(InfographicBody::Comparison {
        headers: COMPARISON_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows,
    })
}

fn timeline(result: &AnalysisResult) -> Option<InfographicBody> {
    if result.chart_data.timeline.is_empty() {
        return None;
    }
    Some(InfographicBody::Timeline {
        entries: result.chart_data.timeline.clone(),
    })
}

fn list(result: &AnalysisResult) -> Option<InfographicBody> {
    if result.key_points.is_empty() && result.chart_data.categories.is_empty() {
        return None;
    }
    Some(InfographicBody::List {
        key_points: result.key_points.clone(),
        categories: result.chart_data.categories.clone(),
    })
}

fn trends(result: &AnalysisResult, style: &ResolvedStyle) -> Option<InfographicBody> {
    if result.themes.is_empty() {
        return None;
    }
    let background = hex_to_rgba(style.scheme.primary, 0.2).unwrap_or_default();
    let tags = result
        .themes
        .iter()
        .map(|theme| Tag {
            text: theme.clone(),
            background: background.clone(),
            color: style.scheme.text_color.to_string(),
        })
        .collect();
    Some(InfographicBody::Trends { tags })
}

fn summary(result: &AnalysisResult, style: &ResolvedStyle) -> Option<InfographicBody> {
    if result.summary.trim().is_empty() {
        return None;
    }
    Some(InfographicBody::Summary {
        text: result.summary.clone(),
        background: hex_to_rgba(style.scheme.light_bg, 0.5).unwrap_or_else(|| MUTED_TEXT.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{AnalysisEngine, ChartData, Statistic};

    fn empty_result() -> AnalysisResult {
        AnalysisResult {
            key_points: Vec::new(),
            statistics: Vec::new(),
            themes: Vec::new(),
            summary: "   ".into(),
            chart_data: ChartData::default(),
        }
    }

    #[test]
    fn test_every_template_has_a_placeholder() {
        let result = empty_result();
        for kind in VisualizationKind::ALL {
            let infographic = render(kind, &result, &StyleSettings::default());
            assert!(infographic.is_placeholder(), "{kind}");
            assert_eq!(infographic.title, kind.title());
            assert_eq!(
                infographic.body,
                InfographicBody::Placeholder {
                    message: kind.placeholder().to_string()
                }
            );
        }
    }

    #[test]
    fn test_comparison_rows_alternate() {
        let mut result = empty_result();
        result.statistics = vec![
            Statistic::new("a", 1),
            Statistic::new("b", 2),
            Statistic::new("c", 3),
        ];
        let mut settings = StyleSettings::default();
        settings.set("colorScheme", "orange").unwrap();

        let infographic = render(VisualizationKind::Comparison, &result, &settings);
        let InfographicBody::Comparison { headers, rows } = infographic.body else {
            panic!("expected a comparison table");
        };
        assert_eq!(headers, vec!["Показатель", "Значение"]);
        assert_eq!(rows[0].background, "#ffffff");
        assert_eq!(rows[1].background, "#FEF3C7");
        assert_eq!(rows[2].background, "#ffffff");
    }

    #[test]
    fn test_statistics_from_analysis() {
        let engine = AnalysisEngine::with_defaults().unwrap();
        let result = engine
            .analyze("Выручка 120 млн, прибыль 30 млн, рост 15% за 2023 год.")
            .unwrap();

        let infographic = render(VisualizationKind::Statistics, &result, &StyleSettings::default());
        let InfographicBody::Statistics { chart, contexts } = infographic.body else {
            panic!("expected a statistics chart");
        };
        assert_eq!(chart.kind, ChartKind::HorizontalBar);
        assert_eq!(chart.datasets[0].data, vec![120.0, 30.0, 15.0, 2023.0]);
        assert_eq!(contexts.len(), 3);
    }

    #[test]
    fn test_trend_tags_use_scheme() {
        let mut result = empty_result();
        result.themes = vec!["рынок".into(), "рост".into()];

        let infographic = render(VisualizationKind::Trends, &result, &StyleSettings::default());
        let InfographicBody::Trends { tags } = infographic.body else {
            panic!("expected trend tags");
        };
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].background, "rgba(59, 130, 246, 0.2)");
        assert_eq!(tags[0].color, "#1E40AF");
    }

    #[test]
    fn test_list_with_categories_only() {
        let mut result = empty_result();
        result.chart_data.categories = vec![Category::new("Основные пункты", vec!["пункт".into()])];

        let infographic = render(VisualizationKind::List, &result, &StyleSettings::default());
        assert!(!infographic.is_placeholder());
    }
}

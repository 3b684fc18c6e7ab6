//! Integration tests for the analysis engine.

use infographic::extraction::{
    AVG_WORDS_LABEL, MAIN_POINTS_CATEGORY, NUMBERS_FOUND_LABEL, SENTENCE_COUNT_LABEL,
    WORD_COUNT_LABEL,
};
use infographic::prelude::*;

const REPORT: &str = "Компания увеличила выручку на 15% в 2023 году.
Количество клиентов выросло до 350 человек.
В марте запустили новый продукт.
Итоги квартала:
- рост продаж
- снижение затрат
• новые рынки
Компания планирует рост выручки в 2024 году.";

fn engine() -> AnalysisEngine {
    AnalysisEngine::with_defaults().unwrap()
}

#[test]
fn test_reference_scenario() -> Result<()> {
    let result = engine().analyze("Рост составил 25% в 2023 году. Это хороший результат.")?;

    assert_eq!(result.chart_data.numbers.len(), 2);
    assert_eq!(result.chart_data.numbers[0].value, 25.0);
    assert_eq!(result.chart_data.numbers[0].label, "Значение 1");
    assert_eq!(result.chart_data.numbers[1].value, 2023.0);
    assert_eq!(result.chart_data.timeline.len(), 1);
    assert_eq!(result.chart_data.timeline[0].period, "2023");
    assert!(result.chart_data.categories.is_empty());
    assert_eq!(
        result.summary,
        "Рост составил 25% в 2023 году. Это хороший результат"
    );
    Ok(())
}

#[test]
fn test_statistics_have_fixed_labels_and_order() -> Result<()> {
    let result = engine().analyze(REPORT)?;

    let labels: Vec<&str> = result
        .statistics
        .iter()
        .map(|stat| stat.label.as_str())
        .collect();
    assert_eq!(
        labels,
        vec![
            WORD_COUNT_LABEL,
            SENTENCE_COUNT_LABEL,
            AVG_WORDS_LABEL,
            NUMBERS_FOUND_LABEL
        ]
    );
    Ok(())
}

#[test]
fn test_full_report() -> Result<()> {
    let result = engine().analyze(REPORT)?;

    assert!(result.key_points.len() <= 4);
    assert_eq!(
        result.key_points[0],
        "Компания увеличила выручку на 15% в 2023 году"
    );

    let category = &result.chart_data.categories[0];
    assert_eq!(category.name, MAIN_POINTS_CATEGORY);
    assert_eq!(
        category.items,
        vec!["рост продаж", "снижение затрат", "новые рынки"]
    );
    assert_eq!(category.count, 3);

    let periods: Vec<&str> = result
        .chart_data
        .timeline
        .iter()
        .map(|entry| entry.period.as_str())
        .collect();
    assert_eq!(periods, vec!["2023", "марте", "2024"]);

    assert!(result.themes.contains(&"компания".to_string()));
    assert!(result.themes.len() <= 6);
    Ok(())
}

#[test]
fn test_key_points_are_unique() -> Result<()> {
    let result = engine().analyze("Было 1. Было 1. Было 1. Было 2.")?;

    // Only the first three sentences with digits are candidates.
    assert_eq!(result.key_points, vec!["Было 1"]);
    Ok(())
}

#[test]
fn test_text_without_data() -> Result<()> {
    let result = engine().analyze("Просто текст без чисел и дат")?;

    assert!(result.chart_data.numbers.is_empty());
    assert!(result.chart_data.categories.is_empty());
    assert!(result.chart_data.timeline.is_empty());
    assert!(result.chart_data.is_empty());
    Ok(())
}

#[test]
fn test_stop_words_only_yield_no_themes() -> Result<()> {
    let result = engine().analyze("который также между через когда, которая")?;

    assert!(result.themes.is_empty());
    Ok(())
}

#[test]
fn test_length_bound_is_in_characters() {
    let engine = engine();
    // Cyrillic letters take two bytes each.
    assert!(engine.analyze(&"ж".repeat(5000)).is_ok());
    assert!(matches!(
        engine.analyze(&"ж".repeat(5001)),
        Err(InfographicError::TooLong { len: 5001, .. })
    ));
    assert!(matches!(
        engine.analyze(""),
        Err(InfographicError::InvalidInput(_))
    ));
}

#[test]
fn test_analysis_is_idempotent() -> Result<()> {
    let engine = engine();
    let first = serde_json::to_string(&engine.analyze(REPORT)?)?;
    let second = serde_json::to_string(&engine.analyze(REPORT)?)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_wire_field_names() -> Result<()> {
    let result = engine().analyze(REPORT)?;
    let value = serde_json::to_value(&result)?;

    for key in ["keyPoints", "statistics", "themes", "summary", "chartData"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    for key in ["numbers", "categories", "timeline"] {
        assert!(value["chartData"].get(key).is_some(), "missing chartData.{key}");
    }
    Ok(())
}

#[test]
fn test_custom_limits() -> Result<()> {
    let config = AnalysisConfig {
        max_input_chars: 20,
        max_numbers: 1,
        ..Default::default()
    };
    let engine = AnalysisEngine::new(config)?;

    let result = engine.analyze("1 2 3 4 5")?;
    assert_eq!(result.chart_data.numbers.len(), 1);
    assert_eq!(result.statistics[3].value, "5");
    assert!(engine.analyze(&"а".repeat(21)).is_err());
    Ok(())
}

#[test]
fn test_abbreviated_year_reaches_timeline_and_numbers() -> Result<()> {
    let result = engine().analyze("Компания основана в 2019г. Выручка выросла.")?;

    assert_eq!(result.chart_data.numbers[0].value, 2019.0);
    assert_eq!(result.chart_data.timeline.len(), 1);
    assert_eq!(result.chart_data.timeline[0].period, "2019");
    assert_eq!(
        result.chart_data.timeline[0].events,
        vec!["Компания основана в 2019г"]
    );
    Ok(())
}

//! Criterion benchmarks for the infographic engine.
//!
//! Covers the individual extractors and the full analysis of texts of
//! increasing length, up to the maximum accepted input.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use infographic::extraction::{AnalysisEngine, Extractor, NumericExtractor, ThemeRanker};
use infographic::visualization::{StyleSettings, VisualizationKind, render};

const SENTENCES: &[&str] = &[
    "Выручка компании выросла на 15% в 2023 году.",
    "В марте открылись три новых офиса.",
    "Количество клиентов достигло 1200 человек.",
    "Расходы на рекламу снизились до 4,5 млн рублей.",
    "Итоги квартала:\n- рост продаж\n- новые рынки\n",
    "Компания планирует выход на рынок Казахстана в сентябре.",
];

/// Generate a text of roughly `chars` characters from the sample sentences.
fn generate_text(chars: usize) -> String {
    let mut text = String::new();
    for sentence in SENTENCES.iter().cycle() {
        if text.chars().count() + sentence.chars().count() + 1 > chars {
            break;
        }
        text.push_str(sentence);
        text.push(' ');
    }
    text
}

fn bench_analysis(c: &mut Criterion) {
    let engine = AnalysisEngine::with_defaults().unwrap();
    let mut group = c.benchmark_group("analysis");

    for size in [200, 1000, 5000] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("analyze", size), &text, |b, text| {
            b.iter(|| engine.analyze(black_box(text)).unwrap())
        });
    }

    group.finish();
}

fn bench_extractors(c: &mut Criterion) {
    let text = generate_text(5000);
    let numbers = NumericExtractor::new(50).unwrap();
    let themes = ThemeRanker::new(4).unwrap();
    let mut group = c.benchmark_group("extractors");

    group.bench_function("numbers", |b| {
        b.iter(|| numbers.extract(black_box(&text)).unwrap())
    });
    group.bench_function("themes", |b| {
        b.iter(|| themes.extract(black_box(&text)).unwrap())
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let engine = AnalysisEngine::with_defaults().unwrap();
    let result = engine.analyze(&generate_text(5000)).unwrap();
    let settings = StyleSettings::default();
    let mut group = c.benchmark_group("render");

    group.throughput(Throughput::Elements(VisualizationKind::ALL.len() as u64));
    group.bench_function("all_templates", |b| {
        b.iter(|| {
            for kind in VisualizationKind::ALL {
                black_box(render(kind, black_box(&result), &settings));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_extractors, bench_render);
criterion_main!(benches);

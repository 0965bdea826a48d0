//! Criterion benchmarks for abjad.
//!
//! Covers normalization, single-word breakdowns and multi-word summaries.

use std::hint::black_box;
use std::sync::Arc;

use abjad::analysis::analyzer::AbjadAnalyzer;
use abjad::analysis::normalizer::normalize;
use abjad::tables::ReferenceTables;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};

/// Generate test texts for benchmarking.
fn generate_test_texts(count: usize) -> Vec<String> {
    let words = [
        "بِسْمِ",
        "اللَّهِ",
        "الرَّحْمَٰنِ",
        "الرَّحِيمِ",
        "أحمد",
        "محمد",
        "علي",
        "مصطفى",
        "إبراهيم",
        "آمنة",
        "كتاب",
        "قلم",
        "جـــميل",
        "نور",
        "سماء",
        "أرض",
    ];

    let mut texts = Vec::with_capacity(count);
    for i in 0..count {
        let text_length = 5 + (i % 20);
        let mut text_words = Vec::with_capacity(text_length);
        for j in 0..text_length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            text_words.push(words[word_idx]);
        }
        texts.push(text_words.join(" "));
    }
    texts
}

fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");
    let texts = generate_test_texts(100);

    group.bench_function("normalize_single_text", |b| {
        b.iter(|| black_box(normalize(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("normalize_batch", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(normalize(black_box(text)));
            }
        })
    });

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let analyzer = AbjadAnalyzer::new(Arc::new(ReferenceTables::builtin()));
    let texts = generate_test_texts(100);

    group.bench_function("analyze_unique_value", |b| {
        b.iter(|| black_box(analyzer.analyze_unique_value(black_box("الرَّحْمَٰنِ"))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("analyze_text_batch", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(analyzer.analyze_text(black_box(text)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_normalization, bench_analysis);
criterion_main!(benches);

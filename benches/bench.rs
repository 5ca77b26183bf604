//! Criterion benchmarks for tierspell.
//!
//! Covers corpus tokenization, edit generation and end-to-end correction
//! at each candidate tier.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use tierspell::analysis::tokenizer::words;
use tierspell::spelling::{EditGenerator, FrequencyModel, SpellingCorrector};

const CORPUS: &str = include_str!("../tests/fixtures/corpus.txt");

/// Benchmark corpus tokenization and model construction.
fn bench_model_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("model");

    group.throughput(Throughput::Bytes(CORPUS.len() as u64));
    group.bench_function("tokenize_corpus", |b| {
        b.iter(|| black_box(words(black_box(CORPUS)).count()))
    });

    group.bench_function("build_model", |b| {
        b.iter(|| black_box(FrequencyModel::from_corpus(black_box(CORPUS))))
    });

    group.finish();
}

/// Benchmark the edit generators.
fn bench_edit_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("edits");
    let generator = EditGenerator::new();

    for word in ["teh", "somthing", "inconvient"] {
        group.bench_with_input(BenchmarkId::new("edits1", word), word, |b, word| {
            b.iter(|| black_box(generator.edits1(black_box(word))))
        });
    }

    group.sample_size(10);
    group.bench_function("edits2_somthing", |b| {
        b.iter(|| black_box(generator.edits2(black_box("somthing")).count()))
    });

    group.finish();
}

/// Benchmark correction against the fixture corpus.
fn bench_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("correction");
    group.sample_size(20);

    let corrector = SpellingCorrector::new(Arc::new(FrequencyModel::from_corpus(CORPUS)));

    let cases = [
        ("known", "bicycle"),
        ("tier_one", "speling"),
        ("tier_two", "korrectud"),
        ("fallback", "quintessential"),
    ];
    for (label, word) in cases {
        group.bench_with_input(BenchmarkId::new("correct", label), word, |b, word| {
            b.iter(|| black_box(corrector.correct(black_box(word))))
        });
    }

    let misspellings = ["speling", "bycycle", "peotry", "techer", "lettr"];
    group.throughput(Throughput::Elements(misspellings.len() as u64));
    group.bench_function("correct_batch_words", |b| {
        b.iter(|| {
            for word in &misspellings {
                black_box(corrector.correct(black_box(word)));
            }
        })
    });

    group.finish();
}

/// Benchmark the restricted third tier.
fn bench_tier3(c: &mut Criterion) {
    let mut group = c.benchmark_group("tier3");
    group.sample_size(10);

    let corrector = SpellingCorrector::new(Arc::new(FrequencyModel::from_corpus(CORPUS)));
    group.bench_function("correct_nesesery", |b| {
        b.iter(|| black_box(corrector.correct_with(black_box("nesesery"), true)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_model_construction,
    bench_edit_generation,
    bench_correction
);

// Separate group for slower benchmarks
criterion_group!(slow_benches, bench_tier3);

criterion_main!(benches, slow_benches);

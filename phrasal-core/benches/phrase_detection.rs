//! Performance benchmarks for PhraseDetector
//!
//! Run with: cargo bench --bench phrase_detection

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use phrasal_core::{DetectionMode, PhraseDetector, Token};
use std::hint::black_box;

/// Generate a token sequence of the given length
fn generate_tokens(count: usize) -> Vec<Token> {
    let base = "Am Morgen geht die kleine Familie mit dem Hund in den Park , und die Kinder spielen lange .";
    Token::sequence(base.split_whitespace().cycle().take(count))
}

/// Benchmark different input lengths
fn bench_token_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("token_counts");

    let detector = PhraseDetector::new();

    for count in [20, 200, 2_000, 20_000] {
        let tokens = generate_tokens(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("detect", count), &tokens, |b, tokens| {
            b.iter(|| detector.detect(black_box(tokens)));
        });
    }

    group.finish();
}

/// Benchmark each detection mode on a story-length input
fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");

    let detector = PhraseDetector::new();
    let tokens = generate_tokens(500);

    for mode in DetectionMode::ALL {
        group.bench_with_input(BenchmarkId::new("mode", mode), &tokens, |b, tokens| {
            b.iter(|| detector.detect_with_mode(black_box(tokens), mode));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_token_counts, bench_modes);
criterion_main!(benches);

//! Criterion benchmarks for the Remez core paths:
//! - gematria encoding
//! - value index construction
//! - match engine searches
//! - trend scanning

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use remez::catalog::SectionCatalog;
use remez::corpus::{RawCorpus, Verse};
use remez::gematria::encode;
use remez::index::ValueIndex;
use remez::search::{MatchEngine, SearchRequest};
use remez::trends::TrendScanner;
use std::hint::black_box;

/// Generate a synthetic verse corpus for benchmarking.
fn generate_corpus(count: usize) -> Vec<Verse> {
    let words = [
        "בראשית", "ברא", "אלהים", "את", "השמים", "והארץ", "משה", "תורה", "ישראל", "מלך",
        "דבר", "ארץ", "עם", "יום", "לילה", "אור",
    ];
    (0..count)
        .map(|i| {
            let text = (0..8)
                .map(|j| words[(i * 3 + j * 7) % words.len()])
                .collect::<Vec<_>>()
                .join(" ");
            Verse {
                reference: format!("Genesis {}:{}", i / 26 + 1, i % 26 + 1),
                book: "Genesis".to_string(),
                text,
                original_text: None,
                english_text: None,
            }
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    let phrase = "בראשית ברא אלהים את השמים ואת הארץ";
    group.throughput(Throughput::Bytes(phrase.len() as u64));
    group.bench_function("phrase", |b| b.iter(|| encode(black_box(phrase))));
    group.bench_function("numeric_shortcut", |b| b.iter(|| encode(black_box("613"))));
    group.finish();
}

fn bench_index_build(c: &mut Criterion) {
    let raw = RawCorpus::Verses(generate_corpus(5000));
    c.bench_function("index_build_5k_verses", |b| {
        b.iter(|| ValueIndex::build(black_box(&raw)))
    });
}

fn bench_search(c: &mut Criterion) {
    let raw = RawCorpus::Verses(generate_corpus(5000));
    let index = ValueIndex::build(&raw);
    let catalog = SectionCatalog::torah();
    let engine = MatchEngine::new();

    let mut group = c.benchmark_group("search");
    group.bench_function("standard", |b| {
        b.iter(|| engine.search(black_box(&SearchRequest::standard(611)), &index, &catalog))
    });
    group.bench_function("tolerance", |b| {
        b.iter(|| {
            engine.search(
                black_box(&SearchRequest::standard(611).tolerance(true)),
                &index,
                &catalog,
            )
        })
    });
    group.bench_function("scoped", |b| {
        b.iter(|| {
            engine.search(
                black_box(&SearchRequest::standard(611).in_section("Bereshit")),
                &index,
                &catalog,
            )
        })
    });
    group.finish();
}

fn bench_trend_scan(c: &mut Criterion) {
    let corpus = generate_corpus(5000);
    let scanner = TrendScanner::new();
    c.bench_function("trend_scan_5k_verses", |b| {
        b.iter(|| scanner.scan(black_box(&corpus), &["משה", "תורה"], true))
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_index_build,
    bench_search,
    bench_trend_scan
);
criterion_main!(benches);

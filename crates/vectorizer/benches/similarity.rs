//! Benchmarks for vocabulary fitting and similarity matrix construction
//!
//! Run with: cargo bench --package vectorizer
//!
//! Uses a synthetic corpus so the benchmark runs without the TMDB files.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vectorizer::{fit_transform, SimilarityMatrix, DEFAULT_MAX_FEATURES};

const WORDS: &[&str] = &[
    "space", "heist", "dream", "ocean", "robot", "war", "love", "family", "detective", "murder",
    "alien", "ship", "king", "castle", "school", "music", "dance", "city", "desert", "train",
];

fn synthetic_corpus(size: usize) -> Vec<String> {
    (0..size)
        .map(|i| {
            (0..30)
                .map(|k| WORDS[(i * 7 + k * 13 + k * k) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
                + &format!(" director{} actor{} actor{}", i % 97, i % 31, i % 53)
        })
        .collect()
}

fn bench_fit_transform(c: &mut Criterion) {
    let corpus = synthetic_corpus(2000);

    c.bench_function("fit_transform_2000", |b| {
        b.iter(|| {
            let result = fit_transform(black_box(&corpus), DEFAULT_MAX_FEATURES);
            black_box(result)
        })
    });
}

fn bench_similarity_matrix(c: &mut Criterion) {
    let corpus = synthetic_corpus(2000);
    let (_, vectors) = fit_transform(&corpus, DEFAULT_MAX_FEATURES);

    c.bench_function("similarity_matrix_2000", |b| {
        b.iter(|| {
            let matrix = SimilarityMatrix::build(black_box(&vectors));
            black_box(matrix)
        })
    });
}

criterion_group!(benches, bench_fit_transform, bench_similarity_matrix);
criterion_main!(benches);

//! Criterion micro-benchmarks for dictionary lookups.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use goggle_bench::large_profile;

/// Benchmark: narrow the full candidate set one letter at a time along
/// every word in the list.
fn bench_progressive_filter(c: &mut Criterion) {
    let p = large_profile(7);
    let words: Vec<String> = p.dict.words().to_vec();

    c.bench_function("progressive_filter", |b| {
        b.iter(|| {
            for word in &words {
                let mut view = p.dict.candidates();
                for end in 1..=word.len() {
                    view = view.filter(&word[..end]);
                }
                black_box(view.contains(word));
            }
        });
    });
}

/// Benchmark: membership test against the whole list.
fn bench_contains(c: &mut Criterion) {
    let p = large_profile(7);
    let misses: Vec<String> = p.dict.words().iter().map(|w| format!("{w}x")).collect();

    c.bench_function("contains_miss", |b| {
        b.iter(|| {
            for miss in &misses {
                black_box(p.dict.contains(miss));
            }
        });
    });
}

criterion_group!(benches, bench_progressive_filter, bench_contains);
criterion_main!(benches);

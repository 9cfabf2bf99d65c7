//! Benchmarks for sign codec and collation operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gardiner_tools::collate::{self, DEMO_WORDS};
use gardiner_tools::glyph::{SignCodec, SignList};

fn catalog_codes() -> String {
    SignList::standard()
        .codes()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("-")
}

fn bench_encode(c: &mut Criterion) {
    let codec = SignCodec::unicode();
    let input = catalog_codes();

    c.bench_function("encode_catalog_744", |bench| {
        bench.iter(|| black_box(codec.encode(&input).unwrap()))
    });
}

fn bench_decode(c: &mut Criterion) {
    let codec = SignCodec::unicode();
    let glyphs = codec.encode(&catalog_codes()).unwrap();

    c.bench_function("decode_catalog_744", |bench| {
        bench.iter(|| black_box(codec.decode(&glyphs).unwrap()))
    });
}

fn bench_sort(c: &mut Criterion) {
    let words: Vec<&str> = DEMO_WORDS.iter().copied().cycle().take(1_000).collect();

    c.bench_function("sort_1k_words", |bench| {
        bench.iter(|| black_box(collate::sort(words.iter().copied()).unwrap()))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_sort);
criterion_main!(benches);

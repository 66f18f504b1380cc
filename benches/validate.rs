//! Criterion benchmarks for tokenizing and validating JSON documents.
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use jsonvet::{tokenizer, validator};

/// Builds a nested document `depth` levels deep with `width` members per
/// level.
fn nested_document(depth: usize, width: usize) -> String {
    if depth == 0 {
        return r#"{"leaf": [1, 2.5, -3e8, "text", true, false, null]}"#
            .to_string();
    }
    let inner = nested_document(depth - 1, width);
    let members: Vec<String> = (0..width)
        .map(|i| format!(r#""k{i}": {inner}"#))
        .collect();
    format!("{{{}}}", members.join(", "))
}

fn bench_tokenize(c: &mut Criterion) {
    let doc = nested_document(5, 3);
    c.bench_function("tokenize", |b| {
        b.iter(|| tokenizer::tokenize(black_box(&doc)).unwrap());
    });
}

fn bench_validate(c: &mut Criterion) {
    let doc = nested_document(5, 3);
    c.bench_function("validate", |b| {
        b.iter(|| {
            let tokens = tokenizer::tokenize(black_box(&doc)).unwrap();
            validator::validate(tokens).unwrap();
        });
    });
}

criterion_group!(benches, bench_tokenize, bench_validate);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use dayfmt::{DateOffsetFormatter, FunctionRegistry, NUMBER_TO_DATE};

fn bench_format(c: &mut Criterion) {
    let formatter = DateOffsetFormatter::new();
    let registry = FunctionRegistry::with_defaults();

    c.bench_function("format", |b| {
        b.iter(|| formatter.format(black_box(1234.0)).unwrap())
    });

    c.bench_function("format_days", |b| {
        b.iter(|| formatter.format_days(black_box(1234)).unwrap())
    });

    c.bench_function("registry_call", |b| {
        b.iter(|| registry.call(NUMBER_TO_DATE, black_box(1234.0)).unwrap())
    });
}

criterion_group!(benches, bench_format);
criterion_main!(benches);

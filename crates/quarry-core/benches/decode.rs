//! Decoding benchmarks.
//!
//! Run with: `cargo bench -p quarry-core`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quarry_core::schema::NumberFromString;
use quarry_core::{
    array, field, get_or_else, integer, number, object, record, string, QueryParams,
};

fn build_params(extra: usize) -> QueryParams {
    let mut params = QueryParams::parse("q=rust&page=3.5&ids=1,2,3,4,5&filter=a[b]=1%26c[]=2")
        .unwrap_or_default();
    for i in 0..extra {
        params.push(format!("noise{i}"), format!("value{i}"));
    }
    params
}

fn bench_primitives(c: &mut Criterion) {
    let params = build_params(0);

    c.bench_function("string", |b| {
        b.iter(|| black_box(string(&params, "q")));
    });

    c.bench_function("number", |b| {
        b.iter(|| black_box(number(&params, "page")));
    });

    c.bench_function("integer", |b| {
        b.iter(|| black_box(integer(&params, "page")));
    });
}

fn bench_composites(c: &mut Criterion) {
    let params = build_params(0);

    c.bench_function("array", |b| {
        b.iter(|| black_box(array(&params, "ids", &NumberFromString)));
    });

    c.bench_function("object", |b| {
        b.iter(|| black_box(object(&params, "filter")));
    });

    let shape = (
        field("q", string),
        field("page", get_or_else(integer, || 1.0)),
        field("missing", number),
    );
    c.bench_function("record", |b| {
        b.iter(|| black_box(record(&params, &shape)));
    });
}

fn bench_parse_query(c: &mut Criterion) {
    c.bench_function("parse_query", |b| {
        b.iter(|| black_box(QueryParams::parse("q=hello+world&page=2&sort=desc&tag=a&tag=b")));
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for extra in [0, 10, 100, 1000] {
        let params = build_params(extra);

        group.bench_with_input(BenchmarkId::new("number_present", extra), &extra, |b, _| {
            b.iter(|| black_box(number(&params, "page")));
        });

        group.bench_with_input(BenchmarkId::new("miss", extra), &extra, |b, _| {
            b.iter(|| black_box(string(&params, "absent")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_primitives,
    bench_composites,
    bench_parse_query,
    bench_scaling
);
criterion_main!(benches);

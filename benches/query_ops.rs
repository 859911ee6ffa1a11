use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tabular_query::query::{
    distinct_values, extremum, filter, group_sum, summary_stats, ExtremumMode,
};
use tabular_query::types::{DataType, Field, RecordSet, Schema, Value};

fn synthetic_records(n: usize) -> RecordSet {
    let schema = Schema::new(vec![
        Field::new("zone", DataType::Utf8),
        Field::new("weight", DataType::Int64),
        Field::new("active", DataType::Bool),
    ]);
    let records = (0..n)
        .map(|i| {
            vec![
                Value::Utf8(format!("Zone {}", i % 26)),
                Value::Int64((i as i64 * 37) % 500),
                Value::Bool(i % 3 != 0),
            ]
        })
        .collect();
    RecordSet::new(schema, records)
}

fn bench_query_ops(c: &mut Criterion) {
    let rs = synthetic_records(10_000);
    let weight_idx = rs.schema.index_of("weight").unwrap();

    c.bench_function("group_sum_10k", |b| {
        b.iter(|| group_sum(black_box(&rs), "zone", "weight").unwrap())
    });

    c.bench_function("distinct_values_10k", |b| {
        b.iter(|| distinct_values(black_box(&rs), "zone").unwrap())
    });

    c.bench_function("extremum_max_10k", |b| {
        b.iter(|| extremum(black_box(&rs), "weight", ExtremumMode::Max).unwrap())
    });

    c.bench_function("filter_10k", |b| {
        b.iter(|| {
            filter(black_box(&rs), |record| {
                matches!(record[weight_idx], Value::Int64(w) if w >= 250)
            })
        })
    });

    c.bench_function("summary_stats_partitioned_10k", |b| {
        b.iter(|| summary_stats(black_box(&rs), "weight", Some("active")).unwrap())
    });
}

criterion_group!(benches, bench_query_ops);
criterion_main!(benches);

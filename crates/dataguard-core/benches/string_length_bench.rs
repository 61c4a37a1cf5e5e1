use std::sync::Arc;

use arrow_array::StringArray;
use criterion::{criterion_group, criterion_main, Criterion};
use dataguard_core::Column;
use std::hint::black_box;
use std::sync::LazyLock;

fn create_string_array(size: usize, avg_len: usize) -> StringArray {
    let modulus = 10usize.saturating_pow(avg_len as u32);
    let strings: Vec<Option<String>> = (0..size)
        .map(|i| Some(format!("{:0width$}", i % modulus, width = avg_len)))
        .collect();
    StringArray::from_iter(strings)
}

static PREBUILT_ARRAYS: LazyLock<Vec<(usize, Arc<StringArray>)>> = LazyLock::new(|| {
    [1_000usize, 10_000, 100_000, 300_000]
        .into_iter()
        .map(|size| (size, Arc::new(create_string_array(size, 8))))
        .collect()
});

fn bench_str_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("str_length");
    for (size, arr) in PREBUILT_ARRAYS.iter() {
        group.throughput(criterion::Throughput::Elements(*size as u64));
        group.bench_with_input(format!("array_size_{}", size), arr, |b, arr_ref| {
            let column = Column::String((**arr_ref).clone());
            b.iter(|| black_box(column.str_length().unwrap()));
        });
    }
    group.finish();
}

fn bench_length_between(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_between");
    for (size, arr) in PREBUILT_ARRAYS.iter() {
        group.throughput(criterion::Throughput::Elements(*size as u64));
        group.bench_with_input(format!("array_size_{}", size), arr, |b, arr_ref| {
            let column = Column::String((**arr_ref).clone());
            b.iter(|| black_box(column.length_between(5, 10).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_str_length, bench_length_between);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndoffset::reduce::{sum_column, sum_lane};
use ndoffset::{Layout, flatten, flatten_index};

const NR: usize = 1024;
const NC: usize = 64;

fn bench_flatten_index_macro(c: &mut Criterion) {
    c.bench_function("flatten_index_3d", |b| {
        b.iter(|| flatten_index!(black_box(3usize), 64, black_box(5), 32, black_box(7)))
    });
}

fn bench_flatten_slice(c: &mut Criterion) {
    let steps = [(64usize, 5usize), (32, 7)];
    c.bench_function("flatten_slice_3d", |b| {
        b.iter(|| flatten(black_box(3usize), black_box(&steps)))
    });
}

fn bench_naive_vs_lane(c: &mut Criterion) {
    let layout = Layout::new(&[NR, NC]).unwrap();

    c.bench_function("column_offsets_naive", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for r in 0..NR {
                acc ^= layout.offset(black_box(&[r, 17][..]));
            }
            acc
        })
    });

    c.bench_function("column_offsets_lane", |b| {
        b.iter(|| {
            let lane = layout.lane(black_box(&[0usize, 17][..]), 0).unwrap();
            lane.iter().fold(0usize, |acc, offset| acc ^ offset)
        })
    });
}

fn bench_sum_column(c: &mut Criterion) {
    let mat: Vec<f64> = (0..NR * NC).map(|i| i as f64).collect();
    let layout = Layout::new(&[NR, NC]).unwrap();
    let lane = layout.lane(&[0, 17], 0).unwrap();

    c.bench_function("sum_column", |b| {
        b.iter(|| sum_column(black_box(&mat), NR, NC, black_box(0), black_box(17)))
    });

    c.bench_function("sum_lane", |b| {
        b.iter(|| sum_lane(black_box(&mat), black_box(&lane)))
    });
}

criterion_group!(
    benches,
    bench_flatten_index_macro,
    bench_flatten_slice,
    bench_naive_vs_lane,
    bench_sum_column,
);
criterion_main!(benches);

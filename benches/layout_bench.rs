use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndoffset::Layout;

fn bench_layout_new(c: &mut Criterion) {
    c.bench_function("layout_new", |b| {
        b.iter(|| Layout::new(black_box(&[8usize, 16, 32][..])))
    });
}

fn bench_checked_offset(c: &mut Criterion) {
    let layout = Layout::new(&[8, 16, 32]).unwrap();
    c.bench_function("checked_offset", |b| {
        b.iter(|| layout.checked_offset(black_box(&[3usize, 9, 27][..])))
    });
}

fn bench_coords(c: &mut Criterion) {
    let layout = Layout::new(&[8, 16, 32]).unwrap();
    c.bench_function("coords", |b| {
        b.iter(|| layout.coords(black_box(2_345)))
    });
}

fn bench_is_bijective(c: &mut Criterion) {
    let layout = Layout::new(&[8, 16, 32]).unwrap();
    c.bench_function("is_bijective", |b| {
        b.iter(|| layout.is_bijective())
    });
}

criterion_group!(
    benches,
    bench_layout_new,
    bench_checked_offset,
    bench_coords,
    bench_is_bijective
);
criterion_main!(benches);

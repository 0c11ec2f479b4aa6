use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use span_tuple::{span, span_mut, ArrayTuple};
use std::time::Duration;

// Compare reading three zipped slices with reading a span of the same columns.
fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read/dot");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for len in [64usize, 4096, 1 << 16] {
        let xs: Vec<f64> = (0..len).map(|i| i as f64).collect();
        let ys: Vec<f64> = (0..len).map(|i| (len - i) as f64).collect();
        let ws: Vec<u32> = (0..len as u32).map(|i| i % 7).collect();

        // 1. std zip
        group.bench_with_input(BenchmarkId::new("zip", len), &len, |bencher, _| {
            bencher.iter(|| {
                let mut total = 0.0;
                for ((x, y), w) in xs.iter().zip(&ys).zip(&ws) {
                    total += x * y * *w as f64;
                }
                black_box(total)
            })
        });

        // 2. span iteration
        group.bench_with_input(BenchmarkId::new("span", len), &len, |bencher, _| {
            bencher.iter(|| {
                let mut total = 0.0;
                for (x, y, w) in span((&xs, &ys, &ws)) {
                    total += x * y * *w as f64;
                }
                black_box(total)
            })
        });
    }

    group.finish();
}

// Compare updating positions in place through zipped slices and through a span.
fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write/step");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let len = 4096;
    let mut xs = vec![0.0f32; len];
    let vs: Vec<f32> = (0..len).map(|i| i as f32 * 0.001).collect();
    let mut vs_mut = vs.clone();

    group.bench_function("zip", |bencher| {
        bencher.iter(|| {
            for (x, v) in xs.iter_mut().zip(&vs) { *x += *v; }
            black_box(&xs);
        })
    });

    group.bench_function("span_mut", |bencher| {
        bencher.iter(|| {
            for (x, v) in span_mut((&mut xs, &mut vs_mut)) { *x += *v; }
            black_box(&xs);
        })
    });

    group.finish();
}

fn bench_array_tuple(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_tuple/fill");
    let mut a: ArrayTuple<(u64, f32, u8), 256> = ArrayTuple::new();
    group.bench_function("fill", |bencher| {
        bencher.iter(|| {
            a.fill(black_box((1, 2.0, 3)));
            black_box(a.column::<1>());
        })
    });
    group.finish();
}

criterion_group!(benches, bench_read, bench_write, bench_array_tuple);
criterion_main!(benches);

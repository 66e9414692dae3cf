use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lanewise::{Backend, Convert, FusedMultiplyAdd, MinMax, Native, Register, Scalar, Vector, bf16};

// ---------------------------------------------------------------------------
// Helpers: kernels written once against the vector contract
// ---------------------------------------------------------------------------

/// `y = a * x + y` over a slice, 16 lanes at a time, tail via partial access.
fn axpy<B: FusedMultiplyAdd<f32, 16>>(a: f32, x: &[f32], y: &mut [f32]) {
    let av = Vector::<B, f32, 16>::splat(a);
    let mut i = 0;
    while i + 16 <= x.len() {
        let xv = Vector::<B, f32, 16>::from_slice(&x[i..]);
        let yv = Vector::<B, f32, 16>::from_slice(&y[i..]);
        av.mul_add(xv, yv).write_to_slice(&mut y[i..]);
        i += 16;
    }
    let xv = Vector::<B, f32, 16>::load_prefix(&x[i..]);
    let yv = Vector::<B, f32, 16>::load_prefix(&y[i..]);
    av.mul_add(xv, yv).store_prefix(&mut y[i..]);
}

fn max_u8<B: MinMax<u8, 64>>(data: &[u8]) -> u8 {
    let mut acc = Vector::<B, u8, 64>::splat(0);
    for chunk in data.chunks(64) {
        acc = acc.max(Vector::<B, u8, 64>::load_prefix(chunk));
    }
    acc.horizontal_max()
}

fn to_bf16<B>(src: &[f32], dst: &mut [bf16])
where
    B: Convert<f32, bf16, 16> + Register<f32, 16> + Register<bf16, 16>,
{
    for (s, d) in src.chunks_exact(16).zip(dst.chunks_exact_mut(16)) {
        Vector::<B, f32, 16>::from_slice(s).convert::<bf16>().write_to_slice(d);
    }
}

fn name<B: Backend>() -> &'static str {
    B::NAME
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_axpy(c: &mut Criterion) {
    let x: Vec<f32> = (0..4099).map(|i| i as f32 * 0.5).collect();
    let mut y = vec![1.0_f32; x.len()];
    let mut g = c.benchmark_group("axpy_4099");
    g.bench_function(name::<Scalar>(), |b| b.iter(|| axpy::<Scalar>(black_box(1.5), &x, &mut y)));
    if name::<Native>() != name::<Scalar>() {
        g.bench_function(name::<Native>(), |b| b.iter(|| axpy::<Native>(black_box(1.5), &x, &mut y)));
    }
    g.finish();
}

fn bench_max_u8(c: &mut Criterion) {
    let data: Vec<u8> = (0..65_537_u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
    let mut g = c.benchmark_group("max_u8_64k");
    g.bench_function(name::<Scalar>(), |b| b.iter(|| max_u8::<Scalar>(black_box(&data))));
    if name::<Native>() != name::<Scalar>() {
        g.bench_function(name::<Native>(), |b| b.iter(|| max_u8::<Native>(black_box(&data))));
    }
    g.finish();
}

fn bench_to_bf16(c: &mut Criterion) {
    let src: Vec<f32> = (0..4096).map(|i| (i as f32).sin()).collect();
    let mut dst = vec![bf16::ZERO; src.len()];
    let mut g = c.benchmark_group("f32_to_bf16_4096");
    g.bench_function(name::<Scalar>(), |b| b.iter(|| to_bf16::<Scalar>(black_box(&src), &mut dst)));
    if name::<Native>() != name::<Scalar>() {
        g.bench_function(name::<Native>(), |b| b.iter(|| to_bf16::<Native>(black_box(&src), &mut dst)));
    }
    g.finish();
}

criterion_group!(benches, bench_axpy, bench_max_u8, bench_to_bf16);
criterion_main!(benches);

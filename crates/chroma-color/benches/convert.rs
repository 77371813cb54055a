//! Benchmarks for the conversion hot paths.
//!
//! Run with: cargo bench -p chroma-color

use chroma_color::deltae::{KLCh, cie2000};
use chroma_color::{Compander, Lab, Rgb, RgbTransformer, Scaler, space};
use chroma_math::{BRADFORD, Vec3};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_cie2000(c: &mut Criterion) {
    let reference = Lab::new(50.0, 2.6772, -79.7751);
    let sample = Lab::new(50.0, 0.0, -82.7485);
    let klch = KLCh::default();

    c.bench_function("cie2000", |b| {
        b.iter(|| cie2000(black_box(reference), black_box(sample), &klch))
    });
}

fn bench_rgb_xyz_roundtrip(c: &mut Criterion) {
    let t = RgbTransformer::builder(&space::SRGB)
        .adaptation(BRADFORD)
        .scaler(Scaler::Bits8)
        .build()
        .unwrap();
    let rgb = Rgb::new(60.0, 92.0, 180.0);

    c.bench_function("rgb_xyz_roundtrip", |b| {
        b.iter(|| {
            let xyz = t.convert(black_box(rgb));
            t.invert(xyz)
        })
    });
}

fn bench_srgb_decode(c: &mut Criterion) {
    let exact = Compander::Srgb.bind(&space::SRGB);
    let fast = Compander::SrgbFast.bind(&space::SRGB);

    let mut group = c.benchmark_group("srgb_decode");
    group.bench_function("exact", |b| {
        let p = Vec3::new(0.2, 0.4, 0.8);
        b.iter(|| exact.decode(black_box(p)))
    });
    group.bench_function("table_8bit", |b| {
        let p = Vec3::new(15.0, 200.0, 39.0);
        b.iter(|| fast.decode(black_box(p)))
    });
    group.finish();
}

fn bench_srgb_encode_decode(c: &mut Criterion) {
    let compander = Compander::Srgb.bind(&space::SRGB);

    c.bench_function("srgb_encode_decode", |b| {
        b.iter(|| {
            let p = compander.encode(black_box(Vec3::new(0.2, 0.4, 0.8)));
            compander.decode(p)
        })
    });
}

criterion_group!(
    benches,
    bench_cie2000,
    bench_rgb_xyz_roundtrip,
    bench_srgb_decode,
    bench_srgb_encode_decode
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use colorhub::{convert, map_gamut, ColorSpace, GamutMapping};

/// Generate Display P3 colors, most of which are out of gamut for sRGB.
fn prepare(count: usize) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(665);

    (0..count)
        .map(|_| {
            let p3 = [
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
                rng.random_range(0.0..1.0),
            ];
            convert(ColorSpace::DisplayP3, ColorSpace::Srgb, &p3)
        })
        .collect()
}

pub fn run_benchmarks(c: &mut Criterion) {
    let colors = prepare(1_000);

    let mut group = c.benchmark_group("p3-to-srgb");

    group.bench_function("bisection", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(map_gamut(
                    ColorSpace::Srgb,
                    black_box(color),
                    GamutMapping::Bisection,
                ));
            }
        })
    });

    group.bench_function("ray-trace", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(map_gamut(
                    ColorSpace::Srgb,
                    black_box(color),
                    GamutMapping::RayTrace,
                ));
            }
        })
    });

    group.bench_function("clip", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(ColorSpace::Srgb.clip(black_box(color)));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);

//! Criterion benchmarks for pxscale critical paths
//!
//! Benchmarks the core performance-critical operations:
//! - Heuristic: the color-distance edge test
//! - Scale2x: serial and band-parallel single passes over sprite sizes
//! - Upscale: the three-pass 8x chain used before rotation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use image::{Rgba, RgbaImage};
use pxscale::color::PixelColor;
use pxscale::scale2x::{closer_or_equal, scale2x, scale2x_parallel, upscale, Scale2xOptions};

// =============================================================================
// Test Data Generators
// =============================================================================

/// Sprite-like image: diagonal bands of four colors with a transparent border.
fn make_sprite(size: u32) -> RgbaImage {
    let colors = [
        Rgba([20, 20, 30, 255]),
        Rgba([200, 60, 40, 255]),
        Rgba([240, 200, 80, 255]),
        Rgba([60, 120, 220, 255]),
    ];
    RgbaImage::from_fn(size, size, |x, y| {
        if x == 0 || y == 0 || x + 1 == size || y + 1 == size {
            Rgba([0, 0, 0, 0])
        } else {
            colors[((x + 2 * y) / 3 % 4) as usize]
        }
    })
}

// =============================================================================
// Heuristic Benchmarks
// =============================================================================

fn bench_heuristic(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic");

    let a = PixelColor::new(200, 60, 40, 255);
    let b = PixelColor::new(190, 70, 45, 255);
    let far = PixelColor::new(20, 20, 30, 255);

    group.bench_function("closer_or_equal_equal", |bench| {
        bench.iter(|| closer_or_equal(black_box(a), black_box(a), black_box(far)))
    });
    group.bench_function("closer_or_equal_distance", |bench| {
        bench.iter(|| closer_or_equal(black_box(a), black_box(b), black_box(far)))
    });

    group.finish();
}

// =============================================================================
// Scale2x Benchmarks
// =============================================================================

fn bench_scale2x(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale2x");

    for size in [16u32, 64, 256].iter() {
        let sprite = make_sprite(*size);
        group.throughput(Throughput::Elements((*size * *size) as u64));

        group.bench_with_input(BenchmarkId::new("serial", size), &sprite, |b, sprite| {
            let mut out = RgbaImage::new(size * 2, size * 2);
            b.iter(|| scale2x(&mut out, black_box(sprite), *size, *size))
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &sprite, |b, sprite| {
            let mut out = vec![0u8; (size * 2 * size * 2 * 4) as usize];
            b.iter(|| scale2x_parallel(&mut out, black_box(sprite), *size, *size))
        });
    }

    group.finish();
}

// =============================================================================
// Upscale Benchmarks
// =============================================================================

fn bench_upscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("upscale");
    let sprite = make_sprite(32);

    group.bench_function("rotsprite_8x_32", |b| {
        b.iter(|| upscale(black_box(&sprite), &Scale2xOptions::rotsprite()))
    });
    group.bench_function("rotsprite_8x_32_serial", |b| {
        let options = Scale2xOptions::serial().with_passes(3);
        b.iter(|| upscale(black_box(&sprite), &options))
    });

    group.finish();
}

criterion_group!(benches, bench_heuristic, bench_scale2x, bench_upscale);
criterion_main!(benches);

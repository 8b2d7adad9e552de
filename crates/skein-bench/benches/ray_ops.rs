//! Criterion micro-benchmarks for ray construction and comparison.
//!
//! The renderer calls `is_between` a handful of times per visited
//! tile, so its cost bounds the whole visibility pass.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skein_ray::Ray;

/// Direction vectors covering every octant plus the axis sentinels.
fn fan() -> Vec<Ray> {
    let mut rays = Vec::new();
    for x in -7i64..=7 {
        for y in -7i64..=7 {
            if (x, y) != (0, 0) {
                rays.push(Ray::new(x, y));
            }
        }
    }
    rays
}

fn bench_construction(c: &mut Criterion) {
    c.bench_function("ray_new_fan", |b| {
        b.iter(|| {
            let mut count = 0usize;
            for x in -7i64..=7 {
                for y in -7i64..=7 {
                    if (x, y) != (0, 0) {
                        black_box(Ray::new(black_box(x), black_box(y)));
                        count += 1;
                    }
                }
            }
            count
        })
    });
}

fn bench_is_between(c: &mut Criterion) {
    let rays = fan();
    c.bench_function("ray_is_between_fan", |b| {
        b.iter(|| {
            let mut inside = 0usize;
            for window in rays.windows(3) {
                if window[1].is_between(&window[0], &window[2]) {
                    inside += 1;
                }
            }
            black_box(inside)
        })
    });
}

fn bench_transpose(c: &mut Criterion) {
    let rays = fan();
    c.bench_function("ray_transpose_fan", |b| {
        b.iter(|| {
            rays.iter()
                .map(|r| black_box(r.transpose()))
                .filter(|t| t.is_lower)
                .count()
        })
    });
}

criterion_group!(
    benches,
    bench_construction,
    bench_is_between,
    bench_transpose
);
criterion_main!(benches);

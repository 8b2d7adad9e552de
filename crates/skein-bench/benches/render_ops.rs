//! Criterion benchmarks for full visibility passes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skein_bench::open_room_text;
use skein_level::parse_level;
use skein_render::{render, Viewport};
use skein_test_utils::SolidTextures;

fn bench_open_room(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_open_room");
    for (size, view_dist) in [(7usize, 3u32), (15, 7), (31, 15)] {
        let level = parse_level(&open_room_text(size)).unwrap();
        let viewport = Viewport::new(16, view_dist);
        let textures = SolidTextures::new(16);
        group.bench_function(format!("view_{view_dist}"), |b| {
            b.iter(|| {
                black_box(render(
                    &level.graph,
                    level.players[0],
                    viewport,
                    &textures,
                ))
            })
        });
    }
    group.finish();
}

fn bench_looped_corridor(c: &mut Criterion) {
    // A self-wrapping tile repeats down the whole view column, so the
    // pass cost is all recursion and clipping, no level size.
    let level = parse_level(concat!(
        "skein neighbors\n",
        "p player 2p 0 0p 0\n",
    ))
    .unwrap();
    let viewport = Viewport::new(16, 15);
    let textures = SolidTextures::new(16);
    c.bench_function("render_looped_corridor", |b| {
        b.iter(|| {
            black_box(render(
                &level.graph,
                level.players[0],
                viewport,
                &textures,
            ))
        })
    });
}

criterion_group!(benches, bench_open_room, bench_looped_corridor);
criterion_main!(benches);

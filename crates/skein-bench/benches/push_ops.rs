//! Criterion benchmarks for push transactions.
//!
//! A forward/back oscillation in an open room is steady-state: each
//! forward consumes the empty ahead and synthesizes one behind, the
//! back step undoes it, so iterations measure a full consume + spawn
//! + commit + verify cycle without the room drifting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skein_bench::room_session;
use skein_engine::MoveDir;

fn bench_oscillation(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_oscillation");
    for size in [5usize, 15, 31] {
        group.bench_function(format!("room_{size}"), |b| {
            let mut session = room_session(size);
            b.iter(|| {
                let out = session.step(MoveDir::Forward).unwrap();
                black_box(out.moved);
                let out = session.step(MoveDir::Back).unwrap();
                black_box(out.moved)
            })
        });
    }
    group.finish();
}

fn bench_blocked(c: &mut Criterion) {
    // A push straight into the border wall: the cheapest possible
    // failure, dominated by rollback and re-verification.
    let mut session = room_session(3);
    session.step(MoveDir::Forward).unwrap();
    c.bench_function("push_blocked", |b| {
        b.iter(|| black_box(session.step(MoveDir::Forward).unwrap().moved))
    });
}

criterion_group!(benches, bench_oscillation, bench_blocked);
criterion_main!(benches);

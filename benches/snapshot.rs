use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hifitime::{Epoch, Unit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hilal::coordinates::EquatorialCoord;
use hilal::elongation::elongation;
use hilal::engine::HilalEngine;
use hilal::time::julian_day;

/// One full evaluation at the fixed sunset target.
fn bench_target_snapshot(c: &mut Criterion) {
    let engine = HilalEngine::default();
    let instant = Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0);

    c.bench_function("snapshot/target_ghurub", |b| {
        b.iter(|| engine.snapshot(black_box(&instant)))
    });
}

/// Evaluations over a spread of instants, as a watch loop would see them.
fn bench_snapshot_sweep(c: &mut Criterion) {
    let engine = HilalEngine::default();
    let start = Epoch::from_gregorian_utc(2026, 1, 1, 0, 0, 0, 0);
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let samples = 1_000usize;

    c.bench_function("snapshot/sweep_2026", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| start + Unit::Day * rng.random_range(0.0..365.0))
                    .collect::<Vec<_>>()
            },
            |instants| {
                for t in &instants {
                    black_box(engine.snapshot(t));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_building_blocks(c: &mut Criterion) {
    let instant = Epoch::from_gregorian_utc(2026, 2, 17, 10, 5, 0, 0);
    let sun = EquatorialCoord::new(-29.105824346332398, -11.908487176731697);
    let moon = EquatorialCoord::new(326.5148998796171, -0.6136451218971154);

    c.bench_function("julian_day", |b| b.iter(|| julian_day(black_box(&instant))));
    c.bench_function("elongation", |b| {
        b.iter(|| elongation(black_box(&sun), black_box(&moon)))
    });
}

criterion_group!(
    benches,
    bench_target_snapshot,
    bench_snapshot_sweep,
    bench_building_blocks
);
criterion_main!(benches);

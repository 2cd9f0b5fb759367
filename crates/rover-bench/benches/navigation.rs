//! Criterion benchmarks for end-to-end navigation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rover_bench::{random_mission, reference_mission, stress_mission};
use rover_core::Command;
use rover_engine::{drive, NavigationEngine};
use rover_grid::GridEnvironment;
use rover_kinematics::Rover;

/// Benchmark: full navigation of a 100x100 sweep (validation, build, drive).
fn bench_reference_sweep(c: &mut Criterion) {
    let engine = NavigationEngine::new();
    let mission = reference_mission();

    c.bench_function("navigate_reference_sweep", |b| {
        b.iter(|| black_box(engine.run(black_box(&mission))));
    });
}

/// Benchmark: full navigation of a 1000x1000 sweep.
fn bench_stress_sweep(c: &mut Criterion) {
    let engine = NavigationEngine::new();
    let mission = stress_mission();

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("navigate_stress_sweep", |b| {
        b.iter(|| black_box(engine.run(black_box(&mission))));
    });
    group.finish();
}

/// Benchmark: interpretation loop only, against a prebuilt grid.
fn bench_drive_only(c: &mut Criterion) {
    let mission = reference_mission();
    let grid = GridEnvironment::new(mission.size, mission.obstacles.iter().copied());
    let commands = Command::parse_sequence(&mission.commands).unwrap();

    c.bench_function("drive_reference_sweep", |b| {
        b.iter_batched(
            Rover::default,
            |mut rover| black_box(drive(&grid, &mut rover, &commands)),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: 1000 seeded random missions, most halting early.
fn bench_random_missions(c: &mut Criterion) {
    let engine = NavigationEngine::new();
    let missions: Vec<_> = (0..1000u64)
        .map(|seed| random_mission(seed, 50, 100, 200))
        .collect();

    c.bench_function("navigate_random_1000", |b| {
        b.iter(|| {
            for mission in &missions {
                black_box(engine.run(mission));
            }
        });
    });
}

/// Benchmark: rejection of a mission with an unknown command at the end.
fn bench_rejection(c: &mut Criterion) {
    let engine = NavigationEngine::new();
    let commands = format!("{}X", "M".repeat(10_000));

    c.bench_function("reject_invalid_10k", |b| {
        b.iter(|| black_box(engine.navigate(100, Vec::new(), black_box(&commands))));
    });
}

criterion_group!(
    benches,
    bench_reference_sweep,
    bench_stress_sweep,
    bench_drive_only,
    bench_random_missions,
    bench_rejection,
);
criterion_main!(benches);

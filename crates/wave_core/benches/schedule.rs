//! Schedule building benchmarks for wave_core.
//!
//! Run with: `cargo bench -p wave_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wave_core::prelude::*;

fn bench_pool() -> Vec<UnitType> {
    vec![
        UnitType::new("crawler", 1.0),
        UnitType::elite_of("crawler_elite", "crawler", 3.0),
        UnitType::new("spitter", 2.0),
        UnitType::elite_of("spitter_elite", "spitter", 5.0),
        UnitType::new("brute", 6.0),
        UnitType::new("broodmother", 25.0).with_tier(ScalingTier::Boss),
    ]
}

/// Builds schedules of increasing budget with each built-in pattern.
pub fn schedule_benchmark(c: &mut Criterion) {
    let pool = bench_pool();
    let patterns: [(&str, Box<dyn SpawnPattern>); 3] = [
        ("continuous", Box::new(Continuous::default())),
        ("burst", Box::new(Burst::new(4, 0.3))),
        ("boss", Box::new(Boss::new(0.5, 3))),
    ];

    let mut group = c.benchmark_group("build");
    for budget in [50.0, 500.0, 5_000.0] {
        for (name, pattern) in &patterns {
            group.bench_with_input(BenchmarkId::new(*name, budget), &budget, |b, &budget| {
                b.iter(|| {
                    let mut ctx = WaveContext::seeded(42).with_elite_chance(0.1);
                    let schedule = pattern.build(&mut ctx, black_box(120.0), budget, &pool);
                    black_box(schedule.len())
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, schedule_benchmark);
criterion_main!(benches);

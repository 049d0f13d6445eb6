//! Scenario tests for the continuous pattern.
//!
//! Scripted streams pin every draw, so these tests check exact picks,
//! offsets and the order the stream is consumed in.

use wave_core::prelude::*;
use wave_test_utils::fixtures::{elite, single_unit_pool, unit};
use wave_test_utils::pacing::{check_schedule_invariants, PacingStats};
use wave_test_utils::{Draw, ScriptedRng};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// Budget and pacing
// =============================================================================

#[test]
fn single_cheap_unit_spends_budget_in_five_spawns() {
    let pool = single_unit_pool(1.0);

    for seed in [0, 1, 42, 1_000_003] {
        let mut ctx = WaveContext::seeded(seed);
        let schedule = Continuous::default().build(&mut ctx, 10.0, 5.0, &pool);

        assert_eq!(schedule.len(), 5);
        assert_eq!(schedule.total_cost(), 5.0);
        for pair in schedule.entries().windows(2) {
            assert!(pair[1].offset() > pair[0].offset());
        }
        assert!(check_schedule_invariants(&schedule, 10.0, 5.0, &pool).is_empty());
    }
}

#[test]
fn unit_costlier_than_budget_terminates_empty() {
    let pool = single_unit_pool(10.0);
    let rng = ScriptedRng::default();
    let log = rng.log();
    let mut ctx = WaveContext::new(rng);

    let schedule = Continuous::default().build(&mut ctx, 10.0, 5.0, &pool);
    assert!(schedule.is_empty());
    assert!(log.is_empty(), "no draws for an unaffordable pool");
}

#[test]
fn doubled_spacing_doubles_offsets() {
    let pool = single_unit_pool(1.0);
    let build = |spacing: f64| {
        let mut ctx = WaveContext::seeded(77);
        Continuous::new(spacing).build(&mut ctx, 10_000.0, 5.0, &pool)
    };

    let normal = build(1.0);
    let wide = build(2.0);
    assert!(wide.len() >= 3);

    for (a, b) in normal.iter().zip(wide.iter()) {
        assert_close(b.offset(), 2.0 * a.offset());
    }

    let normal_gap = PacingStats::measure(&normal, 5.0).mean_gap.unwrap();
    let wide_gap = PacingStats::measure(&wide, 5.0).mean_gap.unwrap();
    assert!(wide_gap > 1.5 * normal_gap);
}

#[test]
fn degenerate_inputs_yield_empty_schedules() {
    let pool = single_unit_pool(1.0);
    let pattern = Continuous::default();
    let mut ctx = WaveContext::seeded(1);

    assert!(pattern.build(&mut ctx, 10.0, 5.0, &[]).is_empty());
    assert!(pattern.build(&mut ctx, 10.0, 0.0, &pool).is_empty());
    assert!(pattern.build(&mut ctx, 10.0, -5.0, &pool).is_empty());
    assert!(pattern.build(&mut ctx, 0.0, 5.0, &pool).is_empty());
    assert!(pattern.build(&mut ctx, -10.0, 5.0, &pool).is_empty());
    assert!(pattern.build(&mut ctx, f64::NAN, 5.0, &pool).is_empty());
}

// =============================================================================
// Draw order and elite substitution
// =============================================================================

#[test]
fn elite_roll_substitutes_family_variant() {
    let pool = vec![
        unit("crawler", 1.0),
        elite("crawler_elite", "crawler", 3.0),
        unit("spitter", 2.0),
    ];
    // Reals alternate elite roll, jitter.
    let rng = ScriptedRng::new(vec![0, 2, 0], vec![0.1, 0.5, 0.1, 0.5, 0.9, 0.5]);
    let log = rng.log();
    let mut ctx = WaveContext::new(rng).with_elite_chance(0.5);

    let schedule = Continuous::default().build(&mut ctx, 30.0, 6.0, &pool);

    let ids: Vec<&str> = schedule.iter().map(|e| e.unit().id.as_str()).collect();
    assert_eq!(ids, ["crawler_elite", "spitter", "crawler"]);
    assert_eq!(schedule.total_cost(), 6.0);

    // Average cost 2, so three planned spawns ten seconds apart; jitter 1.0.
    let offsets: Vec<f64> = schedule.iter().map(|e| e.offset()).collect();
    assert_close(offsets[0], 0.0);
    assert_close(offsets[1], 10.0);
    assert_close(offsets[2], 20.0);

    let per_spawn = [Draw::Index(3), Draw::Unit, Draw::Unit];
    assert_eq!(log.draws(), per_spawn.repeat(3));
}

#[test]
fn overshoot_guard_stops_before_jitter() {
    let pool = vec![unit("mite", 1.0), unit("brute", 4.0)];
    let rng = ScriptedRng::new(vec![0, 1, 1], vec![0.5]);
    let log = rng.log();
    let mut ctx = WaveContext::new(rng);

    let schedule = Continuous::default().build(&mut ctx, 100.0, 5.5, &pool);

    let ids: Vec<&str> = schedule.iter().map(|e| e.unit().id.as_str()).collect();
    assert_eq!(ids, ["mite", "brute"]);

    // Two appended spawns draw index, roll, jitter; the rejected third skips jitter.
    let draws = log.draws();
    assert_eq!(draws.len(), 8);
    assert_eq!(&draws[6..], &[Draw::Index(2), Draw::Unit]);
}

#[test]
fn overshoot_allowed_while_headroom_remains() {
    let pool = vec![unit("mite", 1.0), unit("brute", 4.0)];
    let rng = ScriptedRng::new(vec![0, 0, 1], vec![0.5]);
    let mut ctx = WaveContext::new(rng);

    // 1 + 1 leaves headroom 4.5, then a brute fits; headroom 0.5 afterwards ends it.
    let schedule = Continuous::default().build(&mut ctx, 100.0, 6.5, &pool);
    assert_eq!(schedule.total_cost(), 6.0);

    // Headroom of exactly 1 still accepts a costlier pick.
    let rng = ScriptedRng::new(vec![1, 1], vec![0.5]);
    let mut ctx = WaveContext::new(rng);
    let schedule = Continuous::default().build(&mut ctx, 100.0, 5.0, &pool);
    assert_eq!(schedule.total_cost(), 8.0);
    assert!(check_schedule_invariants(&schedule, 100.0, 5.0, &pool).is_empty());
}

#[test]
fn misbehaving_stream_is_clamped() {
    let pool = vec![unit("mite", 1.0), unit("wasp", 1.0)];
    let rng = ScriptedRng::new(vec![usize::MAX], vec![7.0, f64::NAN, -3.0]);
    let mut ctx = WaveContext::new(rng).with_elite_chance(1.0);

    let schedule = Continuous::default().build(&mut ctx, 20.0, 4.0, &pool);
    assert!(!schedule.is_empty());
    assert!(schedule.iter().all(|e| e.unit().id == "wasp"));
    assert!(check_schedule_invariants(&schedule, 20.0, 4.0, &pool).is_empty());
}

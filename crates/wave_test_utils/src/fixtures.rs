//! Test fixtures and helpers.
//!
//! Pre-built pools, catalogs and plans for consistent testing.

use wave_core::data::{ScalingTier, UnitCatalog, UnitType, WavePlan};
use wave_core::patterns::PatternConfig;

/// Catalog source used by loader and CLI tests.
pub const CATALOG_RON: &str = r#"UnitCatalog(
    units: [
        UnitType(id: "crawler", cost: 1.0, tags: ["swarm"]),
        UnitType(id: "crawler_elite", cost: 3.0, tier: Elite, family: Some("crawler"), tags: ["swarm"]),
        UnitType(id: "spitter", cost: 2.0, tags: ["ranged"]),
        UnitType(id: "spitter_elite", cost: 5.0, tier: Elite, family: Some("spitter"), tags: ["ranged"]),
        UnitType(id: "brute", cost: 6.0),
        UnitType(id: "broodmother", cost: 25.0, tier: Boss),
    ],
)
"#;

/// Plan source used by loader and CLI tests.
pub const PLAN_RON: &str = r#"WavePlan(
    duration: 60.0,
    budget: 40.0,
    elite_chance: 0.2,
    seed: Some(7),
    pattern: Continuous(spacing_adjust: 1.0),
    units: ["crawler", "crawler_elite", "spitter", "spitter_elite"],
)
"#;

/// Create a normal-tier unit.
#[must_use]
pub fn unit(id: &str, cost: f64) -> UnitType {
    UnitType::new(id, cost)
}

/// Create an elite variant of `base`.
#[must_use]
pub fn elite(id: &str, base: &str, cost: f64) -> UnitType {
    UnitType::elite_of(id, base, cost)
}

/// Create a boss-tier unit.
#[must_use]
pub fn boss(id: &str, cost: f64) -> UnitType {
    UnitType::new(id, cost).with_tier(ScalingTier::Boss)
}

/// A pool holding one unit of the given cost.
#[must_use]
pub fn single_unit_pool(cost: f64) -> Vec<UnitType> {
    vec![unit("solo", cost)]
}

/// Cheap units only.
#[must_use]
pub fn swarm_pool() -> Vec<UnitType> {
    vec![unit("mite", 0.5), unit("crawler", 1.0), unit("skitter", 1.5)]
}

/// Normal units with elite variants, plus a boss.
#[must_use]
pub fn mixed_pool() -> Vec<UnitType> {
    fixture_catalog().units
}

/// The catalog described by [`CATALOG_RON`].
///
/// # Panics
///
/// Panics if the fixture source no longer parses.
#[must_use]
pub fn fixture_catalog() -> UnitCatalog {
    UnitCatalog::parse(CATALOG_RON, "fixture").expect("fixture catalog parses")
}

/// The plan described by [`PLAN_RON`].
///
/// # Panics
///
/// Panics if the fixture source no longer parses.
#[must_use]
pub fn fixture_plan() -> WavePlan {
    WavePlan::parse(PLAN_RON, "fixture").expect("fixture plan parses")
}

/// A seeded plan with the given pattern.
#[must_use]
pub fn seeded_plan(duration: f64, budget: f64, seed: u64, pattern: PatternConfig) -> WavePlan {
    WavePlan {
        seed: Some(seed),
        pattern,
        ..WavePlan::new(duration, budget)
    }
}

//! Determinism testing utilities.
//!
//! Provides a harness for verifying that schedule building produces
//! identical results given identical inputs.
//!
//! # Testing Strategy
//!
//! A seeded wave must replay exactly. Sources of non-determinism include:
//!
//! - **Hidden randomness**: Every draw must come from the
//!   [`WaveContext`](wave_core::context::WaveContext), never a thread RNG.
//!
//! - **HashMap iteration order**: Rust's default hasher is randomized.
//!   Draw sets are always walked in pool order.
//!
//! - **Unstable sorts**: Entries sharing an offset must keep their order.
//!
//! Schedules are compared through their bincode bytes, so two schedules
//! count as equal only when they match byte for byte.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::thread;

use wave_core::schedule::Schedule;

/// Result of a determinism test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether all runs produced identical results.
    pub is_deterministic: bool,
    /// Hashes from each run.
    pub hashes: Vec<u64>,
    /// Entry count of the first run.
    pub entries: usize,
}

impl DeterminismResult {
    /// Get all unique hashes (should be 1 for a deterministic build).
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut unique: Vec<u64> = self.hashes.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Assert that the build was deterministic, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if the runs produced different hashes.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            let unique = self.unique_hashes();
            panic!(
                "Schedule building is non-deterministic!\n\
                 Runs: {}\n\
                 Entries: {}\n\
                 Unique hashes: {} (expected 1)\n\
                 All hashes: {:?}",
                self.hashes.len(),
                self.entries,
                unique.len(),
                self.hashes
            );
        }
    }
}

/// Hash a schedule through its bincode encoding.
///
/// # Panics
///
/// Panics if the schedule cannot be encoded.
#[must_use]
pub fn schedule_hash(schedule: &Schedule<'_>) -> u64 {
    let bytes = schedule.to_bytes().expect("schedule encodes");
    compute_hash(&bytes)
}

/// Build a schedule several times and verify every build matches.
///
/// # Example
///
/// ```
/// use wave_core::prelude::*;
/// use wave_test_utils::determinism::verify_schedule_determinism;
///
/// let pool = vec![UnitType::new("crawler", 1.0), UnitType::new("spitter", 2.0)];
/// let result = verify_schedule_determinism(5, || {
///     let mut ctx = WaveContext::seeded(42);
///     Continuous::default().build(&mut ctx, 30.0, 20.0, &pool)
/// });
/// result.assert_deterministic();
/// ```
pub fn verify_schedule_determinism<'p, F>(runs: usize, build: F) -> DeterminismResult
where
    F: Fn() -> Schedule<'p>,
{
    let mut hashes = Vec::with_capacity(runs);
    let mut entries = 0;

    for run in 0..runs {
        let schedule = build();
        if run == 0 {
            entries = schedule.len();
        }
        hashes.push(schedule_hash(&schedule));
    }

    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);

    DeterminismResult {
        is_deterministic,
        hashes,
        entries,
    }
}

/// Build the same schedule on `threads` scoped threads and verify they match.
///
/// Catches state shared between builds that only shows under concurrency.
///
/// # Panics
///
/// Panics if a build thread panics.
pub fn verify_parallel_determinism<'p, F>(threads: usize, build: F) -> DeterminismResult
where
    F: Fn() -> Schedule<'p> + Sync,
{
    let results: Vec<(u64, usize)> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                s.spawn(|| {
                    let schedule = build();
                    (schedule_hash(&schedule), schedule.len())
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| h.join().expect("build thread panicked"))
            .collect()
    });

    let entries = results.first().map_or(0, |(_, len)| *len);
    let hashes: Vec<u64> = results.into_iter().map(|(hash, _)| hash).collect();
    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);

    DeterminismResult {
        is_deterministic,
        hashes,
        entries,
    }
}

/// Compare two schedules entry by entry, finding the first divergence.
///
/// # Returns
///
/// `None` if the schedules match, `Some(index)` of the first entry that
/// differs otherwise. A length mismatch diverges at the shorter length.
#[must_use]
pub fn find_first_divergence(a: &Schedule<'_>, b: &Schedule<'_>) -> Option<usize> {
    let diverged = a
        .iter()
        .zip(b.iter())
        .position(|(x, y)| x.offset().to_bits() != y.offset().to_bits() || x.unit() != y.unit());

    match diverged {
        Some(index) => Some(index),
        None if a.len() != b.len() => Some(a.len().min(b.len())),
        None => None,
    }
}

/// Compute a simple hash for any hashable value.
pub fn compute_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Proptest strategies for schedule testing.
///
/// These strategies generate random but reproducible inputs for
/// property-based testing of spawn patterns.
pub mod strategies {
    use proptest::prelude::*;
    use wave_core::data::UnitType;
    use wave_core::patterns::PatternConfig;

    /// Generate a positive unit cost.
    pub fn arb_cost() -> impl Strategy<Value = f64> {
        0.25f64..20.0
    }

    /// Generate a pool of 1 to `max_units` units with unique IDs.
    ///
    /// Roughly a third of the units are elite variants of the first unit.
    pub fn arb_pool(max_units: usize) -> impl Strategy<Value = Vec<UnitType>> {
        proptest::collection::vec((arb_cost(), 0u8..3), 1..=max_units).prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (cost, kind))| {
                    let id = format!("u{i}");
                    if i > 0 && kind == 0 {
                        UnitType::elite_of(id, "u0", cost)
                    } else {
                        UnitType::new(id, cost)
                    }
                })
                .collect()
        })
    }

    /// Generate a wave budget, occasionally zero or negative.
    pub fn arb_budget() -> impl Strategy<Value = f64> {
        prop_oneof![
            1 => -10.0f64..=0.0,
            9 => 0.5f64..400.0,
        ]
    }

    /// Generate a wave duration, occasionally zero or negative.
    pub fn arb_duration() -> impl Strategy<Value = f64> {
        prop_oneof![
            1 => -5.0f64..=0.0,
            9 => 0.1f64..300.0,
        ]
    }

    /// Generate a pacing multiplier, including values outside the clamp range.
    pub fn arb_spacing() -> impl Strategy<Value = f64> {
        0.1f64..3.0
    }

    /// Generate an elite chance in `[0, 1]`.
    pub fn arb_elite_chance() -> impl Strategy<Value = f64> {
        0.0f64..=1.0
    }

    /// Generate any built-in pattern configuration.
    pub fn arb_pattern_config() -> impl Strategy<Value = PatternConfig> {
        prop_oneof![
            arb_spacing().prop_map(|spacing_adjust| PatternConfig::Continuous { spacing_adjust }),
            (1u32..6, 0.05f64..=1.0, arb_spacing()).prop_map(|(bursts, spread, spacing_adjust)| {
                PatternConfig::Burst {
                    bursts,
                    spread,
                    spacing_adjust,
                }
            }),
            (0.0f64..0.95, 1u32..5).prop_map(|(entry_fraction, max_count)| PatternConfig::Boss {
                entry_fraction,
                max_count,
            }),
        ]
    }
}

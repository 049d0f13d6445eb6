//! Seed sweeps for pacing statistics.
//!
//! Builds one plan across many consecutive seeds in parallel using rayon
//! and aggregates what the pattern does with its budget.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use wave_core::data::{ScalingTier, UnitCatalog, WavePlan};
use wave_core::error::Result;

/// Configuration for a sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Number of schedules to build
    pub runs: u32,
    /// First seed; run `i` uses `seed_start + i`
    pub seed_start: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            runs: 1000,
            seed_start: 0,
        }
    }
}

impl SweepConfig {
    /// Create config for a number of runs
    pub fn new(runs: u32) -> Self {
        Self {
            runs,
            ..Default::default()
        }
    }

    /// Set seed start
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed_start = seed;
        self
    }
}

/// Metrics from one seeded build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRun {
    /// Seed used
    pub seed: u64,
    /// Number of spawns
    pub count: usize,
    /// Budget spent
    pub spent: f64,
    /// Spend beyond the budget
    pub overshoot: f64,
    /// Number of elite spawns
    pub elites: usize,
    /// Offset of the final spawn
    pub last_offset: Option<f64>,
}

/// Aggregate statistics over a sweep
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepSummary {
    /// Runs aggregated
    pub runs: usize,
    /// Runs that scheduled nothing
    pub empty_runs: usize,
    /// Fewest spawns in a run
    pub min_count: usize,
    /// Most spawns in a run
    pub max_count: usize,
    /// Mean spawns per run
    pub mean_count: f64,
    /// Mean budget spent per run
    pub mean_spent: f64,
    /// Largest overshoot seen
    pub max_overshoot: f64,
    /// Elite spawns as a share of all spawns
    pub elite_share: f64,
}

impl SweepSummary {
    /// Aggregate per-run metrics.
    pub fn from_runs(runs: &[SweepRun]) -> Self {
        if runs.is_empty() {
            return Self::default();
        }

        let n = runs.len() as f64;
        let spawns: usize = runs.iter().map(|r| r.count).sum();
        let elites: usize = runs.iter().map(|r| r.elites).sum();

        Self {
            runs: runs.len(),
            empty_runs: runs.iter().filter(|r| r.count == 0).count(),
            min_count: runs.iter().map(|r| r.count).min().unwrap_or(0),
            max_count: runs.iter().map(|r| r.count).max().unwrap_or(0),
            mean_count: spawns as f64 / n,
            mean_spent: runs.iter().map(|r| r.spent).sum::<f64>() / n,
            max_overshoot: runs.iter().map(|r| r.overshoot).fold(0.0, f64::max),
            elite_share: if spawns == 0 {
                0.0
            } else {
                elites as f64 / spawns as f64
            },
        }
    }
}

/// Results from a sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResults {
    /// Pattern swept
    pub pattern: String,
    /// Configuration used
    pub config: SweepConfig,
    /// Plan swept
    pub plan: WavePlan,
    /// Aggregate summary
    pub summary: SweepSummary,
    /// Per-seed metrics in seed order
    pub runs: Vec<SweepRun>,
    /// Total runtime
    pub duration_seconds: f64,
}

impl SweepResults {
    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(std::io::Error::other)
    }
}

/// Build `config.runs` schedules over consecutive seeds in parallel.
///
/// The plan's own seed is ignored.
///
/// # Errors
///
/// Returns an error if the plan is invalid or names unknown units.
pub fn run_sweep(
    catalog: &UnitCatalog,
    plan: &WavePlan,
    config: SweepConfig,
) -> Result<SweepResults> {
    plan.validate()?;
    let pool = catalog.select(&plan.units)?;
    let pattern = plan.pattern();
    let start = Instant::now();

    info!(
        pattern = pattern.name(),
        runs = config.runs,
        seed_start = config.seed_start,
        "Starting sweep"
    );

    let runs: Vec<SweepRun> = (0..config.runs)
        .into_par_iter()
        .map(|i| {
            let seed = config.seed_start.wrapping_add(u64::from(i));
            let mut ctx = plan.context_with_seed(seed);
            let schedule = pattern.build(&mut ctx, plan.duration, plan.budget, &pool);
            let spent = schedule.total_cost();

            SweepRun {
                seed,
                count: schedule.len(),
                spent,
                overshoot: (spent - plan.budget).max(0.0),
                elites: schedule.count_at_tier(ScalingTier::Elite),
                last_offset: schedule.last_offset(),
            }
        })
        .collect();

    let summary = SweepSummary::from_runs(&runs);
    let duration_seconds = start.elapsed().as_secs_f64();
    debug!(?summary, duration_seconds, "Sweep complete");

    Ok(SweepResults {
        pattern: pattern.name().to_string(),
        config,
        plan: plan.clone(),
        summary,
        runs,
        duration_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wave_core::data::UnitType;

    fn catalog() -> UnitCatalog {
        UnitCatalog::new(vec![
            UnitType::new("crawler", 1.0),
            UnitType::elite_of("crawler_elite", "crawler", 3.0),
            UnitType::new("spitter", 2.0),
        ])
    }

    #[test]
    fn test_sweep_runs_in_seed_order() {
        let mut plan = WavePlan::new(30.0, 20.0);
        plan.elite_chance = 0.25;
        let results = run_sweep(&catalog(), &plan, SweepConfig::new(32).with_seed(100)).unwrap();

        assert_eq!(results.runs.len(), 32);
        assert_eq!(results.summary.runs, 32);
        let seeds: Vec<u64> = results.runs.iter().map(|r| r.seed).collect();
        assert_eq!(seeds, (100..132).collect::<Vec<_>>());
        // Overshoot is bounded by the costliest unit.
        assert!(results.summary.max_overshoot <= 3.0);
        assert!(results.summary.min_count > 0);
    }

    #[test]
    fn test_sweep_is_reproducible() {
        let plan = WavePlan::new(30.0, 20.0);
        let a = run_sweep(&catalog(), &plan, SweepConfig::new(16)).unwrap();
        let b = run_sweep(&catalog(), &plan, SweepConfig::new(16)).unwrap();
        assert_eq!(a.runs, b.runs);
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(SweepSummary::from_runs(&[]), SweepSummary::default());
    }

    #[test]
    fn test_results_save_load() {
        let plan = WavePlan::new(30.0, 20.0);
        let results = run_sweep(&catalog(), &plan, SweepConfig::new(5)).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweeps").join("results.json");

        results.save(&path).unwrap();
        assert!(path.exists());

        let loaded = SweepResults::load(&path).unwrap();
        assert_eq!(loaded.runs.len(), 5);
        assert_eq!(loaded.pattern, "continuous");
    }
}

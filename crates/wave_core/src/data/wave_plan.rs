//! Wave plan: the per-wave parameters a designer authors.

use serde::{Deserialize, Serialize};

use crate::context::WaveContext;
use crate::error::{Result, WaveError};
use crate::pattern::SpawnPattern;
use crate::patterns::PatternConfig;

/// Parameters for one wave.
///
/// # Example RON
///
/// ```ron
/// WavePlan(
///     duration: 45.0,
///     budget: 60.0,
///     elite_chance: 0.1,
///     seed: Some(42),
///     pattern: Burst(bursts: 3, spread: 0.4),
///     units: ["crawler", "crawler_elite", "spitter"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavePlan {
    /// Wave length in seconds.
    pub duration: f64,
    /// Abstract spawn budget.
    pub budget: f64,
    /// Probability a spawn is upgraded to its elite variant.
    #[serde(default)]
    pub elite_chance: f64,
    /// Seed for the random stream. `None` draws from live entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Pacing strategy.
    #[serde(default)]
    pub pattern: PatternConfig,
    /// Unit IDs forming the pool. Empty selects the whole catalog.
    #[serde(default)]
    pub units: Vec<String>,
}

impl WavePlan {
    /// Create a plan with a continuous pattern and no elite upgrades.
    #[must_use]
    pub fn new(duration: f64, budget: f64) -> Self {
        Self {
            duration,
            budget,
            elite_chance: 0.0,
            seed: None,
            pattern: PatternConfig::default(),
            units: Vec::new(),
        }
    }

    /// Parse a plan from RON source.
    pub fn parse(source: &str, origin: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| WaveError::DataParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// Check the plan is well formed.
    ///
    /// Zero or negative budgets and durations are legal and schedule
    /// nothing; non-finite values are rejected.
    pub fn validate(&self) -> Result<()> {
        if !self.duration.is_finite() {
            return Err(WaveError::InvalidPlan(format!(
                "duration {} is not finite",
                self.duration
            )));
        }
        if !self.budget.is_finite() {
            return Err(WaveError::InvalidPlan(format!(
                "budget {} is not finite",
                self.budget
            )));
        }
        if !(0.0..=1.0).contains(&self.elite_chance) {
            return Err(WaveError::InvalidPlan(format!(
                "elite_chance {} outside [0, 1]",
                self.elite_chance
            )));
        }
        self.pattern.validate()
    }

    /// Instantiate the configured pattern.
    #[must_use]
    pub fn pattern(&self) -> Box<dyn SpawnPattern> {
        self.pattern.build_pattern()
    }

    /// Build the scheduling context for this plan.
    ///
    /// Seeded plans replay identically; unseeded plans use live entropy.
    #[must_use]
    pub fn context(&self) -> WaveContext {
        match self.seed {
            Some(seed) => self.context_with_seed(seed),
            None => WaveContext::from_entropy().with_elite_chance(self.elite_chance),
        }
    }

    /// Build the scheduling context with an explicit seed.
    #[must_use]
    pub fn context_with_seed(&self, seed: u64) -> WaveContext {
        WaveContext::seeded(seed).with_elite_chance(self.elite_chance)
    }
}

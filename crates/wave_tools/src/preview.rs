//! Single-schedule previews.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use wave_core::data::{UnitCatalog, WavePlan};
use wave_core::error::Result;
use wave_core::schedule::Schedule;

/// One row of a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewEntry {
    /// Seconds from wave start.
    pub offset: f64,
    /// Unit ID.
    pub unit: String,
    /// Unit cost.
    pub cost: f64,
    /// Tier label.
    pub tier: String,
}

/// A built schedule flattened for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewReport {
    /// Pattern name.
    pub pattern: String,
    /// Seed used, if any.
    pub seed: Option<u64>,
    /// Wave duration.
    pub duration: f64,
    /// Wave budget.
    pub budget: f64,
    /// Sum of entry costs.
    pub total_cost: f64,
    /// Entries in time order.
    pub entries: Vec<PreviewEntry>,
}

impl PreviewReport {
    /// Flatten a schedule.
    #[must_use]
    pub fn from_schedule(
        schedule: &Schedule<'_>,
        pattern: &str,
        seed: Option<u64>,
        plan: &WavePlan,
    ) -> Self {
        let entries = schedule
            .iter()
            .map(|e| PreviewEntry {
                offset: e.offset(),
                unit: e.unit().id.clone(),
                cost: e.unit().cost,
                tier: e.unit().tier.label().to_string(),
            })
            .collect();

        Self {
            pattern: pattern.to_string(),
            seed,
            duration: plan.duration,
            budget: plan.budget,
            total_cost: schedule.total_cost(),
            entries,
        }
    }

    /// Render as a plain text table.
    #[must_use]
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let seed = self
            .seed
            .map_or_else(|| "entropy".to_string(), |s| s.to_string());
        let _ = writeln!(
            out,
            "pattern: {}  seed: {}  duration: {:.1}s  budget: {:.1}",
            self.pattern, seed, self.duration, self.budget
        );
        let _ = writeln!(out, "{:>9}  {:<24} {:>7}  tier", "offset", "unit", "cost");
        for entry in &self.entries {
            let _ = writeln!(
                out,
                "{:>8.2}s  {:<24} {:>7.2}  {}",
                entry.offset, entry.unit, entry.cost, entry.tier
            );
        }
        let _ = writeln!(
            out,
            "{} spawns, spent {:.2} of {:.2}",
            self.entries.len(),
            self.total_cost,
            self.budget
        );
        out
    }
}

/// Build one schedule for a plan.
///
/// `seed` overrides the plan's own seed.
///
/// # Errors
///
/// Returns an error if the plan is invalid or names unknown units.
pub fn build_preview(
    catalog: &UnitCatalog,
    plan: &WavePlan,
    seed: Option<u64>,
) -> Result<PreviewReport> {
    plan.validate()?;
    let pool = catalog.select(&plan.units)?;

    let seed = seed.or(plan.seed);
    let mut ctx = match seed {
        Some(seed) => plan.context_with_seed(seed),
        None => plan.context(),
    };

    let pattern = plan.pattern();
    let schedule = pattern.build(&mut ctx, plan.duration, plan.budget, &pool);
    tracing::debug!(pattern = pattern.name(), entries = schedule.len(), "Preview built");

    Ok(PreviewReport::from_schedule(
        &schedule,
        pattern.name(),
        seed,
        plan,
    ))
}

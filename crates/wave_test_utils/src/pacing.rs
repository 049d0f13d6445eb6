//! Pacing statistics and schedule invariant checks.
//!
//! Tools for inspecting many generated schedules at once and confirming
//! every one of them honours the guarantees all spawn patterns share.

use wave_core::data::{ScalingTier, UnitType};
use wave_core::schedule::Schedule;

/// Summary of one schedule's pacing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PacingStats {
    /// Number of spawns.
    pub count: usize,
    /// Total budget spent.
    pub total_cost: f64,
    /// Spend beyond the budget (0 when under budget).
    pub overshoot: f64,
    /// Smallest gap between consecutive spawns.
    pub min_gap: Option<f64>,
    /// Largest gap between consecutive spawns.
    pub max_gap: Option<f64>,
    /// Mean gap between consecutive spawns.
    pub mean_gap: Option<f64>,
    /// Number of elite spawns.
    pub elites: usize,
}

impl PacingStats {
    /// Measure a schedule built against `budget`.
    #[must_use]
    pub fn measure(schedule: &Schedule<'_>, budget: f64) -> Self {
        let gaps: Vec<f64> = schedule
            .entries()
            .windows(2)
            .map(|w| w[1].offset() - w[0].offset())
            .collect();

        let total_cost = schedule.total_cost();
        let mean_gap = if gaps.is_empty() {
            None
        } else {
            Some(gaps.iter().sum::<f64>() / gaps.len() as f64)
        };

        Self {
            count: schedule.len(),
            total_cost,
            overshoot: (total_cost - budget).max(0.0),
            min_gap: gaps.iter().copied().min_by(f64::total_cmp),
            max_gap: gaps.iter().copied().max_by(f64::total_cmp),
            mean_gap,
            elites: schedule.count_at_tier(ScalingTier::Elite),
        }
    }

    /// Fraction of spawns that are elite.
    pub fn elite_share(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.elites as f64 / self.count as f64
    }
}

/// Check the guarantees every spawn pattern makes.
///
/// - Offsets lie in `[0, wave_duration)`
/// - Offsets are non-decreasing
/// - Spend exceeds `budget` by at most the largest cost in `pool`
/// - Degenerate input yields an empty schedule
/// - Every entry's unit comes from `pool`
///
/// Returns a list of violations.
#[must_use]
pub fn check_schedule_invariants(
    schedule: &Schedule<'_>,
    wave_duration: f64,
    budget: f64,
    pool: &[UnitType],
) -> Vec<String> {
    let mut violations = Vec::new();

    if (pool.is_empty() || wave_duration <= 0.0 || budget <= 0.0) && !schedule.is_empty() {
        violations.push(format!(
            "degenerate input (duration {wave_duration}, budget {budget}, pool {}) produced {} entries",
            pool.len(),
            schedule.len()
        ));
    }

    for (index, entry) in schedule.iter().enumerate() {
        let offset = entry.offset();
        if !(offset >= 0.0 && offset < wave_duration) {
            violations.push(format!(
                "entry {index} offset {offset} outside [0, {wave_duration})"
            ));
        }
        if !pool.iter().any(|u| u == entry.unit()) {
            violations.push(format!("entry {index} unit '{}' not in pool", entry.unit().id));
        }
    }

    for (index, pair) in schedule.entries().windows(2).enumerate() {
        if pair[1].offset() < pair[0].offset() {
            violations.push(format!(
                "entry {} offset {} precedes entry {index} offset {}",
                index + 1,
                pair[1].offset(),
                pair[0].offset()
            ));
        }
    }

    let max_cost = pool.iter().map(|u| u.cost).fold(0.0, f64::max);
    let total = schedule.total_cost();
    // Small tolerance for accumulated float error.
    if total > budget + max_cost + 1e-9 {
        violations.push(format!(
            "spent {total} exceeds budget {budget} plus max cost {max_cost}"
        ));
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure() {
        let a = UnitType::new("a", 1.0);
        let e = UnitType::elite_of("a_elite", "a", 3.0);
        let mut schedule = Schedule::new();
        schedule.push(0.0, &a);
        schedule.push(2.0, &e);
        schedule.push(5.0, &a);

        let stats = PacingStats::measure(&schedule, 4.0);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_cost, 5.0);
        assert_eq!(stats.overshoot, 1.0);
        assert_eq!(stats.min_gap, Some(2.0));
        assert_eq!(stats.max_gap, Some(3.0));
        assert_eq!(stats.mean_gap, Some(2.5));
        assert!((stats.elite_share() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_schedule_stats() {
        let stats = PacingStats::measure(&Schedule::new(), 10.0);
        assert_eq!(stats, PacingStats::default());
        assert_eq!(stats.elite_share(), 0.0);
    }

    #[test]
    fn test_invariant_violations_reported() {
        let pool = vec![UnitType::new("a", 2.0)];
        let stranger = UnitType::new("b", 2.0);

        let mut schedule = Schedule::new();
        schedule.push(0.0, &pool[0]);
        schedule.push(12.0, &stranger);
        assert!(check_schedule_invariants(&schedule, 10.0, 100.0, &pool).len() >= 2);

        let mut overspent = Schedule::new();
        for offset in [0.0, 1.0, 2.0] {
            overspent.push(offset, &pool[0]);
        }
        assert!(check_schedule_invariants(&overspent, 10.0, 6.0, &pool).is_empty());
        assert_eq!(check_schedule_invariants(&overspent, 10.0, 3.0, &pool).len(), 1);
    }
}

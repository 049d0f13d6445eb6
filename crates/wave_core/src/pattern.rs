//! The spawn pattern interface.
//!
//! Every strategy turns `(context, duration, budget, pool)` into a
//! [`Schedule`]. Consumers only see schedules, so new pacing strategies are
//! added by implementing [`SpawnPattern`] without touching them.

use crate::context::WaveContext;
use crate::data::UnitType;
use crate::schedule::Schedule;

/// Strategy that builds a spawn schedule for one wave.
///
/// Implementations must:
/// - never panic on degenerate input (empty pool, non-positive budget or
///   duration); return an empty schedule instead
/// - keep every offset in `[0, wave_duration)` and in non-decreasing order
/// - not overshoot `budget` by more than the largest unit cost in `pool`
/// - touch no state besides advancing `ctx`'s random stream, so identical
///   draws yield identical schedules
pub trait SpawnPattern: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Build the schedule for one wave.
    fn build<'p>(
        &self,
        ctx: &mut WaveContext,
        wave_duration: f64,
        budget: f64,
        pool: &'p [UnitType],
    ) -> Schedule<'p>;
}

/// Check for inputs that can only produce an empty schedule.
///
/// Non-finite durations and budgets count as degenerate.
#[must_use]
pub fn is_degenerate(wave_duration: f64, budget: f64, pool: &[UnitType]) -> bool {
    pool.is_empty()
        || !wave_duration.is_finite()
        || !budget.is_finite()
        || wave_duration <= 0.0
        || budget <= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_degenerate() {
        let pool = vec![UnitType::new("u", 1.0)];
        assert!(!is_degenerate(10.0, 5.0, &pool));

        assert!(is_degenerate(10.0, 5.0, &[]));
        assert!(is_degenerate(0.0, 5.0, &pool));
        assert!(is_degenerate(-1.0, 5.0, &pool));
        assert!(is_degenerate(10.0, 0.0, &pool));
        assert!(is_degenerate(10.0, -3.0, &pool));
        assert!(is_degenerate(f64::NAN, 5.0, &pool));
        assert!(is_degenerate(10.0, f64::INFINITY, &pool));
    }
}

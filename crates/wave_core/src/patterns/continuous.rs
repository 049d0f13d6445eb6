//! Continuous pattern: an even, jittered stream of spawns across the wave.

use tracing::{debug, trace};

use super::{base_interval, clamp_spacing, stops_on_overshoot, JITTER_MAX, JITTER_MIN};
use crate::context::WaveContext;
use crate::data::UnitType;
use crate::pattern::{is_degenerate, SpawnPattern};
use crate::pool::DrawPool;
use crate::schedule::Schedule;

pub(super) const NAME: &str = "continuous";

/// Reference pattern that spends the budget as a roughly even stream.
///
/// Pacing is planned from an estimated spawn count (`budget / average cost`)
/// and each step is stretched by jitter in `[0.8, 1.2]`. Every spawn draws a
/// uniform unit from the affordable pool and rolls for its elite variant.
///
/// The loop runs while budget remains and the cursor is inside the wave. A
/// pick that does not fit the remaining budget is still taken unless less
/// than one unit of budget is left, in which case the wave ends there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Continuous {
    spacing_adjust: f64,
}

impl Default for Continuous {
    fn default() -> Self {
        Self {
            spacing_adjust: super::DEFAULT_SPACING_ADJUST,
        }
    }
}

impl Continuous {
    /// Create the pattern with a pacing multiplier, clamped to `[0.5, 2.0]`.
    #[must_use]
    pub fn new(spacing_adjust: f64) -> Self {
        Self {
            spacing_adjust: clamp_spacing(spacing_adjust),
        }
    }

    /// Pacing multiplier in effect.
    #[must_use]
    pub fn spacing_adjust(&self) -> f64 {
        self.spacing_adjust
    }

    /// Planned interval between spawns before jitter.
    #[must_use]
    pub fn base_interval(&self, wave_duration: f64, budget: f64, pool: &[UnitType]) -> f64 {
        let average_cost = DrawPool::new(pool, budget).average_cost();
        base_interval(wave_duration, budget, average_cost, self.spacing_adjust)
    }
}

impl SpawnPattern for Continuous {
    fn name(&self) -> &'static str {
        NAME
    }

    fn build<'p>(
        &self,
        ctx: &mut WaveContext,
        wave_duration: f64,
        budget: f64,
        pool: &'p [UnitType],
    ) -> Schedule<'p> {
        let mut schedule = Schedule::new();

        if is_degenerate(wave_duration, budget, pool) {
            debug!(
                wave_duration,
                budget,
                pool_size = pool.len(),
                "Degenerate wave input, returning empty schedule"
            );
            return schedule;
        }

        let draws = DrawPool::new(pool, budget);
        if draws.is_empty() {
            debug!(budget, "No unit fits the wave budget");
            return schedule;
        }

        let interval = base_interval(
            wave_duration,
            budget,
            draws.average_cost(),
            self.spacing_adjust,
        );

        let mut spent = 0.0;
        let mut cursor = 0.0;

        while spent < budget && cursor < wave_duration {
            let Some(pick) = draws.draw(ctx) else {
                break;
            };

            let headroom = budget - spent;
            if stops_on_overshoot(pick.cost, headroom) {
                trace!(unit = %pick.id, headroom, "Remaining budget too small");
                break;
            }

            schedule.push(cursor, pick);
            spent += pick.cost;
            cursor += interval * ctx.jitter(JITTER_MIN, JITTER_MAX);
        }

        debug!(
            pattern = NAME,
            entries = schedule.len(),
            spent,
            budget,
            interval,
            "Built wave schedule"
        );

        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScalingTier;

    fn build(
        pattern: Continuous,
        seed: u64,
        duration: f64,
        budget: f64,
        pool: &[UnitType],
    ) -> Vec<(f64, String)> {
        let mut ctx = WaveContext::seeded(seed);
        pattern
            .build(&mut ctx, duration, budget, pool)
            .iter()
            .map(|e| (e.offset(), e.unit().id.clone()))
            .collect()
    }

    #[test]
    fn test_single_unit_spends_budget_exactly() {
        let pool = vec![UnitType::new("crawler", 1.0)];
        let pattern = Continuous::default();
        assert_eq!(pattern.base_interval(10.0, 5.0, &pool), 2.0);

        for seed in 0..20 {
            let entries = build(pattern, seed, 10.0, 5.0, &pool);
            assert_eq!(entries.len(), 5, "seed {seed}");
            assert_eq!(entries[0].0, 0.0);
            for pair in entries.windows(2) {
                let gap = pair[1].0 - pair[0].0;
                assert!((1.6..=2.4).contains(&gap), "gap {gap} out of jitter range");
            }
        }
    }

    #[test]
    fn test_unit_costlier_than_budget_yields_nothing() {
        let pool = vec![UnitType::new("behemoth", 10.0)];
        let entries = build(Continuous::default(), 7, 10.0, 5.0, &pool);
        assert!(entries.is_empty());
    }

    #[test]
    fn test_overshoot_allowed_with_headroom() {
        // Budget 4.5 with cost-2 units: 2 + 2 leaves 0.5 < 1, so the third pick stops.
        let pool = vec![UnitType::new("wasp", 2.0)];
        let entries = build(Continuous::default(), 3, 100.0, 4.5, &pool);
        assert_eq!(entries.len(), 2);

        // Budget 5 with cost-2 units: 2 + 2 leaves exactly 1, so a third spawn overshoots to 6.
        let entries = build(Continuous::default(), 3, 100.0, 5.0, &pool);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_time_window_limits_spawns() {
        let pool = vec![UnitType::new("mite", 1.0)];
        let entries = build(Continuous::new(2.0), 9, 10.0, 5.0, &pool);
        // Base interval 4: a fifth spawn would land at 12.8 or later.
        assert!(entries.len() < 5);
        assert!(entries.iter().all(|(offset, _)| *offset < 10.0));
    }

    #[test]
    fn test_spacing_is_clamped() {
        assert_eq!(Continuous::new(0.01).spacing_adjust(), 0.5);
        assert_eq!(Continuous::new(9.0).spacing_adjust(), 2.0);
    }

    #[test]
    fn test_certain_elite_chance_upgrades_every_spawn() {
        let pool = vec![
            UnitType::new("crawler", 1.0),
            UnitType::elite_of("crawler_elite", "crawler", 2.0),
        ];
        let mut ctx = WaveContext::seeded(1).with_elite_chance(1.0);
        let schedule = Continuous::default().build(&mut ctx, 60.0, 40.0, &pool);
        assert!(!schedule.is_empty());
        assert_eq!(schedule.count_at_tier(ScalingTier::Elite), schedule.len());
    }
}

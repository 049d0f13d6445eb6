//! Boss pattern: copies of the heaviest affordable unit entering late.

use tracing::debug;

use crate::context::WaveContext;
use crate::data::{ScalingTier, UnitType};
use crate::pattern::{is_degenerate, SpawnPattern};
use crate::pool::DrawPool;
use crate::schedule::Schedule;

pub(super) const NAME: &str = "boss";

/// Latest allowed entry point as a fraction of the wave.
pub(super) const MAX_ENTRY_FRACTION: f64 = 0.95;

/// Spawns the most expensive affordable boss.
///
/// Boss-tier units are preferred; without one, the most expensive
/// affordable unit of any tier stands in. Ties are settled with a single
/// index draw. Up to `max_count` copies are spawned while the budget
/// covers them, the first at `entry_fraction` of the wave and the rest
/// evenly spaced over what remains. Bosses are neither jittered nor
/// upgraded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boss {
    entry_fraction: f64,
    max_count: u32,
}

impl Boss {
    /// Create the pattern. `entry_fraction` is clamped to `[0, 0.95]` and at
    /// least one copy is spawned.
    #[must_use]
    pub fn new(entry_fraction: f64, max_count: u32) -> Self {
        let entry_fraction = if entry_fraction.is_nan() {
            0.0
        } else {
            entry_fraction.clamp(0.0, MAX_ENTRY_FRACTION)
        };
        Self {
            entry_fraction,
            max_count: max_count.max(1),
        }
    }

    /// Fraction of the wave elapsed before the first boss.
    #[must_use]
    pub fn entry_fraction(&self) -> f64 {
        self.entry_fraction
    }

    /// Upper bound on copies.
    #[must_use]
    pub fn max_count(&self) -> u32 {
        self.max_count
    }
}

impl Default for Boss {
    fn default() -> Self {
        Self::new(0.0, 1)
    }
}

/// Most expensive candidates, preferring boss tier.
fn heaviest<'p>(units: &[&'p UnitType]) -> Vec<&'p UnitType> {
    let bosses: Vec<&UnitType> = units
        .iter()
        .copied()
        .filter(|u| u.tier == ScalingTier::Boss)
        .collect();
    let candidates = if bosses.is_empty() {
        units.to_vec()
    } else {
        bosses
    };

    let top = candidates
        .iter()
        .map(|u| u.cost)
        .max_by(f64::total_cmp)
        .unwrap_or(0.0);
    candidates.into_iter().filter(|u| u.cost == top).collect()
}

impl SpawnPattern for Boss {
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
        let tied = heaviest(draws.units());
        if tied.is_empty() {
            debug!(budget, "No unit fits the wave budget");
            return schedule;
        }
        let boss = tied[ctx.draw_index(tied.len())];

        let affordable = if boss.cost > 0.0 {
            (budget / boss.cost).floor()
        } else {
            f64::from(self.max_count)
        };
        let copies = affordable.min(f64::from(self.max_count)).max(1.0) as u32;

        let entry = self.entry_fraction * wave_duration;
        let step = (wave_duration - entry) / f64::from(copies);
        for copy in 0..copies {
            schedule.push(entry + step * f64::from(copy), boss);
        }

        debug!(
            pattern = NAME,
            unit = %boss.id,
            copies,
            entry,
            "Built wave schedule"
        );

        schedule
    }
}

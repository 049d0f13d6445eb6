//! Burst pattern: the wave budget split across evenly spaced bursts.

use tracing::{debug, trace};

use super::{base_interval, clamp_spacing, stops_on_overshoot, JITTER_MAX, JITTER_MIN};
use crate::context::WaveContext;
use crate::data::UnitType;
use crate::pattern::{is_degenerate, SpawnPattern};
use crate::pool::DrawPool;
use crate::schedule::Schedule;

pub(super) const NAME: &str = "burst";

/// Default fraction of a slot a burst is paced across.
pub(super) const DEFAULT_SPREAD: f64 = 0.5;

const MIN_SPREAD: f64 = 0.05;
const MAX_SPREAD: f64 = 1.0;

/// Spends the budget in `bursts` clusters, one at the start of each slot.
///
/// The wave is cut into equal slots. Burst `b` spends toward the cumulative
/// target `budget * (b + 1) / bursts`, pacing its spawns over the first
/// `spread` of its slot. Spawns never spill into the next slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    bursts: u32,
    spread: f64,
    spacing_adjust: f64,
}

impl Burst {
    /// Create the pattern. At least one burst is used and `spread` is
    /// clamped to `[0.05, 1.0]`.
    #[must_use]
    pub fn new(bursts: u32, spread: f64) -> Self {
        let spread = if spread.is_nan() {
            DEFAULT_SPREAD
        } else {
            spread.clamp(MIN_SPREAD, MAX_SPREAD)
        };
        Self {
            bursts: bursts.max(1),
            spread,
            spacing_adjust: super::DEFAULT_SPACING_ADJUST,
        }
    }

    /// Set the pacing multiplier, clamped to `[0.5, 2.0]`.
    #[must_use]
    pub fn with_spacing_adjust(mut self, spacing_adjust: f64) -> Self {
        self.spacing_adjust = clamp_spacing(spacing_adjust);
        self
    }

    /// Number of bursts.
    #[must_use]
    pub fn bursts(&self) -> u32 {
        self.bursts
    }

    /// Fraction of each slot a burst is paced across.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    fn slot_bounds(&self, wave_duration: f64, burst: u32) -> (f64, f64) {
        let count = f64::from(self.bursts);
        let start = wave_duration * f64::from(burst) / count;
        let end = wave_duration * f64::from(burst + 1) / count;
        (start, end.min(wave_duration))
    }
}

impl Default for Burst {
    fn default() -> Self {
        Self::new(3, DEFAULT_SPREAD)
    }
}

impl SpawnPattern for Burst {
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

        let count = f64::from(self.bursts);
        let share = budget / count;
        let slot = wave_duration / count;
        let interval = base_interval(
            slot * self.spread,
            share,
            draws.average_cost(),
            self.spacing_adjust,
        );

        let mut spent = 0.0;

        'bursts: for burst in 0..self.bursts {
            let (start, end) = self.slot_bounds(wave_duration, burst);
            let target = budget * f64::from(burst + 1) / count;
            let mut cursor = start;

            while spent < target && cursor < end {
                let Some(pick) = draws.draw(ctx) else {
                    break 'bursts;
                };

                let headroom = target - spent;
                if stops_on_overshoot(pick.cost, headroom) {
                    trace!(burst, unit = %pick.id, headroom, "Burst target reached");
                    break;
                }

                schedule.push(cursor, pick);
                spent += pick.cost;
                cursor += interval * ctx.jitter(JITTER_MIN, JITTER_MAX);
            }
        }

        debug!(
            pattern = NAME,
            bursts = self.bursts,
            entries = schedule.len(),
            spent,
            budget,
            interval,
            "Built wave schedule"
        );

        schedule
    }
}

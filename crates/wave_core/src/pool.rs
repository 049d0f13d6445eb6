//! Draw set shared by the built-in patterns.
//!
//! Narrows the caller's pool to units the wave can afford and indexes the
//! elite variant of each unit once per build.

use std::collections::HashMap;

use tracing::trace;

use crate::context::WaveContext;
use crate::data::UnitType;

/// Affordable units of one pool plus their elite variants.
#[derive(Debug, Clone)]
pub struct DrawPool<'p> {
    units: Vec<&'p UnitType>,
    /// Index into `units` of each unit's elite variant.
    elites: Vec<Option<usize>>,
    average_cost: f64,
}

impl<'p> DrawPool<'p> {
    /// Build the draw set for a wave budget.
    ///
    /// Units costing more than the whole budget can never be scheduled and
    /// are left out. The average cost is taken over the full pool and
    /// floored at 1.
    #[must_use]
    pub fn new(pool: &'p [UnitType], budget: f64) -> Self {
        let units: Vec<&UnitType> = pool.iter().filter(|u| u.cost <= budget).collect();

        let mut first_elite: HashMap<&str, usize> = HashMap::new();
        for (index, unit) in units.iter().enumerate() {
            if unit.is_elite() {
                first_elite.entry(unit.family()).or_insert(index);
            }
        }

        let elites = units
            .iter()
            .map(|unit| {
                if unit.is_elite() {
                    None
                } else {
                    first_elite.get(unit.family()).copied()
                }
            })
            .collect();

        let average_cost = if pool.is_empty() {
            1.0
        } else {
            let total: f64 = pool.iter().map(|u| u.cost).sum();
            (total / pool.len() as f64).max(1.0)
        };

        Self {
            units,
            elites,
            average_cost,
        }
    }

    /// Affordable units in pool order.
    #[must_use]
    pub fn units(&self) -> &[&'p UnitType] {
        &self.units
    }

    /// Number of affordable units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if nothing in the pool fits the budget.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Mean cost over the full pool, at least 1.
    #[must_use]
    pub fn average_cost(&self) -> f64 {
        self.average_cost
    }

    /// Elite variant of the unit at `index`, if the pool has one.
    #[must_use]
    pub fn elite_variant(&self, index: usize) -> Option<&'p UnitType> {
        self.elites
            .get(index)
            .copied()
            .flatten()
            .map(|elite| self.units[elite])
    }

    /// Pick one unit: a uniform index draw followed by the elite roll.
    ///
    /// Both draws are always taken, whether or not an upgrade exists.
    pub fn draw(&self, ctx: &mut WaveContext) -> Option<&'p UnitType> {
        let index = ctx.draw_index(self.units.len());
        let upgrade = ctx.roll_elite();
        let pick = *self.units.get(index)?;

        if upgrade {
            if let Some(elite) = self.elite_variant(index) {
                trace!(base = %pick.id, elite = %elite.id, "Elite upgrade");
                return Some(elite);
            }
        }
        Some(pick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ScalingTier;

    fn pool() -> Vec<UnitType> {
        vec![
            UnitType::new("crawler", 1.0),
            UnitType::new("wasp", 2.0),
            UnitType::elite_of("crawler_elite", "crawler", 4.0),
            UnitType::elite_of("crawler_elite_b", "crawler", 5.0),
            UnitType::new("behemoth", 30.0).with_tier(ScalingTier::Boss),
        ]
    }

    #[test]
    fn test_filters_unaffordable_units() {
        let pool = pool();
        let draws = DrawPool::new(&pool, 10.0);
        assert_eq!(draws.len(), 4);
        assert!(draws.units().iter().all(|u| u.id != "behemoth"));

        let broke = DrawPool::new(&pool, 0.5);
        assert!(broke.is_empty());
    }

    #[test]
    fn test_average_cost_uses_full_pool() {
        let pool = pool();
        let draws = DrawPool::new(&pool, 10.0);
        assert!((draws.average_cost() - 42.0 / 5.0).abs() < 1e-12);

        let cheap = vec![UnitType::new("mite", 0.25)];
        assert_eq!(DrawPool::new(&cheap, 5.0).average_cost(), 1.0);
    }

    #[test]
    fn test_first_elite_variant_wins() {
        let pool = pool();
        let draws = DrawPool::new(&pool, 10.0);
        assert_eq!(draws.elite_variant(0).map(|u| u.id.as_str()), Some("crawler_elite"));
        assert!(draws.elite_variant(1).is_none());
        assert!(draws.elite_variant(2).is_none());
    }

    #[test]
    fn test_unaffordable_elite_is_not_offered() {
        let pool = pool();
        let draws = DrawPool::new(&pool, 3.0);
        assert!(draws.elite_variant(0).is_none());
    }

    #[test]
    fn test_draw_on_empty_pool() {
        let draws = DrawPool::new(&[], 10.0);
        let mut ctx = WaveContext::seeded(1);
        assert!(draws.draw(&mut ctx).is_none());
    }

    #[test]
    fn test_guaranteed_upgrade() {
        let pool = vec![
            UnitType::new("crawler", 1.0),
            UnitType::elite_of("crawler_elite", "crawler", 3.0),
        ];
        let draws = DrawPool::new(&pool, 10.0);
        let mut ctx = WaveContext::seeded(11).with_elite_chance(1.0);
        for _ in 0..50 {
            let pick = draws.draw(&mut ctx).unwrap();
            assert_eq!(pick.id, "crawler_elite");
        }
    }
}

//! Unit catalog: the authored set of unit types a wave can draw from.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::unit_type::{ScalingTier, UnitType};
use crate::error::{Result, WaveError};

/// Complete unit catalog definition.
///
/// # Example RON
///
/// ```ron
/// UnitCatalog(
///     units: [
///         UnitType(id: "crawler", cost: 1.0),
///         UnitType(id: "crawler_elite", cost: 3.0, tier: Elite, family: Some("crawler")),
///         UnitType(id: "behemoth", cost: 20.0, tier: Boss),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitCatalog {
    /// All unit types in authoring order.
    pub units: Vec<UnitType>,
}

impl UnitCatalog {
    /// Create a catalog from a list of units.
    #[must_use]
    pub fn new(units: Vec<UnitType>) -> Self {
        Self { units }
    }

    /// Parse a catalog from RON source.
    ///
    /// `origin` names the source in error messages (usually a file path).
    pub fn parse(source: &str, origin: &str) -> Result<Self> {
        ron::from_str(source).map_err(|e| WaveError::DataParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }

    /// All units in authoring order.
    #[must_use]
    pub fn units(&self) -> &[UnitType] {
        &self.units
    }

    /// Find a unit by its ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&UnitType> {
        self.units.iter().find(|u| u.id == id)
    }

    /// Get all units at a specific tier.
    pub fn units_at_tier(&self, tier: ScalingTier) -> impl Iterator<Item = &UnitType> {
        self.units.iter().filter(move |u| u.tier == tier)
    }

    /// Find the elite variant of the unit with the given ID.
    #[must_use]
    pub fn elite_variant_of(&self, id: &str) -> Option<&UnitType> {
        let base = self.get(id)?;
        if base.is_elite() {
            return None;
        }
        self.units_at_tier(ScalingTier::Elite)
            .find(|u| u.family() == base.family())
    }

    /// Resolve a wave pool from unit IDs.
    ///
    /// An empty ID list selects the whole catalog.
    pub fn select(&self, ids: &[String]) -> Result<Vec<UnitType>> {
        if ids.is_empty() {
            return Ok(self.units.clone());
        }

        ids.iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| WaveError::UnknownUnitId(id.clone()))
            })
            .collect()
    }

    /// Validate internal consistency of the catalog.
    ///
    /// Checks for:
    /// - Costs are positive and finite
    /// - Unit IDs are unique
    /// - Family references resolve to a catalog entry
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for unit in &self.units {
            if !unit.has_valid_cost() {
                errors.push(
                    WaveError::InvalidCost {
                        id: unit.id.clone(),
                        cost: unit.cost,
                    }
                    .to_string(),
                );
            }

            if !seen.insert(unit.id.as_str()) {
                errors.push(WaveError::DuplicateUnitId(unit.id.clone()).to_string());
            }

            if let Some(family) = &unit.family {
                if self.get(family).is_none() {
                    errors.push(
                        WaveError::UnknownFamily {
                            id: unit.id.clone(),
                            family: family.clone(),
                        }
                        .to_string(),
                    );
                }
            }
        }

        errors
    }
}

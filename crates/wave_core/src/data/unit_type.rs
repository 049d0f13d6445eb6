//! Unit type descriptors consumed by spawn patterns.

use serde::{Deserialize, Serialize};

/// Difficulty/reward tier of a unit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScalingTier {
    /// Regular unit.
    #[default]
    Normal,
    /// Rare upgraded variant, reached through the elite roll.
    Elite,
    /// Wave-ending heavy unit, used by the boss pattern.
    Boss,
}

impl ScalingTier {
    /// Get the lowercase label for this tier.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Elite => "elite",
            Self::Boss => "boss",
        }
    }
}

/// Static description of one spawnable unit.
///
/// Authored as content and never mutated at runtime. Schedules borrow unit
/// types from the caller's pool rather than copying them.
///
/// # Example RON
///
/// ```ron
/// UnitType(
///     id: "crawler_elite",
///     cost: 4.0,
///     tier: Elite,
///     family: Some("crawler"),
///     tags: ["ground"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitType {
    /// Unique string identifier for this unit type.
    pub id: String,

    /// Budget consumed per spawn. Must be positive.
    pub cost: f64,

    /// Scaling tier.
    #[serde(default)]
    pub tier: ScalingTier,

    /// Base unit this entry is a variant of.
    ///
    /// A unit without a family is the head of its own family, so an elite
    /// variant points at the base unit's ID here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Free-form tags (e.g., "ground", "air").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl UnitType {
    /// Create a normal-tier unit with the given cost.
    #[must_use]
    pub fn new(id: impl Into<String>, cost: f64) -> Self {
        Self {
            id: id.into(),
            cost,
            tier: ScalingTier::Normal,
            family: None,
            tags: Vec::new(),
        }
    }

    /// Create an elite variant of `base`.
    #[must_use]
    pub fn elite_of(id: impl Into<String>, base: &str, cost: f64) -> Self {
        Self {
            tier: ScalingTier::Elite,
            family: Some(base.to_string()),
            ..Self::new(id, cost)
        }
    }

    /// Set the scaling tier.
    #[must_use]
    pub fn with_tier(mut self, tier: ScalingTier) -> Self {
        self.tier = tier;
        self
    }

    /// Set the family this unit belongs to.
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    /// Family name used to match elite variants.
    #[must_use]
    pub fn family(&self) -> &str {
        self.family.as_deref().unwrap_or(&self.id)
    }

    /// Check if this unit is an elite variant.
    #[must_use]
    pub fn is_elite(&self) -> bool {
        self.tier == ScalingTier::Elite
    }

    /// Check if this unit has the specified tag.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check that the cost is usable for budgeting.
    #[must_use]
    pub fn has_valid_cost(&self) -> bool {
        self.cost.is_finite() && self.cost > 0.0
    }
}

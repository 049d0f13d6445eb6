//! Built-in spawn patterns.
//!
//! - [`Continuous`] - even stream of jittered spawns across the wave
//! - [`Burst`] - the same pacing packed into evenly spaced bursts
//! - [`Boss`] - the heaviest affordable unit, entering late

mod boss;
mod burst;
mod continuous;

pub use boss::Boss;
pub use burst::Burst;
pub use continuous::Continuous;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaveError};
use crate::pattern::SpawnPattern;

/// Default pacing multiplier.
pub const DEFAULT_SPACING_ADJUST: f64 = 1.0;
/// Tightest allowed pacing multiplier.
pub const MIN_SPACING_ADJUST: f64 = 0.5;
/// Loosest allowed pacing multiplier.
pub const MAX_SPACING_ADJUST: f64 = 2.0;
/// Lower bound of per-spawn pacing jitter.
pub const JITTER_MIN: f64 = 0.8;
/// Upper bound of per-spawn pacing jitter.
pub const JITTER_MAX: f64 = 1.2;
/// Smallest base interval between spawns.
pub const MIN_BASE_INTERVAL: f64 = 1e-3;
/// Headroom below which an over-budget pick ends the wave.
pub const OVERSHOOT_HEADROOM: f64 = 1.0;

/// Clamp a pacing multiplier into `[MIN_SPACING_ADJUST, MAX_SPACING_ADJUST]`.
#[must_use]
pub fn clamp_spacing(spacing_adjust: f64) -> f64 {
    if spacing_adjust.is_nan() {
        return DEFAULT_SPACING_ADJUST;
    }
    spacing_adjust.clamp(MIN_SPACING_ADJUST, MAX_SPACING_ADJUST)
}

/// Planned interval between spawns.
///
/// `window / ceil(budget / average_cost)`, scaled by `spacing_adjust` and
/// kept at or above [`MIN_BASE_INTERVAL`].
#[must_use]
pub fn base_interval(window: f64, budget: f64, average_cost: f64, spacing_adjust: f64) -> f64 {
    let estimated_count = (budget / average_cost.max(1.0)).ceil().max(1.0);
    (window / estimated_count * spacing_adjust).max(MIN_BASE_INTERVAL)
}

/// Whether a pick that does not fit the remaining headroom ends the loop.
///
/// Overshoot is tolerated while the headroom is still worth a unit of budget.
#[must_use]
pub fn stops_on_overshoot(cost: f64, headroom: f64) -> bool {
    cost > headroom && headroom < OVERSHOOT_HEADROOM
}

/// Serializable choice of built-in pattern.
///
/// # Example RON
///
/// ```ron
/// Burst(bursts: 3, spread: 0.4)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PatternConfig {
    /// See [`Continuous`].
    Continuous {
        /// Pacing multiplier in `[0.5, 2.0]`.
        #[serde(default = "default_spacing_adjust")]
        spacing_adjust: f64,
    },
    /// See [`Burst`].
    Burst {
        /// Number of bursts in the wave.
        bursts: u32,
        /// Fraction of each burst slot the burst is paced across.
        #[serde(default = "default_spread")]
        spread: f64,
        /// Pacing multiplier in `[0.5, 2.0]`.
        #[serde(default = "default_spacing_adjust")]
        spacing_adjust: f64,
    },
    /// See [`Boss`].
    Boss {
        /// Fraction of the wave elapsed before the first boss enters.
        #[serde(default)]
        entry_fraction: f64,
        /// Upper bound on boss copies.
        #[serde(default = "default_max_count")]
        max_count: u32,
    },
}

const fn default_spacing_adjust() -> f64 {
    DEFAULT_SPACING_ADJUST
}

const fn default_spread() -> f64 {
    burst::DEFAULT_SPREAD
}

const fn default_max_count() -> u32 {
    1
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self::Continuous {
            spacing_adjust: DEFAULT_SPACING_ADJUST,
        }
    }
}

impl PatternConfig {
    /// Identifier of the configured pattern.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Continuous { .. } => continuous::NAME,
            Self::Burst { .. } => burst::NAME,
            Self::Boss { .. } => boss::NAME,
        }
    }

    /// Instantiate the configured pattern.
    #[must_use]
    pub fn build_pattern(&self) -> Box<dyn SpawnPattern> {
        match *self {
            Self::Continuous { spacing_adjust } => Box::new(Continuous::new(spacing_adjust)),
            Self::Burst {
                bursts,
                spread,
                spacing_adjust,
            } => Box::new(Burst::new(bursts, spread).with_spacing_adjust(spacing_adjust)),
            Self::Boss {
                entry_fraction,
                max_count,
            } => Box::new(Boss::new(entry_fraction, max_count)),
        }
    }

    /// Check parameters are in their documented ranges.
    ///
    /// Patterns clamp out-of-range values anyway; this is for authoring.
    pub fn validate(&self) -> Result<()> {
        let in_spacing_range =
            |s: f64| (MIN_SPACING_ADJUST..=MAX_SPACING_ADJUST).contains(&s);

        match *self {
            Self::Continuous { spacing_adjust } if !in_spacing_range(spacing_adjust) => {
                Err(WaveError::InvalidPlan(format!(
                    "spacing_adjust {spacing_adjust} outside [{MIN_SPACING_ADJUST}, {MAX_SPACING_ADJUST}]"
                )))
            }
            Self::Burst { bursts: 0, .. } => Err(WaveError::InvalidPlan(
                "burst pattern needs at least one burst".to_string(),
            )),
            Self::Burst { spread, .. } if !(spread > 0.0 && spread <= 1.0) => Err(
                WaveError::InvalidPlan(format!("burst spread {spread} outside (0, 1]")),
            ),
            Self::Burst { spacing_adjust, .. } if !in_spacing_range(spacing_adjust) => {
                Err(WaveError::InvalidPlan(format!(
                    "spacing_adjust {spacing_adjust} outside [{MIN_SPACING_ADJUST}, {MAX_SPACING_ADJUST}]"
                )))
            }
            Self::Boss { entry_fraction, .. }
                if !(0.0..=boss::MAX_ENTRY_FRACTION).contains(&entry_fraction) =>
            {
                Err(WaveError::InvalidPlan(format!(
                    "boss entry_fraction {entry_fraction} outside [0, {}]",
                    boss::MAX_ENTRY_FRACTION
                )))
            }
            Self::Boss { max_count: 0, .. } => Err(WaveError::InvalidPlan(
                "boss pattern needs max_count of at least 1".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_spacing() {
        assert_eq!(clamp_spacing(0.1), MIN_SPACING_ADJUST);
        assert_eq!(clamp_spacing(5.0), MAX_SPACING_ADJUST);
        assert_eq!(clamp_spacing(1.3), 1.3);
        assert_eq!(clamp_spacing(f64::NAN), DEFAULT_SPACING_ADJUST);
    }

    #[test]
    fn test_base_interval() {
        // 10s window, budget 5 of cost-1 units: five spawns two seconds apart.
        assert_eq!(base_interval(10.0, 5.0, 1.0, 1.0), 2.0);
        assert_eq!(base_interval(10.0, 5.0, 1.0, 2.0), 4.0);
        // Average cost is floored at 1.
        assert_eq!(base_interval(10.0, 5.0, 0.2, 1.0), 2.0);
        // Partial units round the estimate up.
        assert_eq!(base_interval(12.0, 5.0, 2.0, 1.0), 4.0);
        // Tiny windows clamp to the minimum interval.
        assert_eq!(base_interval(1e-9, 1_000.0, 1.0, 0.5), MIN_BASE_INTERVAL);
    }

    #[test]
    fn test_stops_on_overshoot() {
        assert!(!stops_on_overshoot(1.0, 3.0));
        assert!(!stops_on_overshoot(4.0, 3.0));
        assert!(stops_on_overshoot(2.0, 0.5));
        assert!(!stops_on_overshoot(0.5, 0.5));
    }

    #[test]
    fn test_config_ron() {
        let config: PatternConfig = ron::from_str("Continuous()").unwrap();
        assert_eq!(config, PatternConfig::default());

        let config: PatternConfig = ron::from_str("Burst(bursts: 3)").unwrap();
        assert_eq!(
            config,
            PatternConfig::Burst {
                bursts: 3,
                spread: burst::DEFAULT_SPREAD,
                spacing_adjust: DEFAULT_SPACING_ADJUST,
            }
        );

        let config: PatternConfig =
            ron::from_str("Boss(entry_fraction: 0.5, max_count: 2)").unwrap();
        assert_eq!(config.name(), "boss");
        assert_eq!(config.build_pattern().name(), "boss");
    }

    #[test]
    fn test_config_validate() {
        assert!(PatternConfig::default().validate().is_ok());
        assert!(PatternConfig::Continuous {
            spacing_adjust: 3.0
        }
        .validate()
        .is_err());
        assert!(PatternConfig::Burst {
            bursts: 0,
            spread: 0.5,
            spacing_adjust: 1.0
        }
        .validate()
        .is_err());
        assert!(PatternConfig::Burst {
            bursts: 2,
            spread: 0.0,
            spacing_adjust: 1.0
        }
        .validate()
        .is_err());
        assert!(PatternConfig::Boss {
            entry_fraction: 0.99,
            max_count: 1
        }
        .validate()
        .is_err());
        assert!(PatternConfig::Boss {
            entry_fraction: 0.5,
            max_count: 0
        }
        .validate()
        .is_err());
    }
}

//! # Wave Core
//!
//! Budget-constrained spawn scheduling for wave-based games.
//!
//! Given a wave duration, a spawn budget and a pool of unit types, a
//! [`SpawnPattern`](pattern::SpawnPattern) produces a [`Schedule`](schedule::Schedule):
//! an ordered list of `(offset, unit)` pairs relative to wave start.
//!
//! This crate contains **only** pure scheduling logic:
//! - No rendering
//! - No IO
//! - No hidden randomness (every draw comes from the [`WaveContext`](context::WaveContext))
//!
//! This separation enables:
//! - Replaying a wave from its seed
//! - Headless tooling and parameter sweeps
//! - Determinism testing
//!
//! ## Crate Structure
//!
//! - [`data`] - Unit catalogs and wave plans (RON)
//! - [`context`] - Random stream and elite chance for one build
//! - [`pattern`] - The [`SpawnPattern`](pattern::SpawnPattern) interface
//! - [`patterns`] - Built-in strategies: continuous, burst, boss
//! - [`schedule`] - Schedule output

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod context;
pub mod data;
pub mod error;
pub mod pattern;
pub mod patterns;
pub mod pool;
pub mod schedule;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::context::{RngStream, WaveContext, WaveRng};
    pub use crate::data::{ScalingTier, UnitCatalog, UnitType, WavePlan};
    pub use crate::error::{Result, WaveError};
    pub use crate::pattern::SpawnPattern;
    pub use crate::patterns::{Boss, Burst, Continuous, PatternConfig};
    pub use crate::schedule::{Schedule, ScheduleEntry};
}

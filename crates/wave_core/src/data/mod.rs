//! Authored wave data.
//!
//! Unit catalogs and wave plans are plain data deserialized from RON. This
//! module performs no IO; file loading lives in `wave_tools`.

mod catalog;
mod unit_type;
mod wave_plan;

pub use catalog::UnitCatalog;
pub use unit_type::{ScalingTier, UnitType};
pub use wave_plan::WavePlan;

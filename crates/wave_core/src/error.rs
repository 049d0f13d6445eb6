//! Error types for catalog authoring and schedule export.
//!
//! Schedule generation itself never fails. These errors only surface at the
//! edges: parsing data files, validating authored content, resolving unit IDs.

use thiserror::Error;

/// Result type alias using [`WaveError`].
pub type Result<T> = std::result::Result<T, WaveError>;

/// Top-level error type for the wave scheduling core.
#[derive(Debug, Error)]
pub enum WaveError {
    /// A unit type carries a cost that is not positive and finite.
    #[error("Invalid cost {cost} for unit '{id}': costs must be positive and finite")]
    InvalidCost {
        /// Offending unit ID.
        id: String,
        /// The rejected cost.
        cost: f64,
    },

    /// Two catalog entries share the same ID.
    #[error("Duplicate unit ID: {0}")]
    DuplicateUnitId(String),

    /// A referenced unit ID does not exist in the catalog.
    #[error("Unknown unit ID: {0}")]
    UnknownUnitId(String),

    /// A variant names a family that no catalog entry belongs to.
    #[error("Unit '{id}' references unknown family '{family}'")]
    UnknownFamily {
        /// Variant unit ID.
        id: String,
        /// Family name that failed to resolve.
        family: String,
    },

    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path (or origin label) of the data that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },

    /// Wave plan parameters are out of range.
    #[error("Invalid wave plan: {0}")]
    InvalidPlan(String),

    /// Schedule could not be encoded.
    #[error("Failed to serialize schedule: {0}")]
    Serialization(String),
}

//! # Wave Test Utilities
//!
//! Shared testing utilities for all crates:
//! - Fixture pools, catalogs and plans
//! - Scripted random streams for exact draw-by-draw tests
//! - Determinism harness
//! - Pacing statistics and schedule invariant checks
//! - Property-based testing strategies

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod determinism;
pub mod fixtures;
pub mod pacing;
pub mod scripted;

pub use scripted::{Draw, DrawLog, ScriptedRng};

/// Re-export proptest for convenience.
pub use proptest;

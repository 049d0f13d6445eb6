//! # Wave Tools
//!
//! Authoring tools for wave data:
//! - RON catalog and plan loading
//! - Data validators
//! - Single-schedule previews
//! - Parallel seed sweeps for pacing statistics

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod loader;
pub mod preview;
pub mod sweep;
pub mod validate;

//! Schedule output produced by spawn patterns.
//!
//! A schedule is an ordered list of `(offset, unit)` pairs relative to wave
//! start. Entries borrow their unit types from the caller's pool, so a
//! schedule cannot outlive the pool it was built from.

use serde::Serialize;

use crate::data::{ScalingTier, UnitType};
use crate::error::{Result, WaveError};

/// One timed spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScheduleEntry<'a> {
    offset: f64,
    unit: &'a UnitType,
}

impl<'a> ScheduleEntry<'a> {
    /// Create an entry.
    #[must_use]
    pub const fn new(offset: f64, unit: &'a UnitType) -> Self {
        Self { offset, unit }
    }

    /// Time offset from wave start.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Unit to spawn.
    #[must_use]
    pub const fn unit(&self) -> &'a UnitType {
        self.unit
    }
}

/// Ordered spawn schedule for one wave.
///
/// Offsets are non-decreasing. Patterns append with a monotonic cursor via
/// [`Schedule::push`]; patterns that generate out of order go through
/// [`Schedule::from_unsorted`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Schedule<'a> {
    entries: Vec<ScheduleEntry<'a>>,
}

impl<'a> Schedule<'a> {
    /// Create an empty schedule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a schedule from entries in any order.
    ///
    /// The sort is stable, so entries sharing an offset keep their relative order.
    #[must_use]
    pub fn from_unsorted(mut entries: Vec<ScheduleEntry<'a>>) -> Self {
        entries.sort_by(|a, b| a.offset.total_cmp(&b.offset));
        Self { entries }
    }

    /// Append an entry. `offset` must not precede the last entry.
    pub fn push(&mut self, offset: f64, unit: &'a UnitType) {
        debug_assert!(
            self.last_offset().map_or(true, |last| offset >= last),
            "schedule offsets must be non-decreasing"
        );
        self.entries.push(ScheduleEntry::new(offset, unit));
    }

    /// All entries in time order.
    #[must_use]
    pub fn entries(&self) -> &[ScheduleEntry<'a>] {
        &self.entries
    }

    /// Iterate entries in time order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleEntry<'a>> {
        self.entries.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the schedule has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of unit costs across all entries.
    #[must_use]
    pub fn total_cost(&self) -> f64 {
        self.entries.iter().map(|e| e.unit.cost).sum()
    }

    /// Offset of the final entry.
    #[must_use]
    pub fn last_offset(&self) -> Option<f64> {
        self.entries.last().map(|e| e.offset)
    }

    /// Number of entries at the given tier.
    #[must_use]
    pub fn count_at_tier(&self, tier: ScalingTier) -> usize {
        self.entries.iter().filter(|e| e.unit.tier == tier).count()
    }

    /// Encode the schedule with bincode.
    ///
    /// Identical schedules always encode to identical bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| WaveError::Serialization(e.to_string()))
    }

    /// Consume the schedule, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<ScheduleEntry<'a>> {
        self.entries
    }
}

impl<'s, 'a> IntoIterator for &'s Schedule<'a> {
    type Item = &'s ScheduleEntry<'a>;
    type IntoIter = std::slice::Iter<'s, ScheduleEntry<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

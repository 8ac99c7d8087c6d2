// logtally - core/summary.rs
//
// Per-severity aggregation over loaded records.
// Core layer: pure logic, no I/O.

use crate::core::model::{Level, LogRecord};
use indexmap::IndexMap;
use serde::Serialize;

/// Number of records per level.
///
/// Only levels that occur at least once are present. Iteration order is the
/// order in which each level was first seen in the input, which is the order
/// the report tables are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SeverityCounts {
    counts: IndexMap<Level, usize>,
}

impl SeverityCounts {
    /// Count for `level`, or `None` if the level never occurred.
    pub fn get(&self, level: Level) -> Option<usize> {
        self.counts.get(&level).copied()
    }

    /// `(level, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, usize)> + '_ {
        self.counts.iter().map(|(level, count)| (*level, *count))
    }

    /// Sum of all counts; equals the number of aggregated records.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct levels seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Count records per level in a single pass.
pub fn count_by_level(records: &[LogRecord]) -> SeverityCounts {
    let mut counts: IndexMap<Level, usize> = IndexMap::with_capacity(Level::all().len());
    for record in records {
        *counts.entry(record.level).or_insert(0) += 1;
    }

    tracing::debug!(
        records = records.len(),
        levels = counts.len(),
        "Severity counts computed"
    );

    SeverityCounts { counts }
}

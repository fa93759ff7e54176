//! Bounded computation history.
//!
//! Each calculator session keeps the five most recent computations, newest
//! first. The ledger is in-memory only and resets with the process, matching
//! the source tool's behavior of clearing on reload. Entries are never
//! mutated after insertion, only evicted from the tail.

use crate::constants::history::HISTORY_CAPACITY;
use crate::result::ComputationResult;
use chrono::{DateTime, Utc};
use emscalc_types::InputSet;
use serde::Serialize;
use std::collections::VecDeque;

/// One recorded computation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// When the computation completed
    pub timestamp: DateTime<Utc>,
    /// Snapshot of the raw inputs that produced the result
    pub inputs: InputSet,
    /// The result as returned to the caller
    pub result: ComputationResult,
}

/// Append-only, fixed-capacity, most-recent-first log of computations
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLedger {
    /// Empty ledger
    pub fn new() -> Self {
        Self { entries: VecDeque::with_capacity(HISTORY_CAPACITY) }
    }

    /// Prepend an entry, silently dropping the oldest once capacity is hit
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Entries newest first
    pub fn list(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no computation has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ComputationResult;

    fn entry(primary: f64) -> HistoryEntry {
        HistoryEntry {
            timestamp: Utc::now(),
            inputs: InputSet::new(),
            result: ComputationResult {
                calculator: "test",
                primary_value: primary,
                primary_unit: "",
                secondary_values: Vec::new(),
                category: "normal",
                interpretation: "Normal",
                recommendations: Vec::new(),
            },
        }
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut ledger = HistoryLedger::new();
        for i in 0..6 {
            ledger.record(entry(f64::from(i)));
        }
        assert_eq!(ledger.len(), 5);
        let primaries: Vec<f64> =
            ledger.list().map(|e| e.result.primary_value).collect();
        // Newest first; the very first computation (0.0) was evicted.
        assert_eq!(primaries, vec![5.0, 4.0, 3.0, 2.0, 1.0]);
    }
}

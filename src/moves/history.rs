//! Undo history: strict LIFO, single-step, no redo.

use serde::{Deserialize, Serialize};

use super::record::MoveRecord;

/// Executed moves, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an executed move.
    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Take the most recent move, if any.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.records.pop()
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All recorded moves, oldest first.
    #[must_use]
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }
}

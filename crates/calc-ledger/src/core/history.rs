//! Calculation history
//!
//! Append-only and unbounded: entries are never edited or removed for the
//! lifetime of the owning calculator. Only the crate can append.

use serde::{Deserialize, Serialize};

use crate::core::{Operation, Outcome};
use crate::render::format_number;

/// A single completed operation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    operand1: f64,
    operand2: f64,
    operation: Operation,
    result: Outcome,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(operand1: f64, operand2: f64, operation: Operation, result: Outcome) -> Self {
        Self {
            operand1,
            operand2,
            operation,
            result,
        }
    }

    /// First operand
    #[must_use]
    pub fn operand1(&self) -> f64 {
        self.operand1
    }

    /// Second operand
    #[must_use]
    pub fn operand2(&self) -> f64 {
        self.operand2
    }

    /// Operation performed
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Recorded result, or the division-by-zero marker
    #[must_use]
    pub fn result(&self) -> Outcome {
        self.result
    }

    /// Returns a compact display string, e.g. `2 + 3 = 5`
    #[must_use]
    pub fn display(&self) -> String {
        let result = match self.result {
            Outcome::Value(v) => format_number(v),
            Outcome::DivisionByZero => "Division by zero".to_string(),
        };
        format!(
            "{} {} {} = {}",
            format_number(self.operand1),
            self.operation.symbol(),
            format_number(self.operand2),
            result
        )
    }
}

/// Ordered, append-only log of history entries
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Returns the oldest entry
    #[must_use]
    pub fn first(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Returns the last n entries (newest first)
    #[must_use]
    pub fn last_n(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    /// Borrowed view of all entries, oldest first
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Owned copy of all entries, oldest first
    #[must_use]
    pub fn to_vec(&self) -> Vec<HistoryEntry> {
        self.entries.clone()
    }

    /// Serializes the history to JSON
    ///
    /// Non-finite results have no JSON representation and come out as `null`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Exports history as one display line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

//! Bounded rolling log of past comparisons.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::change::{CoinCount, Denominations};
use crate::compare::Comparison;
use crate::config::DEFAULT_HISTORY_CAPACITY;
use crate::error::Result;

/// Summary of one comparison, as kept in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub amount: usize,
    pub denominations: Denominations,
    pub greedy_count: CoinCount,
    pub exact_count: CoinCount,
    pub agreed: bool,
}

impl HistoryEntry {
    pub fn from_comparison(comparison: &Comparison, timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            amount: comparison.amount,
            denominations: comparison.denominations.clone(),
            greedy_count: comparison.greedy.result.count(),
            exact_count: comparison.exact.result.count(),
            agreed: comparison.counts_agree(),
        }
    }
}

/// The most recent comparisons, newest first, up to a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Records `comparison` stamped with the current time.
    pub fn record(&mut self, comparison: &Comparison) {
        self.push(HistoryEntry::from_comparison(comparison, Utc::now()));
    }

    /// Adds an entry at the front, dropping the oldest ones past capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    /// Entries from newest to oldest.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Changes the capacity, trimming the oldest entries if it shrank.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.entries.truncate(capacity);
    }

    /// Reads a history previously written by [`History::save`].
    ///
    /// A missing file yields an empty history with the default capacity.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("no history at {}, starting fresh", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

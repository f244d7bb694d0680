//! Caller-owned record of stock additions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Quantity;

/// One timestamped "added" line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLogEntry {
    pub at: DateTime<Utc>,
    pub item: String,
    pub qty: Quantity,
}

impl StockLogEntry {
    pub fn added(item: impl Into<String>, qty: Quantity) -> Self {
        Self {
            at: Utc::now(),
            item: item.into(),
            qty,
        }
    }
}

impl core::fmt::Display for StockLogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: Added {} of {}", self.at, self.qty, self.item)
    }
}

/// Append-only collection handed to [`crate::Inventory::add_logged`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StockLog {
    entries: Vec<StockLogEntry>,
}

impl StockLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: StockLogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[StockLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(ToString::to_string)
    }
}

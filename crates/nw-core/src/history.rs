//! Bounded roll history, most recent first.

use chrono::{DateTime, Local};

use crate::roll::RollBatch;

/// Default number of entries the history keeps.
pub const HISTORY_LIMIT: usize = 50;

/// One logged roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    timestamp: DateTime<Local>,
    names: Vec<String>,
}

impl HistoryEntry {
    /// Create an entry from rolled names.
    pub fn new(timestamp: DateTime<Local>, names: Vec<String>) -> Self {
        Self { timestamp, names }
    }

    /// Create an entry for a roll batch.
    pub fn from_batch(timestamp: DateTime<Local>, batch: &RollBatch) -> Self {
        Self::new(timestamp, batch.names())
    }

    /// The rolled names in position order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Wall-clock time of the roll as `HH:MM:SS`.
    pub fn display_time(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.display_time(), self.names.join(", "))
    }
}

/// Roll history holding at most `limit` entries.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    limit: usize,
}

impl HistoryLog {
    /// An empty log with the default limit.
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    /// An empty log keeping at most `limit` entries (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Insert `entry` at the front, evicting the oldest beyond the limit.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// One `"{time} - {names}"` line per entry, most recent first.
    pub fn export_text(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

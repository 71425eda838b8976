//! In-memory capped history.
//!
//! A [`HistoryLog`] keeps at most `capacity` entries, newest first. Pushing
//! onto a full log drops the oldest entry.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::HistoryError;

/// One recorded item with its identity and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry<T> {
    /// Time-ordered identifier (UUID v7).
    pub id: Uuid,
    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,
    /// The recorded item.
    pub record: T,
}

impl<T> HistoryEntry<T> {
    /// Stamp a record with a fresh id and the current time.
    pub fn new(record: T) -> Self {
        Self {
            id: Uuid::now_v7(),
            recorded_at: Utc::now(),
            record,
        }
    }
}

/// Capped, most-recent-first list of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog<T> {
    capacity: NonZeroUsize,
    entries: Vec<HistoryEntry<T>>,
}

impl<T> HistoryLog<T> {
    /// Create an empty log.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, HistoryError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(HistoryError::ZeroCapacity)?;
        Ok(Self {
            capacity,
            entries: Vec::new(),
        })
    }

    /// Rebuild a log from entries already ordered newest first, keeping
    /// only the first `capacity`.
    pub fn from_entries(
        capacity: usize,
        mut entries: Vec<HistoryEntry<T>>,
    ) -> Result<Self, HistoryError> {
        let mut log = Self::new(capacity)?;
        entries.truncate(log.capacity.get());
        log.entries = entries;
        Ok(log)
    }

    /// Record an item at the front, evicting the oldest entry if full.
    /// Returns the new entry's id.
    pub fn push(&mut self, record: T) -> Uuid {
        let entry = HistoryEntry::new(record);
        let id = entry.id;
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity.get());
        id
    }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<&HistoryEntry<T>> {
        self.entries.first()
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[HistoryEntry<T>] {
        &self.entries
    }

    /// Consume the log, returning its entries newest first.
    pub fn into_entries(self) -> Vec<HistoryEntry<T>> {
        self.entries
    }

    /// Maximum number of entries kept.
    pub const fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of entries held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(capacity: usize) -> HistoryLog<u32> {
        HistoryLog::new(capacity).unwrap_or_else(|e| panic!("non-zero capacity: {e}"))
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(
            HistoryLog::<u32>::new(0),
            Err(HistoryError::ZeroCapacity)
        ));
    }

    #[test]
    fn newest_first() {
        let mut history = log(5);
        history.push(1);
        history.push(2);
        history.push(3);
        let records: Vec<u32> = history.entries().iter().map(|e| e.record).collect();
        assert_eq!(records, [3, 2, 1]);
        assert_eq!(history.latest().map(|e| e.record), Some(3));
    }

    #[test]
    fn full_log_drops_the_oldest() {
        let mut history = log(2);
        for n in 1..=4 {
            history.push(n);
        }
        let records: Vec<u32> = history.entries().iter().map(|e| e.record).collect();
        assert_eq!(records, [4, 3]);
        assert_eq!(history.len(), history.capacity());
    }

    #[test]
    fn push_returns_the_new_id() {
        let mut history = log(3);
        let first = history.push(10);
        let second = history.push(20);
        assert_ne!(first, second);
        assert_eq!(history.latest().map(|e| e.id), Some(second));
    }

    #[test]
    fn from_entries_truncates() {
        let entries: Vec<HistoryEntry<u32>> = (0..10).map(HistoryEntry::new).collect();
        let history = HistoryLog::from_entries(4, entries)
            .unwrap_or_else(|e| panic!("non-zero capacity: {e}"));
        assert_eq!(history.len(), 4);
        assert_eq!(history.latest().map(|e| e.record), Some(0));
    }

    #[test]
    fn entry_serializes_camel_case() {
        let entry = HistoryEntry::new("leaf");
        let json = serde_json::to_value(&entry).unwrap_or_else(|e| panic!("serializable: {e}"));
        assert!(json.get("recordedAt").is_some());
        assert_eq!(json.get("record").and_then(|v| v.as_str()), Some("leaf"));
    }
}

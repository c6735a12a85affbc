//! Append-to-top log of (query, answer) pairs.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::types::{HistoryEntry, QueryAnswer};

/// Ordered record of resolved queries, newest first.
///
/// Entries are immutable once appended and live until session teardown;
/// there is no deletion API.
#[derive(Debug, Default)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one resolved query at the head of the log.
    pub fn append(&mut self, query: impl Into<String>, answer: QueryAnswer) -> &HistoryEntry {
        self.entries.push_front(HistoryEntry::new(query, answer));
        // push_front guarantees a front element.
        &self.entries[0]
    }

    /// Entries in display order: most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn find(&self, id: Uuid) -> Option<&HistoryEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

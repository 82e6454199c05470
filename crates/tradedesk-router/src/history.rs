use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::location::Location;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub location: Location,
    pub visited_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn new(location: Location) -> Self {
        Self {
            id: Uuid::new_v4(),
            location,
            visited_at: Utc::now(),
        }
    }
}

/// Browser-style session history.
///
/// Pushing while not at the newest entry discards everything after the
/// cursor. Once `max_entries` is reached the oldest entry is dropped.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    max_entries: usize,
}

impl History {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    pub fn push(&mut self, location: Location) -> &HistoryEntry {
        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(HistoryEntry::new(location));
        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
        &self.entries[self.cursor]
    }

    /// Replace the current entry. Behaves like `push` on an empty history.
    pub fn replace(&mut self, location: Location) -> &HistoryEntry {
        if self.entries.is_empty() {
            return self.push(location);
        }
        self.entries[self.cursor] = HistoryEntry::new(location);
        &self.entries[self.cursor]
    }

    pub fn back(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty() && self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

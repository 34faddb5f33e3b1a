use super::task::{IdGen, Task};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum retained completed sessions
pub const HISTORY_CAP: usize = 100;

/// Immutable snapshot of one completed session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u64,
    /// Configured duration of the session at completion, in seconds
    pub seconds: u32,
    pub name: String,
    /// Session task list exactly as it stood at completion
    pub session_todos: Vec<Task>,
    pub completed_todos: usize,
    pub total_todos: usize,
    /// Percentage 0..=100; a session with no tasks archives as 0
    pub completion_rate: f64,
    pub at: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(id: u64, seconds: u32, name: &str, session_todos: Vec<Task>) -> Self {
        let total_todos = session_todos.len();
        let completed_todos = session_todos.iter().filter(|t| t.done).count();
        let completion_rate = if total_todos == 0 {
            0.0
        } else {
            completed_todos as f64 / total_todos as f64 * 100.0
        };
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            "Untitled Session".to_string()
        } else {
            trimmed.to_string()
        };

        Self {
            id,
            seconds,
            name,
            session_todos,
            completed_todos,
            total_todos,
            completion_rate,
            at: Utc::now(),
        }
    }

    /// Sessions without tasks show a plain "completed" mark instead of a rate
    pub fn has_tasks(&self) -> bool {
        self.total_todos > 0
    }
}

/// Ordered log of completed sessions, newest first, capped at [`HISTORY_CAP`]
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
    ids: IdGen,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted entries, newest first. Oversized input is
    /// truncated back to the cap.
    pub fn from_entries(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(HISTORY_CAP);
        let mut ids = IdGen::new();
        for entry in &entries {
            ids.observe(entry.id);
        }
        Self { entries, ids }
    }

    /// Insert newest-first, evicting the oldest entry beyond the cap
    pub fn push(&mut self, entry: HistoryEntry) {
        self.ids.observe(entry.id);
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
    }

    /// Build and insert the snapshot for a just-completed session
    pub fn archive(&mut self, seconds: u32, name: &str, session_todos: Vec<Task>) -> u64 {
        let id = self.ids.next();
        self.push(HistoryEntry::new(id, seconds, name, session_todos));
        id
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Index of an entry in newest-first order
    pub fn position(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

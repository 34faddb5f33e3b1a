use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single task, either session-scoped or general
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within its owning list (millisecond-derived, see IdGen)
    pub id: u64,
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(id: u64, text: String) -> Self {
        Self { id, text, done: false }
    }
}

/// Monotonic id source seeded from wall-clock milliseconds.
///
/// Two creates inside the same millisecond still get distinct ids because
/// the source bumps past its last value whenever the clock has not moved.
/// Loaded ids are observed so a fresh process never re-issues one.
#[derive(Debug, Clone, Default)]
pub struct IdGen {
    last: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Produce the next id, never repeating an earlier one
    pub fn next(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }

    /// Record an id issued in an earlier process so it is never reused
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }
}

/// An ordered task list with silent-failure mutation semantics
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    tasks: Vec<Task>,
    ids: IdGen,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a list from persisted tasks, seeding the id source past them
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut ids = IdGen::new();
        for task in &tasks {
            ids.observe(task.id);
        }
        Self { tasks, ids }
    }

    /// Append a task with a fresh id. Whitespace-only text is ignored
    /// and nothing is created.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = self.ids.next();
        self.tasks.push(Task::new(id, trimmed.to_string()));
        Some(id)
    }

    /// Flip the done flag; unknown ids are ignored
    pub fn toggle(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
        }
    }

    /// Remove a task; unknown ids are ignored
    pub fn delete(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Drop every task
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Mark every task not-done, keeping the texts (used when a session repeats)
    pub fn reset_done(&mut self) {
        for task in &mut self.tasks {
            task.done = false;
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks currently marked done
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }
}

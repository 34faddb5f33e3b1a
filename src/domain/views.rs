use super::enums::TodoOrigin;
use super::history::HistoryEntry;
use super::task::{Task, TodoList};

/// One row of the merged task pane
#[derive(Debug, Clone, Copy)]
pub struct TodoRow<'a> {
    pub origin: TodoOrigin,
    pub task: &'a Task,
}

impl<'a> TodoRow<'a> {
    /// Address used to route toggles and deletes back to the owning list
    pub fn key(&self) -> (TodoOrigin, u64) {
        (self.origin, self.task.id)
    }
}

/// Merge both lists for display: session tasks first, then general tasks,
/// each list keeping its own order. Ids may repeat across origins, so rows
/// are addressed by (origin, id).
pub fn merged_rows<'a>(session: &'a TodoList, general: &'a TodoList) -> Vec<TodoRow<'a>> {
    let mut rows = Vec::with_capacity(session.len() + general.len());
    for task in session.iter() {
        rows.push(TodoRow { origin: TodoOrigin::Session, task });
    }
    for task in general.iter() {
        rows.push(TodoRow { origin: TodoOrigin::General, task });
    }
    rows
}

/// Checkbox glyph for a task row
pub fn checkbox(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Completion summary for a history row. Sessions without tasks get the
/// plain completed mark instead of a percentage.
pub fn completion_label(entry: &HistoryEntry) -> String {
    if entry.has_tasks() {
        format!(
            "{}/{} tasks · {:.0}%",
            entry.completed_todos, entry.total_todos, entry.completion_rate
        )
    } else {
        "completed ✓".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_rows_session_first() {
        let mut session = TodoList::new();
        session.add("outline");
        session.add("draft");
        let mut general = TodoList::new();
        general.add("errand");

        let rows = merged_rows(&session, &general);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].origin, TodoOrigin::Session);
        assert_eq!(rows[0].task.text, "outline");
        assert_eq!(rows[1].origin, TodoOrigin::Session);
        assert_eq!(rows[1].task.text, "draft");
        assert_eq!(rows[2].origin, TodoOrigin::General);
        assert_eq!(rows[2].task.text, "errand");
    }

    #[test]
    fn test_merged_rows_disambiguate_colliding_ids() {
        // The same id may exist in both lists
        let session = TodoList::from_tasks(vec![Task::new(1, "s".to_string())]);
        let general = TodoList::from_tasks(vec![Task::new(1, "g".to_string())]);

        let rows = merged_rows(&session, &general);
        assert_eq!(rows[0].key(), (TodoOrigin::Session, 1));
        assert_eq!(rows[1].key(), (TodoOrigin::General, 1));
        assert_ne!(rows[0].key(), rows[1].key());
    }

    #[test]
    fn test_checkbox() {
        assert_eq!(checkbox(false), "[ ]");
        assert_eq!(checkbox(true), "[x]");
    }

    #[test]
    fn test_completion_label_with_tasks() {
        let tasks = vec![
            Task { id: 1, text: "a".to_string(), done: true },
            Task { id: 2, text: "b".to_string(), done: false },
            Task { id: 3, text: "c".to_string(), done: true },
        ];
        let entry = HistoryEntry::new(1, 60, "x", tasks);
        assert_eq!(completion_label(&entry), "2/3 tasks · 67%");
    }

    #[test]
    fn test_completion_label_without_tasks() {
        let entry = HistoryEntry::new(1, 60, "x", Vec::new());
        assert_eq!(completion_label(&entry), "completed ✓");
    }
}

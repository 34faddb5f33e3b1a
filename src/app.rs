use crate::alerts::AlertSink;
use crate::domain::{merged_rows, ConfigField, TodoList, TodoOrigin, TodoRow, UiMode};
use crate::persistence::{self, StoredSettings};
use crate::timer::TimerEngine;
use anyhow::Result;
use std::path::PathBuf;

/// Main application state: the countdown engine plus everything the
/// terminal front end layers on top of it (selections, text buffers,
/// dirty flags for the three records).
pub struct AppState {
    pub engine: TimerEngine,
    pub general_todos: TodoList,

    /// Selected row in the merged task pane
    pub selected_todo: usize,
    /// Selected history entry id; drives the detail overlay
    pub selected_history: Option<u64>,
    /// Countdown-only display, hiding both list panes
    pub focus_view: bool,
    /// Pending general-task text; Some while the input line is open
    pub task_input: Option<String>,

    /// Focused configuration form field
    pub config_field: ConfigField,
    /// Text buffer of the focused form field
    pub config_buffer: String,

    storage: PathBuf,
    pub settings_dirty: bool,
    pub todos_dirty: bool,
    pub history_dirty: bool,
}

impl AppState {
    /// Load the three records from the storage directory and assemble the
    /// app. Loading never fails; broken or absent records fall back to
    /// their defaults.
    pub fn new(storage: PathBuf, alerts: Box<dyn AlertSink>) -> Self {
        let settings = persistence::load_settings(&persistence::settings_file(&storage));
        let (config, session_tasks) = settings.into_parts();
        let history = persistence::load_history(&persistence::history_file(&storage));
        let todos = persistence::load_todos(&persistence::todos_file(&storage));

        Self {
            engine: TimerEngine::restore(config, session_tasks, history, alerts),
            general_todos: TodoList::from_tasks(todos),
            selected_todo: 0,
            selected_history: None,
            focus_view: false,
            task_input: None,
            config_field: ConfigField::Hours,
            config_buffer: String::new(),
            storage,
            settings_dirty: false,
            todos_dirty: false,
            history_dirty: false,
        }
    }

    /// Input dispatch view: text capture wins over the form, the form wins
    /// over the run screen. Derived on demand so it can never go stale.
    pub fn ui_mode(&self) -> UiMode {
        if self.task_input.is_some() {
            UiMode::AddingTask
        } else if self.engine.is_configuring() {
            UiMode::Configure
        } else {
            UiMode::Run
        }
    }

    // --- countdown controls -------------------------------------------------

    pub fn toggle_start_pause(&mut self) {
        // Starting from the completed screen clears the session list,
        // which lives in the settings record
        let restarting = self.engine.is_completed();
        self.engine.toggle_start_pause();
        if restarting {
            self.settings_dirty = true;
            self.clamp_todo_selection();
        }
        self.engine.alerts().haptic();
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.engine.alerts().haptic();
    }

    pub fn quick_add(&mut self) {
        self.engine.quick_add();
        self.engine.alerts().haptic();
    }

    pub fn repeat(&mut self) {
        if !self.engine.is_completed() {
            return;
        }
        self.engine.repeat();
        self.settings_dirty = true;
    }

    pub fn new_session(&mut self) {
        if !self.engine.is_completed() {
            return;
        }
        self.engine.new_session();
        self.settings_dirty = true;
        self.clamp_todo_selection();
        self.enter_form();
    }

    /// Advance the countdown by however many ticks came due. A completion
    /// archives a history entry, which makes the history record dirty.
    pub fn tick(&mut self, count: u32) {
        if count == 0 {
            return;
        }
        let archived = self.engine.history().len();
        for _ in 0..count {
            self.engine.tick();
        }
        if self.engine.history().len() != archived {
            self.history_dirty = true;
        }
    }

    // --- configuration form -------------------------------------------------

    pub fn toggle_configure(&mut self) {
        if self.engine.is_configuring() {
            self.engine.close_configure();
        } else {
            self.engine.open_configure();
            if self.engine.is_configuring() {
                self.enter_form();
            }
        }
    }

    pub fn close_configure(&mut self) {
        self.engine.close_configure();
    }

    fn enter_form(&mut self) {
        self.config_field = ConfigField::Hours;
        self.load_field_buffer();
    }

    /// Seed the text buffer from the field's current value
    fn load_field_buffer(&mut self) {
        let config = self.engine.config();
        self.config_buffer = match self.config_field {
            ConfigField::Hours => config.hours.to_string(),
            ConfigField::Minutes => config.minutes.to_string(),
            ConfigField::Seconds => config.seconds.to_string(),
            ConfigField::Name => config.name.clone(),
            ConfigField::NewTask => String::new(),
        };
    }

    /// Commit the focused field. On the task line this adds a session task
    /// and leaves the cursor in place for the next one.
    pub fn commit_config_field(&mut self) {
        match self.config_field {
            ConfigField::NewTask => {
                if self.engine.add_session_task(&self.config_buffer.clone()).is_some() {
                    self.settings_dirty = true;
                }
                self.config_buffer.clear();
            }
            field => {
                self.engine.commit_field(field, &self.config_buffer.clone());
                self.settings_dirty = true;
            }
        }
    }

    pub fn config_next_field(&mut self) {
        self.commit_config_field();
        self.config_field = self.config_field.next();
        self.load_field_buffer();
    }

    pub fn config_prev_field(&mut self) {
        self.commit_config_field();
        self.config_field = self.config_field.prev();
        self.load_field_buffer();
    }

    pub fn config_push_char(&mut self, c: char) {
        if self.config_field.is_numeric() && !c.is_ascii_digit() {
            return;
        }
        self.config_buffer.push(c);
    }

    /// Backspace in the form: trims the buffer, or with an empty task line
    /// removes the most recently added session task.
    pub fn config_backspace(&mut self) {
        if self.config_buffer.pop().is_some() {
            return;
        }
        if self.config_field == ConfigField::NewTask {
            let last_id = self.engine.session_todos().as_slice().last().map(|t| t.id);
            if let Some(id) = last_id {
                self.engine.delete_session_task(id);
                self.settings_dirty = true;
            }
        }
    }

    /// Restore the form defaults, dropping pending session tasks
    pub fn config_reset_defaults(&mut self) {
        self.engine.reset_config_defaults();
        self.settings_dirty = true;
        self.load_field_buffer();
    }

    /// Leave the form, committing whatever is in the focused field first
    pub fn config_done(&mut self) {
        self.commit_config_field();
        self.engine.close_configure();
    }

    // --- task lists ---------------------------------------------------------

    /// Merged rows for the task pane: session tasks first, then general
    pub fn visible_rows(&self) -> Vec<TodoRow<'_>> {
        merged_rows(self.engine.session_todos(), &self.general_todos)
    }

    pub fn open_task_input(&mut self) {
        self.task_input = Some(String::new());
    }

    pub fn cancel_task_input(&mut self) {
        self.task_input = None;
    }

    /// Submit the input line as a new general task
    pub fn submit_task_input(&mut self) {
        if let Some(text) = self.task_input.take() {
            if self.general_todos.add(&text).is_some() {
                self.todos_dirty = true;
            }
        }
    }

    pub fn move_selection_up(&mut self) {
        self.selected_todo = self.selected_todo.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let rows = self.visible_rows().len();
        if rows > 0 && self.selected_todo < rows - 1 {
            self.selected_todo += 1;
        }
    }

    /// Toggle the selected row, routed to its owning list by (origin, id)
    pub fn toggle_selected_todo(&mut self) {
        let key = self.visible_rows().get(self.selected_todo).map(TodoRow::key);
        if let Some((origin, id)) = key {
            match origin {
                TodoOrigin::Session => {
                    self.engine.toggle_session_task(id);
                    self.settings_dirty = true;
                }
                TodoOrigin::General => {
                    self.general_todos.toggle(id);
                    self.todos_dirty = true;
                }
            }
        }
    }

    pub fn delete_selected_todo(&mut self) {
        let key = self.visible_rows().get(self.selected_todo).map(TodoRow::key);
        if let Some((origin, id)) = key {
            match origin {
                TodoOrigin::Session => {
                    self.engine.delete_session_task(id);
                    self.settings_dirty = true;
                }
                TodoOrigin::General => {
                    self.general_todos.delete(id);
                    self.todos_dirty = true;
                }
            }
            self.clamp_todo_selection();
        }
    }

    pub fn clear_general_todos(&mut self) {
        if self.general_todos.is_empty() {
            return;
        }
        self.general_todos.clear();
        self.todos_dirty = true;
        self.clamp_todo_selection();
    }

    fn clamp_todo_selection(&mut self) {
        let rows = self.visible_rows().len();
        if rows == 0 {
            self.selected_todo = 0;
        } else if self.selected_todo >= rows {
            self.selected_todo = rows - 1;
        }
    }

    // --- history ------------------------------------------------------------

    /// Move the history selection one entry older, starting at the newest
    pub fn select_history_older(&mut self) {
        let entries = self.engine.history().entries();
        if entries.is_empty() {
            return;
        }
        self.selected_history = match self.selected_position() {
            None => Some(entries[0].id),
            Some(pos) if pos + 1 < entries.len() => Some(entries[pos + 1].id),
            Some(pos) => Some(entries[pos].id),
        };
    }

    /// Move the history selection one entry newer; stepping past the
    /// newest drops the selection
    pub fn select_history_newer(&mut self) {
        self.selected_history = match self.selected_position() {
            None => None,
            Some(0) => None,
            Some(pos) => self.engine.history().entries().get(pos - 1).map(|e| e.id),
        };
    }

    fn selected_position(&self) -> Option<usize> {
        self.selected_history.and_then(|id| self.engine.history().position(id))
    }

    pub fn clear_history(&mut self) {
        if self.engine.history().is_empty() {
            return;
        }
        self.engine.clear_history();
        self.selected_history = None;
        self.history_dirty = true;
    }

    // --- presentation toggles ----------------------------------------------

    pub fn toggle_focus_view(&mut self) {
        self.focus_view = !self.focus_view;
    }

    /// Esc on the run screen: drop the history selection first, then leave
    /// the focus view
    pub fn dismiss(&mut self) {
        if self.selected_history.is_some() {
            self.selected_history = None;
        } else {
            self.focus_view = false;
        }
    }

    // --- persistence --------------------------------------------------------

    pub fn needs_save(&self) -> bool {
        self.settings_dirty || self.todos_dirty || self.history_dirty
    }

    /// Flush whichever records are dirty. Each record is written
    /// independently, so one failing write leaves the others saved.
    pub fn save(&mut self) -> Result<()> {
        if !self.needs_save() {
            return Ok(());
        }
        persistence::ensure_dir(&self.storage)?;

        if self.settings_dirty {
            let settings =
                StoredSettings::from_engine(self.engine.config(), self.engine.session_todos());
            persistence::save_settings(&persistence::settings_file(&self.storage), &settings)?;
            self.settings_dirty = false;
        }
        if self.todos_dirty {
            persistence::save_todos(
                &persistence::todos_file(&self.storage),
                self.general_todos.as_slice(),
            )?;
            self.todos_dirty = false;
        }
        if self.history_dirty {
            persistence::save_history(
                &persistence::history_file(&self.storage),
                self.engine.history().entries(),
            )?;
            self.history_dirty = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::SilentAlerts;
    use crate::domain::EngineState;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        // A directory nothing ever writes to; loads fall back to defaults
        let storage = std::env::temp_dir().join("sesh-app-tests-unwritten");
        AppState::new(storage, Box::new(SilentAlerts))
    }

    #[test]
    fn test_new_app_starts_from_defaults() {
        let app = create_test_app();
        assert_eq!(app.ui_mode(), UiMode::Run);
        assert_eq!(app.engine.state(), EngineState::Paused);
        assert_eq!(app.engine.remaining(), 1500);
        assert!(app.general_todos.is_empty());
        assert!(app.engine.history().is_empty());
        assert!(!app.needs_save());
    }

    #[test]
    fn test_ui_mode_projection() {
        let mut app = create_test_app();
        assert_eq!(app.ui_mode(), UiMode::Run);

        app.toggle_configure();
        assert_eq!(app.ui_mode(), UiMode::Configure);
        app.toggle_configure();
        assert_eq!(app.ui_mode(), UiMode::Run);

        app.open_task_input();
        assert_eq!(app.ui_mode(), UiMode::AddingTask);
        app.cancel_task_input();
        assert_eq!(app.ui_mode(), UiMode::Run);
    }

    #[test]
    fn test_submit_task_input_adds_general_task() {
        let mut app = create_test_app();
        app.open_task_input();
        app.task_input = Some("buy stamps".to_string());
        app.submit_task_input();

        assert_eq!(app.general_todos.len(), 1);
        assert_eq!(app.general_todos.as_slice()[0].text, "buy stamps");
        assert!(app.todos_dirty);
        assert!(app.task_input.is_none());
    }

    #[test]
    fn test_blank_task_input_adds_nothing() {
        let mut app = create_test_app();
        app.open_task_input();
        app.task_input = Some("   ".to_string());
        app.submit_task_input();

        assert!(app.general_todos.is_empty());
        assert!(!app.todos_dirty);
    }

    #[test]
    fn test_merged_rows_route_toggles_by_origin() {
        let mut app = create_test_app();
        app.engine.add_session_task("session work");
        app.general_todos.add("general chore");

        // Row 0 is the session task
        app.selected_todo = 0;
        app.toggle_selected_todo();
        assert!(app.engine.session_todos().as_slice()[0].done);
        assert!(!app.general_todos.as_slice()[0].done);
        assert!(app.settings_dirty);
        assert!(!app.todos_dirty);

        // Row 1 is the general task
        app.selected_todo = 1;
        app.toggle_selected_todo();
        assert!(app.general_todos.as_slice()[0].done);
        assert!(app.todos_dirty);
    }

    #[test]
    fn test_delete_selected_clamps_selection() {
        let mut app = create_test_app();
        app.general_todos.add("one");
        app.general_todos.add("two");
        app.selected_todo = 1;

        app.delete_selected_todo();
        assert_eq!(app.general_todos.len(), 1);
        assert_eq!(app.selected_todo, 0);

        app.delete_selected_todo();
        assert!(app.visible_rows().is_empty());
        assert_eq!(app.selected_todo, 0);
        // Nothing selected, nothing to delete
        app.delete_selected_todo();
    }

    #[test]
    fn test_selection_moves_inside_merged_bounds() {
        let mut app = create_test_app();
        app.engine.add_session_task("s");
        app.general_todos.add("g");

        app.move_selection_down();
        assert_eq!(app.selected_todo, 1);
        app.move_selection_down();
        assert_eq!(app.selected_todo, 1);
        app.move_selection_up();
        assert_eq!(app.selected_todo, 0);
        app.move_selection_up();
        assert_eq!(app.selected_todo, 0);
    }

    #[test]
    fn test_config_form_commits_on_field_move() {
        let mut app = create_test_app();
        app.toggle_configure();
        assert_eq!(app.config_field, ConfigField::Hours);
        assert_eq!(app.config_buffer, "0");

        app.config_buffer.clear();
        app.config_push_char('1');
        app.config_next_field();

        assert_eq!(app.engine.config().hours, 1);
        assert_eq!(app.config_field, ConfigField::Minutes);
        assert_eq!(app.config_buffer, "25");
        assert!(app.settings_dirty);
    }

    #[test]
    fn test_config_numeric_fields_reject_letters() {
        let mut app = create_test_app();
        app.toggle_configure();
        app.config_buffer.clear();
        app.config_push_char('x');
        app.config_push_char('7');
        assert_eq!(app.config_buffer, "7");

        // The name field takes anything
        app.config_field = ConfigField::Name;
        app.config_buffer.clear();
        app.config_push_char('x');
        app.config_push_char('7');
        assert_eq!(app.config_buffer, "x7");
    }

    #[test]
    fn test_config_task_line_adds_and_stays() {
        let mut app = create_test_app();
        app.toggle_configure();
        app.config_field = ConfigField::NewTask;
        app.config_buffer = "outline".to_string();
        app.commit_config_field();

        assert_eq!(app.engine.session_todos().len(), 1);
        assert_eq!(app.config_field, ConfigField::NewTask);
        assert_eq!(app.config_buffer, "");
        assert!(app.settings_dirty);
    }

    #[test]
    fn test_config_backspace_on_empty_task_line_removes_last_task() {
        let mut app = create_test_app();
        app.engine.add_session_task("first");
        app.engine.add_session_task("second");
        app.toggle_configure();
        app.config_field = ConfigField::NewTask;
        app.config_buffer.clear();

        app.config_backspace();
        let tasks = app.engine.session_todos().as_slice();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "first");
    }

    #[test]
    fn test_config_reset_defaults_reloads_buffer() {
        let mut app = create_test_app();
        app.toggle_configure();
        app.config_buffer = "9".to_string();
        app.config_next_field();
        app.engine.add_session_task("pending");

        app.config_reset_defaults();
        assert_eq!(app.engine.config().hours, 0);
        assert!(app.engine.session_todos().is_empty());
        // Buffer re-seeded from the focused field's restored value
        assert_eq!(app.config_buffer, "25");
    }

    #[test]
    fn test_config_done_commits_focused_field() {
        let mut app = create_test_app();
        app.toggle_configure();
        app.config_buffer = "2".to_string();
        app.config_done();

        assert_eq!(app.ui_mode(), UiMode::Run);
        assert_eq!(app.engine.config().hours, 2);
        assert_eq!(app.engine.total_seconds(), 2 * 3600 + 25 * 60);
    }

    #[test]
    fn test_tick_marks_history_dirty_on_completion() {
        let mut app = create_test_app();
        app.toggle_configure();
        app.config_buffer = "0".to_string();
        app.config_next_field(); // hours = 0
        app.config_buffer = "0".to_string();
        app.config_next_field(); // minutes = 0
        app.config_buffer = "2".to_string();
        app.config_next_field(); // seconds = 2
        app.close_configure();

        app.toggle_start_pause();
        app.tick(1);
        assert!(!app.history_dirty);
        app.tick(1);
        assert!(app.history_dirty);
        assert_eq!(app.engine.history().len(), 1);
    }

    #[test]
    fn test_restart_from_completed_marks_settings_dirty() {
        let mut app = create_test_app();
        app.engine.commit_field(ConfigField::Minutes, "0");
        app.engine.commit_field(ConfigField::Seconds, "1");
        app.engine.add_session_task("will be cleared");
        app.settings_dirty = false;

        app.toggle_start_pause();
        app.tick(1);
        assert!(app.engine.is_completed());

        app.toggle_start_pause();
        assert!(app.engine.session_todos().is_empty());
        assert!(app.settings_dirty);
    }

    #[test]
    fn test_repeat_and_new_session_mark_settings_dirty() {
        let mut app = create_test_app();
        app.engine.commit_field(ConfigField::Minutes, "0");
        app.engine.commit_field(ConfigField::Seconds, "1");
        app.toggle_start_pause();
        app.tick(1);
        app.settings_dirty = false;

        app.repeat();
        assert!(app.settings_dirty);
        assert!(app.engine.is_running());

        // Outside the completed screen both are ignored
        app.settings_dirty = false;
        app.repeat();
        app.new_session();
        assert!(!app.settings_dirty);
    }

    #[test]
    fn test_history_selection_walk() {
        let mut app = create_test_app();
        app.engine.commit_field(ConfigField::Minutes, "0");
        app.engine.commit_field(ConfigField::Seconds, "1");
        for _ in 0..3 {
            app.toggle_start_pause();
            app.tick(1);
            app.reset();
        }
        assert_eq!(app.engine.history().len(), 3);
        let newest = app.engine.history().entries()[0].id;
        let middle = app.engine.history().entries()[1].id;
        let oldest = app.engine.history().entries()[2].id;

        app.select_history_older();
        assert_eq!(app.selected_history, Some(newest));
        app.select_history_older();
        assert_eq!(app.selected_history, Some(middle));
        app.select_history_older();
        assert_eq!(app.selected_history, Some(oldest));
        // Already at the oldest entry
        app.select_history_older();
        assert_eq!(app.selected_history, Some(oldest));

        app.select_history_newer();
        assert_eq!(app.selected_history, Some(middle));
        app.select_history_newer();
        assert_eq!(app.selected_history, Some(newest));
        // Stepping past the newest drops the selection
        app.select_history_newer();
        assert_eq!(app.selected_history, None);
    }

    #[test]
    fn test_dismiss_prefers_history_selection() {
        let mut app = create_test_app();
        app.engine.commit_field(ConfigField::Seconds, "1");
        app.engine.commit_field(ConfigField::Minutes, "0");
        app.toggle_start_pause();
        app.tick(1);

        app.toggle_focus_view();
        app.select_history_older();
        assert!(app.selected_history.is_some());

        app.dismiss();
        assert_eq!(app.selected_history, None);
        assert!(app.focus_view);

        app.dismiss();
        assert!(!app.focus_view);
    }

    #[test]
    fn test_clear_history_and_general() {
        let mut app = create_test_app();
        app.engine.commit_field(ConfigField::Minutes, "0");
        app.engine.commit_field(ConfigField::Seconds, "1");
        app.toggle_start_pause();
        app.tick(1);
        app.select_history_older();
        app.general_todos.add("chore");
        app.history_dirty = false;
        app.todos_dirty = false;

        app.clear_history();
        assert!(app.engine.history().is_empty());
        assert_eq!(app.selected_history, None);
        assert!(app.history_dirty);

        app.clear_general_todos();
        assert!(app.general_todos.is_empty());
        assert!(app.todos_dirty);

        // Clearing empty lists does not re-dirty the records
        app.history_dirty = false;
        app.todos_dirty = false;
        app.clear_history();
        app.clear_general_todos();
        assert!(!app.needs_save());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = temp_dir.path().to_path_buf();

        let mut app = AppState::new(storage.clone(), Box::new(SilentAlerts));
        app.toggle_configure();
        app.config_buffer = "1".to_string();
        app.config_next_field(); // hours
        app.config_buffer = "2".to_string();
        app.config_next_field(); // minutes
        app.config_buffer = "3".to_string();
        app.config_next_field(); // seconds
        app.config_buffer = "Morning pages".to_string();
        app.config_next_field(); // name
        app.config_buffer = "draft".to_string();
        app.commit_config_field(); // session task
        app.config_done();

        app.open_task_input();
        app.task_input = Some("water plants".to_string());
        app.submit_task_input();

        app.save().unwrap();
        assert!(!app.needs_save());

        let restored = AppState::new(storage, Box::new(SilentAlerts));
        assert_eq!(restored.engine.config().hours, 1);
        assert_eq!(restored.engine.config().minutes, 2);
        assert_eq!(restored.engine.config().seconds, 3);
        assert_eq!(restored.engine.config().name, "Morning pages");
        assert_eq!(restored.engine.session_todos().len(), 1);
        assert_eq!(restored.engine.session_todos().as_slice()[0].text, "draft");
        assert_eq!(restored.general_todos.len(), 1);
        assert_eq!(restored.general_todos.as_slice()[0].text, "water plants");
        assert_eq!(restored.engine.remaining(), 3723);
    }

    #[test]
    fn test_save_without_changes_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let storage = temp_dir.path().join("never-created");

        let mut app = AppState::new(storage.clone(), Box::new(SilentAlerts));
        app.save().unwrap();
        // No dirty records, so the directory is never even created
        assert!(!storage.exists());
    }
}

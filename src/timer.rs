use crate::alerts::AlertSink;
use crate::domain::{
    ConfigField, EngineState, HistoryEntry, HistoryLog, SessionConfig, Task, TodoList,
};

/// Seconds added by the quick-add command
pub const QUICK_ADD_SECS: u32 = 300;

/// Vibration pattern fired when a session completes
const COMPLETION_VIBRATION: [u64; 3] = [200, 100, 200];

/// The countdown engine: one authoritative record of the timer state,
/// the session task list and the history log.
///
/// All mutation goes through the operations below; the tick handler reads
/// and writes this state directly, so there are no shadow copies to go
/// stale. Invariants held across every operation: `remaining` never
/// exceeds `total_seconds`, and `running` and `session_completed` are
/// never both true.
pub struct TimerEngine {
    config: SessionConfig,
    session_todos: TodoList,
    history: HistoryLog,
    remaining: u32,
    total_seconds: u32,
    running: bool,
    session_completed: bool,
    configuring: bool,
    alerts: Box<dyn AlertSink>,
}

impl TimerEngine {
    pub fn new(alerts: Box<dyn AlertSink>) -> Self {
        Self::restore(SessionConfig::default(), Vec::new(), Vec::new(), alerts)
    }

    /// Rebuild the engine from persisted settings and history. The countdown
    /// always comes back paused at the full configured duration.
    pub fn restore(
        config: SessionConfig,
        session_tasks: Vec<Task>,
        history_entries: Vec<HistoryEntry>,
        alerts: Box<dyn AlertSink>,
    ) -> Self {
        let total_seconds = config.total_seconds();
        Self {
            config,
            session_todos: TodoList::from_tasks(session_tasks),
            history: HistoryLog::from_entries(history_entries),
            remaining: total_seconds,
            total_seconds,
            running: false,
            session_completed: false,
            configuring: false,
            alerts,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_completed(&self) -> bool {
        self.session_completed
    }

    pub fn is_configuring(&self) -> bool {
        self.configuring
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn session_todos(&self) -> &TodoList {
        &self.session_todos
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn alerts(&self) -> &dyn AlertSink {
        self.alerts.as_ref()
    }

    /// Observable state, with the configuration form taking display priority
    pub fn state(&self) -> EngineState {
        if self.configuring {
            EngineState::Configuring
        } else if self.running {
            EngineState::Running
        } else if self.session_completed {
            EngineState::Completed
        } else {
            EngineState::Paused
        }
    }

    /// Elapsed fraction of the configured duration, 0.0 when nothing is configured
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        (self.total_seconds - self.remaining) as f64 / self.total_seconds as f64
    }

    /// Start the countdown. From the completed screen this first rewinds the
    /// clock and clears the session list, so the next run starts clean.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        if self.session_completed && self.remaining == 0 {
            self.remaining = self.total_seconds;
            self.session_completed = false;
            self.session_todos.clear();
        }
        self.configuring = false;
        self.running = true;
    }

    /// Stop advancing the countdown; everything else stays put
    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle_start_pause(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Rewind the clock to the configured duration. Tasks are untouched.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.total_seconds;
        self.session_completed = false;
    }

    /// Add five minutes to both the countdown and its basis. Rejected once
    /// the session has completed.
    pub fn quick_add(&mut self) {
        if self.session_completed {
            return;
        }
        self.remaining += QUICK_ADD_SECS;
        self.total_seconds += QUICK_ADD_SECS;
    }

    /// Run the identical session again: same duration, same tasks, all
    /// marked not-done, counting down immediately.
    pub fn repeat(&mut self) {
        if !self.session_completed {
            return;
        }
        self.session_todos.reset_done();
        self.remaining = self.total_seconds;
        self.session_completed = false;
        self.running = true;
    }

    /// Leave the completed screen for a fresh configuration: clock rewound,
    /// session list emptied, form open.
    pub fn new_session(&mut self) {
        if !self.session_completed {
            return;
        }
        self.session_completed = false;
        self.remaining = self.total_seconds;
        self.session_todos.clear();
        self.configuring = true;
    }

    /// Open the configuration form. Ignored while the countdown is running;
    /// the configuration is only editable while stopped.
    pub fn open_configure(&mut self) {
        if !self.running {
            self.configuring = true;
        }
    }

    pub fn close_configure(&mut self) {
        self.configuring = false;
    }

    pub fn toggle_configure(&mut self) {
        if self.configuring {
            self.close_configure();
        } else {
            self.open_configure();
        }
    }

    /// Commit one configuration form field from its text buffer.
    ///
    /// Numeric fields parse-or-zero and clamp into range; committing one
    /// recomputes the countdown basis. The name never touches the clock.
    pub fn commit_field(&mut self, field: ConfigField, raw: &str) {
        match field {
            ConfigField::Hours => self.config.set_hours(SessionConfig::parse_numeric(raw)),
            ConfigField::Minutes => self.config.set_minutes(SessionConfig::parse_numeric(raw)),
            ConfigField::Seconds => self.config.set_seconds(SessionConfig::parse_numeric(raw)),
            ConfigField::Name => {
                self.config.set_name(raw);
                return;
            }
            ConfigField::NewTask => return, // submitted through add_session_task
        }
        self.sync_to_config();
    }

    /// Restore the 25-minute defaults and drop the pending session tasks
    pub fn reset_config_defaults(&mut self) {
        self.config.reset_defaults();
        self.session_todos.clear();
        self.sync_to_config();
    }

    /// Recompute the countdown basis after a duration field changed.
    /// While not running this also rewinds the clock and clears any
    /// completed flag, so the form always previews a fresh session.
    fn sync_to_config(&mut self) {
        self.total_seconds = self.config.total_seconds();
        if !self.running {
            self.remaining = self.total_seconds;
            self.session_completed = false;
        }
    }

    pub fn add_session_task(&mut self, text: &str) -> Option<u64> {
        self.session_todos.add(text)
    }

    pub fn toggle_session_task(&mut self, id: u64) {
        self.session_todos.toggle(id);
    }

    pub fn delete_session_task(&mut self, id: u64) {
        self.session_todos.delete(id);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Advance the countdown by one second. The tick that would cross zero
    /// runs the completion sequence instead; ticks while not running are
    /// no-ops, so nothing stale can fire after a pause or a completion.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        if self.remaining <= 1 && !self.session_completed {
            self.complete();
        } else {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    /// Completion sequence, in order: stop the countdown, archive the
    /// snapshot, flag the session complete, fire the best-effort alerts.
    fn complete(&mut self) {
        self.running = false;
        self.remaining = 0;
        self.history.archive(
            self.total_seconds,
            &self.config.name,
            self.session_todos.as_slice().to_vec(),
        );
        self.session_completed = true;
        self.alerts.vibrate(&COMPLETION_VIBRATION);
        self.alerts.chime();
    }
}

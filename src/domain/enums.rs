/// Observable state of the countdown engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Configuration form is open, countdown not advancing
    Configuring,
    Running,
    Paused,
    /// Countdown reached zero and the session was archived
    Completed,
}

impl EngineState {
    /// Display label for the status line
    pub fn label(&self) -> &'static str {
        match self {
            EngineState::Configuring => "CONFIGURE",
            EngineState::Running => "RUNNING",
            EngineState::Paused => "PAUSED",
            EngineState::Completed => "COMPLETE",
        }
    }

    /// Check if the engine is in a state the countdown can be started from
    pub fn can_start(&self) -> bool {
        !matches!(self, EngineState::Running)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Run,
    Configure,
    AddingTask, // Capturing text for a new general task
}

/// Which list a displayed task row came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoOrigin {
    Session,
    General,
}

impl TodoOrigin {
    /// Short marker shown in front of a task row
    pub fn marker(&self) -> &'static str {
        match self {
            TodoOrigin::Session => "◈",
            TodoOrigin::General => " ",
        }
    }
}

/// Focusable field in the configuration form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Hours,
    Minutes,
    Seconds,
    Name,
    NewTask,
}

impl ConfigField {
    pub fn label(&self) -> &'static str {
        match self {
            ConfigField::Hours => "Hours",
            ConfigField::Minutes => "Minutes",
            ConfigField::Seconds => "Seconds",
            ConfigField::Name => "Session name",
            ConfigField::NewTask => "Add session task",
        }
    }

    /// Whether the field holds a number (committed with clamping)
    pub fn is_numeric(&self) -> bool {
        matches!(self, ConfigField::Hours | ConfigField::Minutes | ConfigField::Seconds)
    }

    pub fn next(&self) -> Self {
        match self {
            ConfigField::Hours => ConfigField::Minutes,
            ConfigField::Minutes => ConfigField::Seconds,
            ConfigField::Seconds => ConfigField::Name,
            ConfigField::Name => ConfigField::NewTask,
            ConfigField::NewTask => ConfigField::Hours,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ConfigField::Hours => ConfigField::NewTask,
            ConfigField::Minutes => ConfigField::Hours,
            ConfigField::Seconds => ConfigField::Minutes,
            ConfigField::Name => ConfigField::Seconds,
            ConfigField::NewTask => ConfigField::Name,
        }
    }

    /// Form traversal order, top to bottom
    pub fn all() -> &'static [ConfigField] {
        &[
            ConfigField::Hours,
            ConfigField::Minutes,
            ConfigField::Seconds,
            ConfigField::Name,
            ConfigField::NewTask,
        ]
    }
}

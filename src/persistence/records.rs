use crate::domain::{HistoryEntry, SessionConfig, Task, TodoList};
use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Typed failure of one persistence record
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not decode the {record} record")]
    Decode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode the {record} record")]
    Encode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// The settings record: last-used configuration plus the pending session
/// tasks, so a configured-but-not-run session survives a restart.
///
/// Field defaults mirror the documented fallbacks, applied per field so a
/// partially written record still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    #[serde(default)]
    pub hours: i64,
    #[serde(default = "default_minutes")]
    pub minutes: i64,
    #[serde(default)]
    pub seconds: i64,
    #[serde(default)]
    pub session_name: String,
    #[serde(default)]
    pub session_todos: Vec<Task>,
}

fn default_minutes() -> i64 {
    25
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 25,
            seconds: 0,
            session_name: String::new(),
            session_todos: Vec::new(),
        }
    }
}

impl StoredSettings {
    pub fn from_engine(config: &SessionConfig, session_todos: &TodoList) -> Self {
        Self {
            hours: config.hours as i64,
            minutes: config.minutes as i64,
            seconds: config.seconds as i64,
            session_name: config.name.clone(),
            session_todos: session_todos.as_slice().to_vec(),
        }
    }

    /// Turn the stored record back into engine state. Values go through the
    /// clamping setters, so a hand-edited file cannot smuggle a value out
    /// of range.
    pub fn into_parts(self) -> (SessionConfig, Vec<Task>) {
        let mut config = SessionConfig::default();
        config.set_hours(self.hours);
        config.set_minutes(self.minutes);
        config.set_seconds(self.seconds);
        config.set_name(&self.session_name);
        (config, self.session_todos)
    }
}

/// Read one record, falling back to its default on a missing file or bad
/// content. The failure is only worth a diagnostic; it must never stop
/// the app from coming up.
fn load_record<T>(path: &Path, record: &'static str) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        return T::default();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Warning: could not read the {} record: {}", record, e);
            return T::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(source) => {
            let err = StoreError::Decode { record, source };
            eprintln!("Warning: {}; starting from defaults", err);
            T::default()
        }
    }
}

fn save_record<T: Serialize>(path: &Path, record: &'static str, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|source| StoreError::Encode { record, source })?;
    super::files::atomic_write(path, &json)?;
    Ok(())
}

pub fn load_todos(path: &Path) -> Vec<Task> {
    load_record(path, "general-todos")
}

pub fn save_todos(path: &Path, tasks: &[Task]) -> Result<()> {
    save_record(path, "general-todos", &tasks)
}

pub fn load_history(path: &Path) -> Vec<HistoryEntry> {
    load_record(path, "history")
}

pub fn save_history(path: &Path, entries: &[HistoryEntry]) -> Result<()> {
    save_record(path, "history", &entries)
}

pub fn load_settings(path: &Path) -> StoredSettings {
    load_record(path, "settings")
}

pub fn save_settings(path: &Path, settings: &StoredSettings) -> Result<()> {
    save_record(path, "settings", settings)
}

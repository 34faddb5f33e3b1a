pub mod clock;
pub mod config;
pub mod enums;
pub mod history;
pub mod task;
pub mod views;

pub use clock::{format_duration, format_time};
pub use config::SessionConfig;
pub use enums::{ConfigField, EngineState, TodoOrigin, UiMode};
pub use history::{HistoryEntry, HistoryLog, HISTORY_CAP};
pub use task::{IdGen, Task, TodoList};
pub use views::{checkbox, completion_label, merged_rows, TodoRow};

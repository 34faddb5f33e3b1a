pub mod files;
pub mod records;

pub use files::{
    atomic_write, ensure_dir, history_file, settings_file, storage_dir, todos_file,
};
pub use records::{
    load_history, load_settings, load_todos, save_history, save_settings, save_todos,
    StoreError, StoredSettings,
};

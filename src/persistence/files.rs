use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Resolve the storage directory: an explicit override wins, otherwise ~/.sesh
pub fn storage_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".sesh"))
}

/// Create the storage directory if it is not there yet
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(())
}

/// General task list record
pub fn todos_file(dir: &Path) -> PathBuf {
    dir.join("todos.json")
}

/// Completed session log record
pub fn history_file(dir: &Path) -> PathBuf {
    dir.join("history.json")
}

/// Last-used configuration record, session tasks included
pub fn settings_file(dir: &Path) -> PathBuf {
    dir.join("settings.json")
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    let mut temp_file =
        NamedTempFile::new_in(dir).context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Rename lands the new content in one step
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_dir_default_is_under_home() {
        let dir = storage_dir(None).unwrap();
        assert!(dir.to_string_lossy().contains(".sesh"));
    }

    #[test]
    fn test_storage_dir_override_wins() {
        let dir = storage_dir(Some(Path::new("/tmp/elsewhere"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/elsewhere"));
    }

    #[test]
    fn test_record_paths() {
        let dir = PathBuf::from("/data");
        assert_eq!(todos_file(&dir), PathBuf::from("/data/todos.json"));
        assert_eq!(history_file(&dir), PathBuf::from("/data/history.json"));
        assert_eq!(settings_file(&dir), PathBuf::from("/data/settings.json"));
    }

    #[test]
    fn test_ensure_dir_creates_missing_directories() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call on an existing directory is fine
        ensure_dir(&nested).unwrap();
    }

    #[test]
    fn test_atomic_write_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("record.json");

        atomic_write(&test_file, "{\"ok\":true}").unwrap();
        assert_eq!(fs::read_to_string(&test_file).unwrap(), "{\"ok\":true}");
    }

    #[test]
    fn test_atomic_write_replaces_existing_content() {
        let temp_dir = tempfile::tempdir().unwrap();
        let test_file = temp_dir.path().join("record.json");

        atomic_write(&test_file, "old").unwrap();
        atomic_write(&test_file, "new").unwrap();
        assert_eq!(fs::read_to_string(&test_file).unwrap(), "new");
    }
}

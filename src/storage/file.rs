//! Directory-backed durable store.

use super::DurableStore;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temp file + rename so a crash never leaves a
/// half-written value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `dir`. The directory is created lazily on
    /// the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the storage directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    ///
    /// Keys are restricted to ASCII alphanumerics, `-` and `_` so a key can
    /// never escape the storage directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            anyhow::bail!("Invalid storage key: '{key}'");
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl DurableStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context(format!("Failed to read {}", path.display())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.dir).context(format!(
            "Failed to create storage directory: {}",
            self.dir.display()
        ))?;

        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, value).context(format!(
            "Failed to write temp storage file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &path).context(format!(
            "Failed to rename temp storage file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context(format!("Failed to remove {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_reads_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        assert_eq!(store.get_item("sidebar-config").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("nested"));

        store.set_item("sidebar-config", r#"{"side":"right"}"#).unwrap();
        assert!(temp_dir.path().join("nested/sidebar-config.json").exists());
        assert_eq!(
            store.get_item("sidebar-config").unwrap().as_deref(),
            Some(r#"{"side":"right"}"#)
        );

        store.remove_item("sidebar-config").unwrap();
        assert_eq!(store.get_item("sidebar-config").unwrap(), None);
        // Removing twice is fine
        store.remove_item("sidebar-config").unwrap();
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        store.set_item("appearance-settings", "{}").unwrap();
        assert!(!temp_dir.path().join("appearance-settings.json.tmp").exists());
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        assert!(store.set_item("../escape", "{}").is_err());
        assert!(store.get_item("a/b").is_err());
        assert!(store.remove_item("").is_err());
    }
}

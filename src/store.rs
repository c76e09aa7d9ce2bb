//! Persisted settings store.
//!
//! The coordinator only depends on the [`SettingsStore`] contract; the
//! default [`FileSettingsStore`] keeps a flat key/value map in a JSON file and
//! writes through on every mutation so settings survive a crash without an
//! explicit flush step.
//!
//! The store never fails the appearance system: unreadable or corrupt files
//! degrade to an empty map with a warning, and write failures are logged and
//! swallowed. Writability is instead probed once up front via
//! [`SettingsStore::is_writable`] so the facade can surface a single alert.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::values::Value;

/// Flat, durable key/value store contract.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&mut self, key: &str, value: Value);
    fn contains(&self, key: &str) -> bool;
    /// Remove every persisted entry.
    fn clear(&mut self);
    /// Human-readable location of the backing file, for diagnostics.
    fn file_name(&self) -> String;
    fn is_writable(&self) -> bool;
}

/// Returns the default settings file path (`~/.config/binview/settings.json`).
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("binview").join("settings.json"))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: BTreeMap<String, Value>,
}

/// JSON-file-backed settings store with write-through persistence.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl FileSettingsStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file is an empty store; a corrupt file is discarded with a
    /// warning rather than aborting startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<StoreFile>(&text) {
                Ok(file) => file.entries,
                Err(err) => {
                    warn!(path = %path.display(), %err, "discarding unreadable settings file");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to read settings file");
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    fn write_through(&self) {
        if let Err(err) = write_store_file(&self.path, &self.entries) {
            warn!(path = %self.path.display(), %err, "failed to persist settings");
        }
    }
}

fn write_store_file(path: &Path, entries: &BTreeMap<String, Value>) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = StoreFile {
        entries: entries.clone(),
    };
    let text = serde_json::to_string_pretty(&file)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
    let mut out = std::fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    out.write_all(text.as_bytes())?;
    out.flush()
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_string(), value);
        self.write_through();
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn clear(&mut self) {
        self.entries.clear();
        // Remove the file outright so no stale entries survive a reset.
        if self.path.exists() {
            if let Err(err) = std::fs::remove_file(&self.path) {
                warn!(path = %self.path.display(), %err, "failed to remove settings file");
            }
        }
    }

    fn file_name(&self) -> String {
        self.path.display().to_string()
    }

    fn is_writable(&self) -> bool {
        if self.path.exists() {
            return !std::fs::metadata(&self.path)
                .map(|meta| meta.permissions().readonly())
                .unwrap_or(true);
        }
        // No file yet: probe the nearest existing ancestor directory.
        let mut dir = self.path.parent();
        while let Some(candidate) = dir {
            if candidate.exists() {
                return !std::fs::metadata(candidate)
                    .map(|meta| meta.permissions().readonly())
                    .unwrap_or(true);
            }
            dir = candidate.parent();
        }
        false
    }
}

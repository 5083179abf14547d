// Scratch save file: a JSON object kept in memory and written on demand

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConsoleError, Result};

/// Key/value store backed by `<name>.json`.
///
/// The file is created (truncated) on construction and rewritten wholesale by
/// [`SaveFile::save`]. It is removed when the value is dropped unless
/// [`SaveFile::keep`] was called.
#[derive(Debug)]
pub struct SaveFile {
    path: PathBuf,
    data: Map<String, Value>,
    unsaved_changes: bool,
    keep_on_drop: bool,
}

impl SaveFile {
    /// Create `<name>.json` in the current directory
    pub fn create(name: &str) -> Result<Self> {
        Self::at(PathBuf::from(format!("{}.json", name)))
    }

    /// Create `<name>.json` inside `dir`
    pub fn create_in<P: AsRef<Path>>(dir: P, name: &str) -> Result<Self> {
        Self::at(dir.as_ref().join(format!("{}.json", name)))
    }

    fn at(path: PathBuf) -> Result<Self> {
        fs::File::create(&path)?;
        log::debug!("Created save file {:?}", path);
        Ok(Self {
            path,
            data: Map::new(),
            unsaved_changes: false,
            keep_on_drop: false,
        })
    }

    /// Store `value` under `key`
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.data.insert(key.to_string(), value);
        self.unsaved_changes = true;
        Ok(())
    }

    /// Read the value under `key` as `T`
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let value = self
            .data
            .get(key)
            .ok_or_else(|| ConsoleError::key_not_found(key))?;
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Remove `key`, returning its previous value
    pub fn remove(&mut self, key: &str) -> Result<Value> {
        let value = self
            .data
            .remove(key)
            .ok_or_else(|| ConsoleError::key_not_found(key))?;
        self.unsaved_changes = true;
        Ok(value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write all data to the file (pretty-printed, 4-space indent)
    pub fn save(&mut self) -> Result<()> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.data.serialize(&mut serializer)?;

        fs::write(&self.path, buffer)?;
        self.unsaved_changes = false;
        log::debug!("Saved {} entries to {:?}", self.data.len(), self.path);
        Ok(())
    }

    /// Clear all data and save the empty object
    pub fn reset(&mut self) -> Result<()> {
        self.data.clear();
        self.save()
    }

    /// Remove the file from disk
    pub fn delete(&self) -> Result<()> {
        fs::remove_file(&self.path)?;
        Ok(())
    }

    /// Absolute path of the save file
    pub fn path(&self) -> Result<PathBuf> {
        Ok(self.path.canonicalize()?)
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved_changes
    }

    /// Leave the file on disk when this value is dropped
    pub fn keep(&mut self) {
        self.keep_on_drop = true;
    }
}

impl Drop for SaveFile {
    fn drop(&mut self) {
        if self.keep_on_drop {
            return;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to remove save file {:?}: {}", self.path, e);
            }
        }
    }
}

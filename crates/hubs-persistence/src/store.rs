//! Key-value slot stores.
//!
//! A [`KeyValueStore`] holds named float slots. The session's input values
//! move in and out of a store through [`read_snapshot`] and
//! [`write_snapshot`], independent of where the store keeps its data.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use hubs_model::{InputField, StateSnapshot};

use crate::error::Result;
use crate::io::{load_state_file, save_state_file};
use crate::types::StateFile;

pub trait KeyValueStore {
    fn get_f32(&self, key: &str) -> Option<f32>;
    fn set_f32(&mut self, key: &str, value: f32);
}

/// Read all three inputs; absent slots take their defaults.
pub fn read_snapshot(store: &impl KeyValueStore) -> StateSnapshot {
    let mut snapshot = StateSnapshot::default();
    for field in InputField::ALL {
        if let Some(value) = store.get_f32(field.key()) {
            snapshot.set(field, value);
        }
    }
    snapshot
}

pub fn write_snapshot(store: &mut impl KeyValueStore, snapshot: &StateSnapshot) {
    for (key, value) in snapshot.slots() {
        store.set_f32(key, value);
    }
}

/// Process-local store; contents are lost when it is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, f32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_f32(&self, key: &str) -> Option<f32> {
        self.slots.get(key).copied()
    }

    fn set_f32(&mut self, key: &str, value: f32) {
        self.slots.insert(key.to_string(), value);
    }
}

/// Store backed by a JSON state file. Changes are held in memory until
/// [`FileStore::persist`].
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    state: StateFile,
}

impl FileStore {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            path: path.to_path_buf(),
            state: load_state_file(path)?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn saved_at(&self) -> Option<&str> {
        self.state.saved_at.as_deref()
    }

    pub fn persist(&mut self) -> Result<()> {
        save_state_file(&mut self.state, &self.path)
    }
}

impl KeyValueStore for FileStore {
    fn get_f32(&self, key: &str) -> Option<f32> {
        self.state.values.get(key).copied().filter(|v| v.is_finite())
    }

    fn set_f32(&mut self, key: &str, value: f32) {
        if !value.is_finite() {
            tracing::warn!(key, value, "skipping non-finite slot value");
            return;
        }
        self.state.values.insert(key.to_string(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(read_snapshot(&store), StateSnapshot::default());

        let snapshot = StateSnapshot {
            lift_value: 14.5,
            slope_value: 1.2,
            width_value: 36.0,
        };
        write_snapshot(&mut store, &snapshot);
        assert_eq!(store.get_f32("slope_value"), Some(1.2));
        assert_eq!(read_snapshot(&store), snapshot);
    }

    #[test]
    fn file_store_keeps_unknown_slots() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set_f32("theme_value", 1.0);
        write_snapshot(&mut store, &StateSnapshot::default());
        store.persist().unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_f32("theme_value"), Some(1.0));
        assert_eq!(reopened.get_f32("width_value"), Some(28.0));
        assert!(reopened.saved_at().is_some());
    }

    #[test]
    fn file_store_skips_non_finite_values() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(&dir.path().join("state.json")).unwrap();
        store.set_f32("lift_value", f32::INFINITY);
        assert_eq!(store.get_f32("lift_value"), None);
    }
}

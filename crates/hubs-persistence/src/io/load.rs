//! State loading operations.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{PersistenceError, Result};
use crate::types::{CURRENT_SCHEMA_VERSION, StateFile};

/// Load a state file. A file that does not exist yet loads as empty.
pub fn load_state_file(path: &Path) -> Result<StateFile> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No state file at {}, using defaults", path.display());
            return Ok(StateFile::default());
        }
        Err(e) => {
            return Err(PersistenceError::Io {
                operation: "read",
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    let state: StateFile =
        serde_json::from_str(&text).map_err(|source| PersistenceError::InvalidFormat {
            path: path.to_path_buf(),
            source,
        })?;

    if state.version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: state.version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    tracing::info!("Loaded state from {}", path.display());
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::save::save_state_file;
    use tempfile::tempdir;

    #[test]
    fn test_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut state = StateFile::default();
        state.values.insert("slope_value".to_string(), 3.5);
        save_state_file(&mut state, &path).unwrap();

        let loaded = load_state_file(&path).unwrap();
        assert_eq!(loaded.values.get("slope_value"), Some(&3.5));
        assert_eq!(loaded.saved_at, state.saved_at);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let loaded = load_state_file(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, StateFile::default());
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, b"NOT_JSON").unwrap();

        let result = load_state_file(&path);
        assert!(matches!(result, Err(PersistenceError::InvalidFormat { .. })));
    }

    #[test]
    fn test_load_unsupported_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("future.json");
        fs::write(&path, br#"{"version": 999, "values": {}}"#).unwrap();

        let result = load_state_file(&path);
        assert!(matches!(
            result,
            Err(PersistenceError::UnsupportedVersion { found: 999, .. })
        ));
    }
}

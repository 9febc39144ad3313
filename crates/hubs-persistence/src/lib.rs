//! Persistent storage for the calculator's input values.
//!
//! The three inputs survive process restarts as named float slots
//! (`lift_value`, `slope_value`, `width_value`). The derived hub depth is
//! never stored; it is recomputed after a restore.
//!
//! # File Format
//!
//! State files are JSON:
//!
//! ```text
//! {
//!   "version": 1,
//!   "saved_at": "2025-01-01T12:00:00+00:00",
//!   "values": { "lift_value": 9.0, "slope_value": 2.0, "width_value": 28.0 }
//! }
//! ```
//!
//! Unknown slots are preserved on rewrite. A missing file or a missing slot
//! restores the documented default.
//!
//! # Example
//!
//! ```ignore
//! use hubs_persistence::{load_state, save_state};
//!
//! let snapshot = load_state(Path::new("state.json"))?;
//! save_state(&snapshot, Path::new("state.json"))?;
//! ```

mod error;
mod io;
mod store;
mod types;

use std::path::Path;

use hubs_model::{CalculatorConfig, StateSnapshot};

pub use error::{PersistenceError, Result};
pub use io::{load_state_file, save_state_file};
pub use store::{FileStore, KeyValueStore, MemoryStore, read_snapshot, write_snapshot};
pub use types::{CURRENT_SCHEMA_VERSION, StateFile};

/// Load the persisted input values, falling back to defaults when the file
/// does not exist.
pub fn load_state(path: &Path) -> Result<StateSnapshot> {
    load_state_with(path, &CalculatorConfig::default())
}

/// Load the persisted input values; a missing file or slot takes the default
/// configured in `config`.
pub fn load_state_with(path: &Path, config: &CalculatorConfig) -> Result<StateSnapshot> {
    Ok(load_state_file(path)?.snapshot_with(config))
}

/// Persist the input values, keeping any other slots already in the file.
pub fn save_state(snapshot: &StateSnapshot, path: &Path) -> Result<()> {
    let mut store = FileStore::open(path)?;
    write_snapshot(&mut store, snapshot);
    store.persist()
}

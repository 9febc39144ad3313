//! On-disk representation of the persisted slots.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use hubs_model::{CalculatorConfig, InputField, StateSnapshot};

/// Current state file schema version.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFile {
    pub version: u32,
    /// RFC 3339 timestamp of the last save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub values: BTreeMap<String, f32>,
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            version: CURRENT_SCHEMA_VERSION,
            saved_at: None,
            values: BTreeMap::new(),
        }
    }
}

impl StateFile {
    /// Stamp the file with the current time.
    pub fn touch(&mut self) {
        self.saved_at = Some(chrono::Utc::now().to_rfc3339());
    }

    /// The input values held by this file. Missing or non-finite slots take
    /// their documented defaults.
    pub fn snapshot(&self) -> StateSnapshot {
        self.snapshot_with(&CalculatorConfig::default())
    }

    /// Like [`StateFile::snapshot`], with missing or non-finite slots taken
    /// from the configured defaults.
    pub fn snapshot_with(&self, config: &CalculatorConfig) -> StateSnapshot {
        let mut snapshot = config.defaults();
        for field in InputField::ALL {
            if let Some(value) = self.values.get(field.key()).copied().filter(|v| v.is_finite()) {
                snapshot.set(field, value);
            }
        }
        snapshot
    }
}

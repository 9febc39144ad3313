//! User settings, loaded from `settings.toml`.
//!
//! Settings are stored in the platform-specific configuration folder:
//! - macOS: ~/Library/Application Support/com.hubs.Hubs/
//! - Windows: %APPDATA%/hubs/Hubs/config/
//! - Linux: ~/.config/hubs/
//!
//! The saved input values live next to them in the platform data folder
//! unless `state_path` or `--state` points elsewhere.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use hubs_model::{CalculatorConfig, CanvasSize};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "hubs";
const APP_NAME: &str = "Hubs";
const CONFIG_FILENAME: &str = "settings.toml";
const STATE_FILENAME: &str = "state.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Where input values are persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_path: Option<PathBuf>,
    /// Field ranges, slider steps and defaults.
    pub ranges: CalculatorConfig,
    /// Canvas size used by `hubs diagram` when no size is given.
    pub canvas: CanvasSize,
}

impl Settings {
    /// Parse settings text, rejecting ranges that cannot drive a slider.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        settings.ranges.validate()?;
        Ok(settings)
    }

    /// Resolve the state file: explicit override, then settings, then the
    /// platform data folder, then the working directory.
    pub fn resolve_state_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.state_path.clone())
            .or_else(default_state_path)
            .unwrap_or_else(|| PathBuf::from(STATE_FILENAME))
    }
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

pub fn default_state_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.data_dir().join(STATE_FILENAME))
}

/// Load settings from `path`, or from the platform location when `None`.
///
/// Returns default settings if:
/// - The settings file doesn't exist
/// - The settings file cannot be parsed or holds invalid ranges
/// - The platform-specific directory cannot be determined
pub fn load_settings(path: Option<&Path>) -> Settings {
    let Some(path) = path.map(Path::to_path_buf).or_else(settings_path) else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };

    match fs::read_to_string(&path) {
        Ok(content) => match Settings::from_toml_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to load settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

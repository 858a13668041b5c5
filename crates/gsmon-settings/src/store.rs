//! Load/create/persist for the settings file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::SettingsResult;
use crate::record::Settings;

/// Loads and persists the settings record at a fixed path.
pub struct SettingsStore;

impl SettingsStore {
    /// Load settings from `path`.
    ///
    /// When the file does not exist yet, the hard-coded defaults are written
    /// back immediately and returned, so a subsequent load reproduces the
    /// same record. A present-but-unparsable file is an error.
    pub fn load(path: &Path) -> SettingsResult<Settings> {
        if path.exists() {
            let raw = fs::read_to_string(path)?;
            let settings = serde_json::from_str(&raw)?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            Self::save(path, &settings)?;
            info!(path = %path.display(), "settings file created with defaults");
            Ok(settings)
        }
    }

    /// Serialize `settings` as pretty JSON to `path`.
    ///
    /// Parent directories are created as needed; creation is idempotent.
    pub fn save(path: &Path, settings: &Settings) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        fs::write(path, json)?;
        Ok(())
    }
}

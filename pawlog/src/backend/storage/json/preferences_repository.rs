//! # Preferences Repository
//!
//! Stores the key-value preferences slot in a single YAML file at the root of
//! the data directory, separate from the record files.
//!
//! ```yaml
//! active_pet_id: 3f2b8c1e-6a0d-4c55-9d1b-2e7f4a9c0b12
//! notifications_enabled: false
//! use_24_hour_time: true
//! data_format_version: "1.0"
//! ```
//!
//! A missing file yields defaults. A malformed file is reported as an error; callers
//! that must not fail treat it as defaults.

use anyhow::{Context, Result};
use log::{debug, info};

use super::connection::{read_if_exists, write_atomic, JsonConnection};
use crate::backend::domain::models::Preferences;
use crate::backend::storage::traits::PreferenceStorage;

#[derive(Debug, Clone)]
pub struct PreferencesRepository {
    connection: JsonConnection,
}

impl PreferencesRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    pub fn set_notifications_enabled(&self, enabled: bool) -> Result<()> {
        let mut preferences = self.load_preferences()?;
        preferences.notifications_enabled = enabled;
        self.save_preferences(&preferences)?;
        info!("Set notifications_enabled to {}", enabled);
        Ok(())
    }

    pub fn set_use_24_hour_time(&self, enabled: bool) -> Result<()> {
        let mut preferences = self.load_preferences()?;
        preferences.use_24_hour_time = enabled;
        self.save_preferences(&preferences)?;
        info!("Set use_24_hour_time to {}", enabled);
        Ok(())
    }
}

impl PreferenceStorage for PreferencesRepository {
    fn load_preferences(&self) -> Result<Preferences> {
        let path = self.connection.preferences_file_path();
        let Some(content) = read_if_exists(&path)? else {
            return Ok(Preferences::default());
        };

        // An empty YAML document decodes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Preferences::default());
        }

        let preferences = serde_yaml::from_str(&content)
            .with_context(|| format!("Malformed preferences file {}", path.display()))?;
        debug!("Loaded preferences from {}", path.display());
        Ok(preferences)
    }

    fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
        let path = self.connection.preferences_file_path();
        let yaml = serde_yaml::to_string(preferences).context("Failed to encode preferences")?;
        write_atomic(&path, yaml.as_bytes())?;
        debug!("Saved preferences to {}", path.display());
        Ok(())
    }
}

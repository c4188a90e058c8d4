//! Lightweight key-value settings kept outside the record files.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current preferences file format
pub const PREFERENCES_FORMAT_VERSION: &str = "1.0";

/// App-wide preferences, persisted in `preferences.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Selected pet, kept as the raw string so a malformed value survives a round trip
    pub active_pet_id: Option<String>,
    pub notifications_enabled: bool,
    pub use_24_hour_time: bool,
    /// Data format version for future migrations
    pub data_format_version: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            active_pet_id: None,
            notifications_enabled: false,
            use_24_hour_time: false,
            data_format_version: PREFERENCES_FORMAT_VERSION.to_string(),
        }
    }
}

impl Preferences {
    /// The stored active pet id, if it parses as a UUID
    pub fn parsed_active_pet_id(&self) -> Option<Uuid> {
        self.active_pet_id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
    }
}

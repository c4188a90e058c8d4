use anyhow::{Context, Result};
use log::{debug, info};

use super::connection::{read_if_exists, write_atomic, JsonConnection};
use crate::backend::domain::models::EventRecord;
use crate::backend::storage::traits::EventStorage;

/// JSON-file event repository (`events.json`, one array of records)
#[derive(Debug, Clone)]
pub struct EventRepository {
    connection: JsonConnection,
}

impl EventRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

/// Decode an events document, upgrading records that predate pets.
///
/// Each record goes through `EventRecord::from_stored`, so a missing `petId`
/// becomes `UNASSIGNED_PET_ID` instead of a decode error.
pub fn decode_events(json: &str) -> serde_json::Result<Vec<EventRecord>> {
    serde_json::from_str(json)
}

/// Encode events in the current schema
pub fn encode_events(events: &[EventRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(events)
}

impl EventStorage for EventRepository {
    fn load_events(&self) -> Result<Vec<EventRecord>> {
        let path = self.connection.events_file_path();
        let Some(content) = read_if_exists(&path)? else {
            return Ok(Vec::new());
        };

        let events = decode_events(&content)
            .with_context(|| format!("Malformed events file {}", path.display()))?;
        info!("Loaded {} events from {}", events.len(), path.display());
        Ok(events)
    }

    fn save_events(&self, events: &[EventRecord]) -> Result<()> {
        let path = self.connection.events_file_path();
        let json = encode_events(events).context("Failed to encode events")?;
        write_atomic(&path, json.as_bytes())?;
        debug!("Saved {} events", events.len());
        Ok(())
    }
}

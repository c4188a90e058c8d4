//! Domain model for a logged care event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::stored_time::deserialize_timestamp;

/// Owner id carried by events written before pets existed.
///
/// Reserved: no real pet is ever created with this id. Records holding it are
/// reassigned by `EventStore::migrate_orphaned`.
pub const UNASSIGNED_PET_ID: Uuid = Uuid::nil();

/// The fixed set of care events that can be logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Pee,
    Poop,
    Water,
    Walk,
    Food,
    Treat,
}

impl EventType {
    /// Declaration order, used for the logging grid
    pub const ALL: [EventType; 6] = [
        EventType::Pee,
        EventType::Poop,
        EventType::Water,
        EventType::Walk,
        EventType::Food,
        EventType::Treat,
    ];

    /// Order in which daily summaries list the kinds
    pub const SUMMARY_ORDER: [EventType; 6] = [
        EventType::Pee,
        EventType::Poop,
        EventType::Food,
        EventType::Water,
        EventType::Walk,
        EventType::Treat,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventType::Pee => "Pee",
            EventType::Poop => "Poop",
            EventType::Water => "Water",
            EventType::Walk => "Walk",
            EventType::Food => "Food",
            EventType::Treat => "Treat",
        }
    }

    /// Stable slot in `ALL`, used for fixed-width counting
    pub fn index(&self) -> usize {
        match self {
            EventType::Pee => 0,
            EventType::Poop => 1,
            EventType::Water => 2,
            EventType::Walk => 3,
            EventType::Food => 4,
            EventType::Treat => 5,
        }
    }
}

/// One logged care action for a pet at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredEventRecord")]
pub struct EventRecord {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub pet_id: Uuid,
}

impl EventRecord {
    /// Create a new record with a fresh id
    pub fn new(event_type: EventType, timestamp: DateTime<Utc>, pet_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            timestamp,
            pet_id,
        }
    }

    /// True for records written before pets existed
    pub fn is_orphaned(&self) -> bool {
        self.pet_id == UNASSIGNED_PET_ID
    }

    /// Upgrade an on-disk record to the current schema.
    ///
    /// A missing `petId` means the record predates pets and is owned by
    /// `UNASSIGNED_PET_ID`.
    pub fn from_stored(stored: StoredEventRecord) -> Self {
        Self {
            id: stored.id,
            event_type: stored.event_type,
            timestamp: stored.timestamp,
            pet_id: stored.pet_id.unwrap_or(UNASSIGNED_PET_ID),
        }
    }
}

/// On-disk shape of an event, covering both the current and the pre-pet schema
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEventRecord {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub pet_id: Option<Uuid>,
}

impl From<StoredEventRecord> for EventRecord {
    fn from(stored: StoredEventRecord) -> Self {
        EventRecord::from_stored(stored)
    }
}

//! # Event Store
//!
//! Owns every logged event across all pets. The list lives in memory, sorted
//! newest first after every mutation, and the whole list is written back through
//! `EventStorage` after each change.
//!
//! Nothing here returns an error to the caller. A failed load starts the store
//! empty; a failed save is logged and the in-memory list stays authoritative for
//! the rest of the process.
//!
//! The store is single-threaded: it holds non-`Send` listener callbacks and all
//! reads and writes are expected from one thread.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use log::{debug, info, warn};
use std::collections::HashSet;
use uuid::Uuid;

use crate::backend::domain::commands::events::LogRequest;
use crate::backend::domain::listeners::{ListenerId, Listeners};
use crate::backend::domain::models::{EventRecord, EventType, UNASSIGNED_PET_ID};
use crate::backend::storage::traits::EventStorage;

/// Number of events shown in the home screen's recent activity list
pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub struct EventStore {
    events: Vec<EventRecord>,
    /// Most recently created record, for the "logged" toast. Not persisted.
    last_logged: Option<EventRecord>,
    storage: Box<dyn EventStorage>,
    listeners: Listeners<EventStore>,
}

impl EventStore {
    /// Load the store from `storage`, starting empty if the data cannot be read
    pub fn open<S: EventStorage + 'static>(storage: S) -> Self {
        let mut events = match storage.load_events() {
            Ok(events) => events,
            Err(e) => {
                warn!("Could not load events, starting with an empty log: {:#}", e);
                Vec::new()
            }
        };
        sort_newest_first(&mut events);
        info!("Event store opened with {} events", events.len());

        Self {
            events,
            last_logged: None,
            storage: Box::new(storage),
            listeners: Listeners::default(),
        }
    }

    /// All events, newest first
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, event_id: Uuid) -> Option<&EventRecord> {
        self.events.iter().find(|e| e.id == event_id)
    }

    pub fn last_logged(&self) -> Option<&EventRecord> {
        self.last_logged.as_ref()
    }

    pub fn clear_last_logged(&mut self) {
        if self.last_logged.take().is_some() {
            self.publish();
        }
    }

    // Write

    /// Log a single event
    pub fn add_one(
        &mut self,
        event_type: EventType,
        timestamp: DateTime<Utc>,
        pet_id: Uuid,
    ) -> EventRecord {
        let record = EventRecord::new(event_type, timestamp, pet_id);
        info!(
            "Logging {} for pet {} at {}",
            event_type.label(),
            pet_id,
            timestamp.to_rfc3339()
        );

        self.events.insert(0, record.clone());
        sort_newest_first(&mut self.events);
        self.last_logged = Some(record.clone());

        self.save();
        self.publish();
        record
    }

    /// Log several kinds at once, all sharing `timestamp` and `pet_id`.
    ///
    /// Duplicate kinds are logged once. The new records are placed ahead of any
    /// existing record with the same timestamp. `last_logged` becomes the first
    /// record of the batch in input order. An empty batch changes nothing.
    pub fn add_batch(
        &mut self,
        types: &[EventType],
        timestamp: DateTime<Utc>,
        pet_id: Uuid,
    ) -> Vec<EventRecord> {
        let mut seen = HashSet::new();
        let batch: Vec<EventRecord> = types
            .iter()
            .copied()
            .filter(|t| seen.insert(*t))
            .map(|t| EventRecord::new(t, timestamp, pet_id))
            .collect();

        if batch.is_empty() {
            debug!("Ignoring empty batch for pet {}", pet_id);
            return batch;
        }
        info!(
            "Logging batch of {} events for pet {} at {}",
            batch.len(),
            pet_id,
            timestamp.to_rfc3339()
        );

        let mut events = batch.clone();
        events.append(&mut self.events);
        sort_newest_first(&mut events);
        self.events = events;
        self.last_logged = batch.first().cloned();

        self.save();
        self.publish();
        batch
    }

    /// Log a confirmed time-picker request: one kind goes through `add_one`,
    /// anything else through `add_batch`
    pub fn log(&mut self, request: &LogRequest, pet_id: Uuid) -> Vec<EventRecord> {
        match request.types.as_slice() {
            [single] => vec![self.add_one(*single, request.timestamp, pet_id)],
            types => self.add_batch(types, request.timestamp, pet_id),
        }
    }

    /// Change the timestamp of an event. Returns false if the id is unknown.
    pub fn update(&mut self, event_id: Uuid, timestamp: DateTime<Utc>) -> bool {
        let Some(event) = self.events.iter_mut().find(|e| e.id == event_id) else {
            debug!("Update ignored, event not found: {}", event_id);
            return false;
        };

        info!(
            "Moving event {} from {} to {}",
            event_id,
            event.timestamp.to_rfc3339(),
            timestamp.to_rfc3339()
        );
        event.timestamp = timestamp;
        sort_newest_first(&mut self.events);

        self.save();
        self.publish();
        true
    }

    /// Remove every event whose id is in `ids`. Returns how many were removed.
    pub fn delete_selected(&mut self, ids: &HashSet<Uuid>) -> usize {
        let before = self.events.len();
        self.events.retain(|e| !ids.contains(&e.id));
        let removed = before - self.events.len();

        if removed == 0 {
            debug!("Delete ignored, none of {} ids matched", ids.len());
            return 0;
        }
        info!("Deleted {} events", removed);

        self.save();
        self.publish();
        removed
    }

    /// Remove every event owned by `pet_id`. Returns how many were removed.
    pub fn delete_all_for_pet(&mut self, pet_id: Uuid) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.pet_id != pet_id);
        let removed = before - self.events.len();

        if removed == 0 {
            debug!("No events to delete for pet {}", pet_id);
            return 0;
        }
        info!("Deleted {} events for pet {}", removed, pet_id);

        self.save();
        self.publish();
        removed
    }

    /// Reassign events written before pets existed to `to_pet_id`.
    ///
    /// Safe to call on every launch: when no event carries `UNASSIGNED_PET_ID`
    /// nothing is written. Returns how many events were reassigned.
    pub fn migrate_orphaned(&mut self, to_pet_id: Uuid) -> usize {
        if to_pet_id == UNASSIGNED_PET_ID {
            warn!("Refusing to migrate orphaned events to the unassigned id");
            return 0;
        }

        let mut migrated = 0;
        for event in self.events.iter_mut().filter(|e| e.is_orphaned()) {
            event.pet_id = to_pet_id;
            migrated += 1;
        }

        if migrated == 0 {
            debug!("No orphaned events to migrate");
            return 0;
        }
        info!("Migrated {} orphaned events to pet {}", migrated, to_pet_id);

        self.save();
        self.publish();
        migrated
    }

    // Read

    /// Events for `pet_id` on the local calendar day `day`, newest first
    pub fn events_for_day(&self, day: NaiveDate, pet_id: Uuid) -> Vec<EventRecord> {
        self.events_for_day_in(day, pet_id, &Local)
    }

    /// Events for `pet_id` on calendar day `day` as seen in `tz`, newest first
    pub fn events_for_day_in<Tz: TimeZone>(
        &self,
        day: NaiveDate,
        pet_id: Uuid,
        tz: &Tz,
    ) -> Vec<EventRecord> {
        self.events
            .iter()
            .filter(|e| e.pet_id == pet_id && e.timestamp.with_timezone(tz).date_naive() == day)
            .cloned()
            .collect()
    }

    /// All events for `pet_id`, newest first
    pub fn events_for_pet(&self, pet_id: Uuid) -> Vec<EventRecord> {
        self.events
            .iter()
            .filter(|e| e.pet_id == pet_id)
            .cloned()
            .collect()
    }

    /// The newest `limit` events for `pet_id`
    pub fn recent(&self, pet_id: Uuid, limit: usize) -> Vec<EventRecord> {
        self.events
            .iter()
            .filter(|e| e.pet_id == pet_id)
            .take(limit)
            .cloned()
            .collect()
    }

    /// The newest `limit` events across all pets
    pub fn recent_all(&self, limit: usize) -> &[EventRecord] {
        &self.events[..limit.min(self.events.len())]
    }

    // Change notification

    /// Register a callback that runs after every change with the updated store
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&EventStore) + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    fn publish(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let mut listeners = std::mem::take(&mut self.listeners);
        listeners.notify(self);
        self.listeners = listeners;
    }

    fn save(&self) {
        if let Err(e) = self.storage.save_events(&self.events) {
            warn!(
                "Failed to save {} events, keeping them in memory: {:#}",
                self.events.len(),
                e
            );
        }
    }
}

/// Stable sort, newest first; equal timestamps keep their relative order
fn sort_newest_first(events: &mut [EventRecord]) {
    events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
}

//! # JSON Storage Module
//!
//! File-based storage for PawLog. Every store keeps its whole list in memory and
//! rewrites its backing file after each mutation.
//!
//! ## File Structure
//!
//! ```text
//! PawLog/
//! ├── events.json        ← array of {id, type, timestamp, petId}
//! ├── pets.json          ← array of {id, name, breed, birthdate}
//! └── preferences.yaml   ← active pet id and app toggles
//! ```
//!
//! All writes go through a temp file and rename.

pub mod connection;
pub mod event_repository;
pub mod pet_repository;
pub mod preferences_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use event_repository::{decode_events, encode_events, EventRepository};
pub use pet_repository::PetRepository;
pub use preferences_repository::PreferencesRepository;

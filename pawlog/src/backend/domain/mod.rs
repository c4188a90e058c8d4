pub mod commands;
pub mod event_store;
pub mod listeners;
pub mod models;
pub mod pet_store;
pub mod startup;
pub mod summary;

pub use event_store::{EventStore, DEFAULT_RECENT_LIMIT};
pub use listeners::ListenerId;
pub use pet_store::PetStore;
pub use startup::StartupReport;
pub use summary::DailyTally;

pub mod event;
pub mod pet;
pub mod preferences;
pub mod stored_time;

pub use event::{EventRecord, EventType, StoredEventRecord, UNASSIGNED_PET_ID};
pub use pet::{AvatarColor, PetRecord};
pub use preferences::Preferences;

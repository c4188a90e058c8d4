//! Storage layer: persistence traits and the JSON file backend.

pub mod json;
pub mod traits;

pub use json::JsonConnection;
pub use traits::{EventStorage, PetStorage, PreferenceStorage};

use anyhow::{Context, Result};
use log::{debug, info};

use super::connection::{read_if_exists, write_atomic, JsonConnection};
use crate::backend::domain::models::PetRecord;
use crate::backend::storage::traits::PetStorage;

/// JSON-file pet repository (`pets.json`, one array in display order)
#[derive(Debug, Clone)]
pub struct PetRepository {
    connection: JsonConnection,
}

impl PetRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }
}

impl PetStorage for PetRepository {
    fn load_pets(&self) -> Result<Vec<PetRecord>> {
        let path = self.connection.pets_file_path();
        let Some(content) = read_if_exists(&path)? else {
            return Ok(Vec::new());
        };

        let pets: Vec<PetRecord> = serde_json::from_str(&content)
            .with_context(|| format!("Malformed pets file {}", path.display()))?;
        info!("Loaded {} pets from {}", pets.len(), path.display());
        Ok(pets)
    }

    fn save_pets(&self, pets: &[PetRecord]) -> Result<()> {
        let path = self.connection.pets_file_path();
        let json = serde_json::to_string_pretty(pets).context("Failed to encode pets")?;
        write_atomic(&path, json.as_bytes())?;
        debug!("Saved {} pets", pets.len());
        Ok(())
    }
}

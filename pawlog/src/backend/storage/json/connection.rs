use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV: &str = "PAWLOG_DATA_DIR";

/// Folder created inside the user's documents directory
pub const DEFAULT_FOLDER_NAME: &str = "PawLog";

pub const EVENTS_FILE: &str = "events.json";
pub const PETS_FILE: &str = "pets.json";
pub const PREFERENCES_FILE: &str = "preferences.yaml";

/// JsonConnection owns the data directory and knows where each backing file lives
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a connection rooted at `base_directory`, creating it if needed
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path).with_context(|| {
                format!("Failed to create data directory {}", base_path.display())
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a connection in the default data directory.
    ///
    /// Uses `$PAWLOG_DATA_DIR` when set, otherwise `~/Documents/PawLog`
    /// (or `~/PawLog` on systems without a documents directory).
    pub fn new_default() -> Result<Self> {
        Self::new(Self::default_data_directory()?)
    }

    /// Resolve the default data directory without creating it
    pub fn default_data_directory() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            let dir = dir.trim();
            if !dir.is_empty() {
                info!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
                return Ok(PathBuf::from(dir));
            }
        }

        let parent = dirs::document_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(parent.join(DEFAULT_FOLDER_NAME))
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn events_file_path(&self) -> PathBuf {
        self.base_directory.join(EVENTS_FILE)
    }

    pub fn pets_file_path(&self) -> PathBuf {
        self.base_directory.join(PETS_FILE)
    }

    pub fn preferences_file_path(&self) -> PathBuf {
        self.base_directory.join(PREFERENCES_FILE)
    }
}

/// Read a whole file, treating a missing file as `None`
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("No file at {}, nothing to load", path.display());
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

/// Write `contents` to `path` through a temp file and rename, so readers see
/// either the old file or the new one, never a partial write
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

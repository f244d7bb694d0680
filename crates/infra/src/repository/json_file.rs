//! Flat JSON file persistence: `{ "<item>": <quantity>, ... }`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use stockroom_inventory::Inventory;

use super::{InventoryRepository, LoadOutcome, StoreError};

/// File used when no path is configured, relative to the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Read the inventory stored at `path`.
///
/// A missing file yields an empty inventory with [`super::LoadSource::Missing`].
/// Any other read failure or malformed JSON is returned as an error, and so is
/// an empty key or a quantity that is not an `i64`.
pub fn load(path: &Path) -> Result<LoadOutcome, StoreError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                path = %path.display(),
                "inventory file not found; starting with empty inventory"
            );
            return Ok(LoadOutcome::missing());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    let inventory = Inventory::from_json(&value).map_err(|source| StoreError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), items = inventory.len(), "inventory loaded");
    Ok(LoadOutcome::stored(inventory))
}

/// Write `inventory` to `path` as pretty-printed JSON, replacing any existing file.
pub fn save(inventory: &Inventory, path: &Path) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(inventory).map_err(StoreError::Serialize)?;

    fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), items = inventory.len(), "inventory saved");
    Ok(())
}

/// Repository backed by a single JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileRepository {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE)
    }
}

impl InventoryRepository for JsonFileRepository {
    fn load(&self) -> Result<LoadOutcome, StoreError> {
        load(&self.path)
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        save(inventory, &self.path)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

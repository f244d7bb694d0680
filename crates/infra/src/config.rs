//! Configuration loading and representation.

use std::path::PathBuf;

use stockroom_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Quantity};

use crate::repository::{DEFAULT_INVENTORY_FILE, JsonFileRepository};

pub const INVENTORY_FILE_ENV: &str = "STOCKROOM_INVENTORY_FILE";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "STOCKROOM_LOW_STOCK_THRESHOLD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// JSON file used by load and save.
    pub path: PathBuf,
    /// Items strictly below this quantity are reported as low.
    pub low_stock_threshold: Quantity,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    /// Defaults overridden by `STOCKROOM_INVENTORY_FILE` and
    /// `STOCKROOM_LOW_STOCK_THRESHOLD` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a closure instead of the env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(INVENTORY_FILE_ENV).filter(|p| !p.is_empty()) {
            config.path = PathBuf::from(path);
        }

        if let Some(raw) = lookup(LOW_STOCK_THRESHOLD_ENV) {
            match raw.trim().parse::<Quantity>() {
                Ok(threshold) => config.low_stock_threshold = threshold,
                Err(err) => tracing::warn!(
                    value = %raw,
                    "{LOW_STOCK_THRESHOLD_ENV} is not an integer ({err}); using {}",
                    config.low_stock_threshold
                ),
            }
        }

        config
    }

    pub fn repository(&self) -> JsonFileRepository {
        JsonFileRepository::new(self.path.clone())
    }
}

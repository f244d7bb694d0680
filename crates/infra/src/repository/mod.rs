//! Inventory persistence abstractions.

pub mod error;
pub mod in_memory;
pub mod json_file;

use std::sync::Arc;

use stockroom_inventory::Inventory;

pub use error::StoreError;
pub use in_memory::InMemoryRepository;
pub use json_file::{DEFAULT_INVENTORY_FILE, JsonFileRepository};

/// Where a loaded inventory came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Read from the backing store.
    Stored,
    /// Nothing was stored yet; the inventory starts empty.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub inventory: Inventory,
    pub source: LoadSource,
}

impl LoadOutcome {
    pub fn stored(inventory: Inventory) -> Self {
        Self {
            inventory,
            source: LoadSource::Stored,
        }
    }

    pub fn missing() -> Self {
        Self {
            inventory: Inventory::new(),
            source: LoadSource::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        self.source == LoadSource::Missing
    }
}

/// Whole-inventory load/save. Every save overwrites what was stored before.
pub trait InventoryRepository: Send + Sync {
    fn load(&self) -> Result<LoadOutcome, StoreError>;

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError>;

    /// Where the inventory lives, for user-facing messages.
    fn location(&self) -> String;

    /// Replace `inventory` wholesale with the stored one (empty if nothing is stored).
    fn load_into(&self, inventory: &mut Inventory) -> Result<LoadSource, StoreError> {
        let outcome = self.load()?;
        inventory.replace_with(outcome.inventory);
        Ok(outcome.source)
    }
}

impl<R> InventoryRepository for Arc<R>
where
    R: InventoryRepository + ?Sized,
{
    fn load(&self) -> Result<LoadOutcome, StoreError> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        (**self).save(inventory)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

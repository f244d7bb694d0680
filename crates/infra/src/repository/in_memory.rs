use std::sync::{PoisonError, RwLock};

use stockroom_inventory::Inventory;

use super::{InventoryRepository, LoadOutcome, StoreError};

/// In-memory repository for tests/dev.
///
/// A save replaces the stored inventory in one assignment, so a writer that
/// panicked can never leave a half-written value behind; poisoned locks are
/// recovered rather than treated as empty.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    inner: RwLock<Option<Inventory>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository that already holds `inventory`.
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inner: RwLock::new(Some(inventory)),
        }
    }
}

impl InventoryRepository for InMemoryRepository {
    fn load(&self) -> Result<LoadOutcome, StoreError> {
        let stored = self
            .inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        Ok(stored.map_or_else(LoadOutcome::missing, LoadOutcome::stored))
    }

    fn save(&self, inventory: &Inventory) -> Result<(), StoreError> {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(inventory.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

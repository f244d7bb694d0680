//! Infrastructure layer: file persistence and configuration.

pub mod config;
pub mod repository;

pub use config::InventoryConfig;
pub use repository::{
    DEFAULT_INVENTORY_FILE, InMemoryRepository, InventoryRepository, JsonFileRepository,
    LoadOutcome, LoadSource, StoreError,
};

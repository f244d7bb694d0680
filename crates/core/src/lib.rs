//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no storage).

pub mod error;
pub mod item_name;

pub use error::{DomainError, DomainResult};
pub use item_name::ItemName;

//! Inventory domain module.
//!
//! This crate contains the stock-keeping rules, implemented purely as
//! deterministic in-memory logic (no IO, no storage). Persistence lives in
//! `stockroom-infra`.

pub mod command;
pub mod log;
pub mod report;
pub mod store;

pub use command::{CommandOutcome, InventoryCommand};
pub use log::{StockLog, StockLogEntry};
pub use report::Report;
pub use store::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, Quantity, Removal};

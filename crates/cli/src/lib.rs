//! Demonstration run of the inventory store.
//!
//! `run` performs a fixed sequence of operations against the configured file
//! and writes everything a user should see (results and warnings) to `out`.
//! `run_with` does the same against any [`InventoryRepository`].

use std::io::Write;

use anyhow::Context;

use stockroom_core::DomainError;
use stockroom_infra::{InventoryConfig, InventoryRepository, LoadSource};
use stockroom_inventory::{Inventory, Quantity, StockLog};

pub fn run(config: &InventoryConfig, out: &mut impl Write) -> anyhow::Result<()> {
    run_with(&config.repository(), config.low_stock_threshold, out)
}

pub fn run_with<R: InventoryRepository>(
    repository: &R,
    low_stock_threshold: Quantity,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut inventory = Inventory::new();
    let mut log = StockLog::new();

    inventory.add_logged("apple", 10, &mut log)?;
    inventory.add_logged("banana", 5, &mut log)?;
    for line in log.lines() {
        tracing::debug!("{line}");
    }

    remove_or_warn(&mut inventory, "apple", 3, out)?;
    remove_or_warn(&mut inventory, "orange", 1, out)?;

    writeln!(out, "Apple stock: {}", inventory.quantity("apple"))?;
    writeln!(
        out,
        "Low items: {:?}",
        inventory.low_items(low_stock_threshold)
    )?;

    repository
        .save(&inventory)
        .context("failed to save inventory")?;
    load_or_warn(repository, &mut inventory, out)?;

    write!(out, "{}", inventory.report())?;
    writeln!(out, "Inventory operations completed successfully")?;
    Ok(())
}

/// Remove stock, turning an unknown item into a printed warning.
pub fn remove_or_warn(
    inventory: &mut Inventory,
    item: &str,
    qty: Quantity,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match inventory.remove(item, qty) {
        Ok(_) => Ok(()),
        Err(DomainError::NotFound(item)) => {
            writeln!(out, "Warning: Item '{item}' not found in inventory")?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Load into `inventory`, turning a missing file into a printed warning.
pub fn load_or_warn<R: InventoryRepository>(
    repository: &R,
    inventory: &mut Inventory,
    out: &mut impl Write,
) -> anyhow::Result<LoadSource> {
    let source = repository
        .load_into(inventory)
        .context("failed to load inventory")?;

    if source == LoadSource::Missing {
        writeln!(
            out,
            "Warning: File '{}' not found. Starting with empty inventory.",
            repository.location()
        )?;
    }
    Ok(source)
}

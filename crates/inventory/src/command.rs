//! Commands built from untyped (JSON) input.
//!
//! Dynamic callers hand over whatever values they have; the type checks happen
//! here so the store itself only ever sees a well-formed name and an integer.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use stockroom_core::item_name::json_kind;
use stockroom_core::{DomainError, DomainResult, ItemName};

use crate::store::{Inventory, Quantity, Removal};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum InventoryCommand {
    Add { item: ItemName, qty: Quantity },
    Remove { item: ItemName, qty: Quantity },
}

/// What a successfully handled command did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(Quantity),
    Removed(Removal),
}

impl InventoryCommand {
    /// Build an add command; a non-string/empty item or non-integer qty is rejected.
    pub fn add(item: &JsonValue, qty: &JsonValue) -> DomainResult<Self> {
        Ok(Self::Add {
            item: ItemName::from_json(item)?,
            qty: quantity_from_json(qty)?,
        })
    }

    pub fn remove(item: &JsonValue, qty: &JsonValue) -> DomainResult<Self> {
        Ok(Self::Remove {
            item: ItemName::from_json(item)?,
            qty: quantity_from_json(qty)?,
        })
    }

    /// Parse `{"op": "add" | "remove", "item": .., "qty": ..}`.
    pub fn from_json(value: &JsonValue) -> DomainResult<Self> {
        Self::deserialize(value).map_err(|e| DomainError::validation(e.to_string()))
    }

    pub fn item(&self) -> &ItemName {
        match self {
            InventoryCommand::Add { item, .. } | InventoryCommand::Remove { item, .. } => item,
        }
    }
}

/// Accept only JSON integers that fit a [`Quantity`].
pub fn quantity_from_json(value: &JsonValue) -> DomainResult<Quantity> {
    if let Some(qty) = value.as_i64() {
        return Ok(qty);
    }
    if value.is_u64() {
        return Err(DomainError::validation(format!(
            "quantity out of range: {value} exceeds {}",
            Quantity::MAX
        )));
    }
    Err(DomainError::validation(format!(
        "quantity must be an integer, got {}",
        json_kind(value)
    )))
}

impl Inventory {
    /// Build a store from an untyped `{ "<item>": <quantity>, ... }` object,
    /// keeping the object's key order.
    pub fn from_json(value: &JsonValue) -> DomainResult<Self> {
        let JsonValue::Object(entries) = value else {
            return Err(DomainError::validation(format!(
                "inventory must be an object, got {}",
                json_kind(value)
            )));
        };

        entries
            .iter()
            .map(|(item, qty)| -> DomainResult<(ItemName, Quantity)> {
                let name = ItemName::new(item.as_str())?;
                let qty = quantity_from_json(qty).map_err(|err| match err {
                    DomainError::Validation(msg) => {
                        DomainError::validation(format!("item '{item}': {msg}"))
                    }
                    other => other,
                })?;
                Ok((name, qty))
            })
            .collect()
    }

    /// Apply a typed command.
    pub fn handle(&mut self, command: &InventoryCommand) -> DomainResult<CommandOutcome> {
        match command {
            InventoryCommand::Add { item, qty } => {
                self.add(item.as_str(), *qty).map(CommandOutcome::Added)
            }
            InventoryCommand::Remove { item, qty } => {
                self.remove(item.as_str(), *qty).map(CommandOutcome::Removed)
            }
        }
    }
}

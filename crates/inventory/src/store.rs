//! In-memory stock store and its add/remove/query rules.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemName};

use crate::log::{StockLog, StockLogEntry};
use crate::report::Report;

/// Integer count of units held for an item.
pub type Quantity = i64;

/// Threshold used by [`Inventory::low_items`] when the caller has no preference.
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Result of a successful removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The item is still held with this quantity.
    Remaining(Quantity),
    /// The quantity reached zero or below and the entry was dropped.
    Deleted,
}

/// In-memory stock store: item name -> quantity, in insertion order.
///
/// Quantities are not clamped. `add` accepts negative deltas, and `remove`
/// only drops an entry once it reaches `<= 0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: IndexMap<ItemName, Quantity>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of `item`, returning the new quantity.
    ///
    /// Missing items start at 0. An empty name is rejected and the store is
    /// left untouched.
    pub fn add(&mut self, item: &str, qty: Quantity) -> DomainResult<Quantity> {
        let name = ItemName::new(item)?;
        let stock = self.items.entry(name).or_insert(0);
        *stock = stock.saturating_add(qty);
        tracing::debug!(item, qty, stock = *stock, "stock added");
        Ok(*stock)
    }

    /// Like [`Inventory::add`], and records a timestamped entry in `log` on success.
    pub fn add_logged(
        &mut self,
        item: &str,
        qty: Quantity,
        log: &mut StockLog,
    ) -> DomainResult<Quantity> {
        let stock = self.add(item, qty)?;
        log.push(StockLogEntry::added(item, qty));
        Ok(stock)
    }

    /// Take `qty` units of `item` out of stock.
    ///
    /// Over-removal is allowed; the entry is dropped once it reaches `<= 0`.
    pub fn remove(&mut self, item: &str, qty: Quantity) -> DomainResult<Removal> {
        let Some(stock) = self.items.get_mut(item) else {
            tracing::debug!(item, "remove of unknown item");
            return Err(DomainError::not_found(item));
        };
        *stock = stock.saturating_sub(qty);
        let remaining = *stock;

        if remaining <= 0 {
            self.items.shift_remove(item);
            tracing::debug!(item, qty, "stock removed, entry dropped");
            Ok(Removal::Deleted)
        } else {
            tracing::debug!(item, qty, stock = remaining, "stock removed");
            Ok(Removal::Remaining(remaining))
        }
    }

    /// Stored quantity, or 0 when the item is not held.
    pub fn quantity(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// Names whose quantity is strictly below `threshold`, in insertion order.
    pub fn low_items(&self, threshold: Quantity) -> Vec<&str> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, Quantity)> + '_ {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replace the whole store (used when loading from persistence).
    pub fn replace_with(&mut self, other: Inventory) {
        *self = other;
    }

    pub fn report(&self) -> Report<'_> {
        Report::new(self)
    }
}

impl FromIterator<(ItemName, Quantity)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (ItemName, Quantity)>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        inventory.extend(iter);
        inventory
    }
}

impl Extend<(ItemName, Quantity)> for Inventory {
    /// Accumulates like repeated `add` calls.
    fn extend<I: IntoIterator<Item = (ItemName, Quantity)>>(&mut self, iter: I) {
        for (name, qty) in iter {
            let stock = self.items.entry(name).or_insert(0);
            *stock = stock.saturating_add(qty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ItemName {
        ItemName::new(s).unwrap()
    }

    fn sample() -> Inventory {
        [(name("apple"), 7), (name("banana"), 5), (name("cherry"), 2)]
            .into_iter()
            .collect()
    }

    #[test]
    fn add_accumulates_and_defaults_to_zero() {
        let mut inv = Inventory::new();
        assert_eq!(inv.add("apple", 10).unwrap(), 10);
        assert_eq!(inv.add("apple", 5).unwrap(), 15);
        assert_eq!(inv.quantity("apple"), 15);
    }

    #[test]
    fn add_with_empty_name_leaves_store_unchanged() {
        let mut inv = sample();
        let before = inv.clone();
        let err = inv.add("", 5).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(inv, before);
    }

    #[test]
    fn add_accepts_negative_quantity() {
        let mut inv = Inventory::new();
        inv.add("apple", 3).unwrap();
        assert_eq!(inv.add("apple", -5).unwrap(), -2);
        assert!(inv.contains("apple"));
    }

    #[test]
    fn add_saturates_instead_of_overflowing() {
        let mut inv = Inventory::new();
        inv.add("apple", Quantity::MAX).unwrap();
        assert_eq!(inv.add("apple", 1).unwrap(), Quantity::MAX);
    }

    #[test]
    fn add_logged_records_entry_only_on_success() {
        let mut inv = Inventory::new();
        let mut log = StockLog::new();

        inv.add_logged("apple", 10, &mut log).unwrap();
        assert!(inv.add_logged("", 10, &mut log).is_err());

        assert_eq!(log.len(), 1);
        let entry = &log.entries()[0];
        assert_eq!(entry.item, "apple");
        assert_eq!(entry.qty, 10);
        assert!(entry.to_string().ends_with(": Added 10 of apple"));
    }

    #[test]
    fn remove_decrements() {
        let mut inv = sample();
        assert_eq!(inv.remove("apple", 3).unwrap(), Removal::Remaining(4));
        assert_eq!(inv.quantity("apple"), 4);
    }

    #[test]
    fn remove_unknown_item_is_not_found_and_leaves_store_unchanged() {
        let mut inv = sample();
        let before = inv.clone();
        let err = inv.remove("orange", 1).unwrap_err();
        assert_eq!(err, DomainError::not_found("orange"));
        assert_eq!(inv, before);
    }

    #[test]
    fn remove_exact_quantity_deletes_entry() {
        let mut inv = Inventory::new();
        inv.add("apple", 10).unwrap();
        assert_eq!(inv.remove("apple", 10).unwrap(), Removal::Deleted);
        assert_eq!(inv.quantity("apple"), 0);
        assert!(!inv.contains("apple"));
        assert!(!inv.report().to_string().contains("apple"));
    }

    #[test]
    fn over_removal_deletes_entry() {
        let mut inv = sample();
        assert_eq!(inv.remove("cherry", 100).unwrap(), Removal::Deleted);
        assert!(!inv.contains("cherry"));
    }

    #[test]
    fn remove_keeps_order_of_remaining_items() {
        let mut inv = sample();
        inv.remove("apple", 7).unwrap();
        let names: Vec<_> = inv.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["banana", "cherry"]);
    }

    #[test]
    fn readded_item_moves_to_the_end() {
        let mut inv = sample();
        inv.remove("apple", 7).unwrap();
        inv.add("apple", 1).unwrap();
        let names: Vec<_> = inv.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["banana", "cherry", "apple"]);
    }

    #[test]
    fn quantity_of_unknown_item_is_zero() {
        assert_eq!(Inventory::new().quantity("ghost"), 0);
    }

    #[test]
    fn low_items_is_strictly_below_threshold() {
        let inv = sample();
        assert_eq!(inv.low_items(DEFAULT_LOW_STOCK_THRESHOLD), vec!["cherry"]);
        assert_eq!(inv.low_items(6), vec!["banana", "cherry"]);
        assert!(inv.low_items(0).is_empty());
    }

    #[test]
    fn replace_with_swaps_whole_store() {
        let mut inv = sample();
        inv.replace_with(Inventory::new());
        assert!(inv.is_empty());
    }

    #[test]
    fn serializes_as_flat_object_in_insertion_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"apple":7,"banana":5,"cherry":2}"#);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: quantity equals the sum of everything added for that name.
            #[test]
            fn quantity_is_sum_of_adds(
                adds in prop::collection::vec(("[a-d]", -1_000i64..1_000i64), 1..40)
            ) {
                let mut inv = Inventory::new();
                for (item, qty) in &adds {
                    inv.add(item, *qty).unwrap();
                }
                for item in ["a", "b", "c", "d"] {
                    let expected: i64 = adds
                        .iter()
                        .filter(|(n, _)| n == item)
                        .map(|(_, q)| *q)
                        .sum();
                    prop_assert_eq!(inv.quantity(item), expected);
                }
            }

            /// Property: no entry survives a removal that takes it to zero or below.
            #[test]
            fn removal_never_leaves_non_positive_entry(
                start in 1i64..100,
                take in 0i64..200,
            ) {
                let mut inv = Inventory::new();
                inv.add("widget", start).unwrap();
                let removal = inv.remove("widget", take).unwrap();
                if start - take <= 0 {
                    prop_assert_eq!(removal, Removal::Deleted);
                    prop_assert!(!inv.contains("widget"));
                } else {
                    prop_assert_eq!(removal, Removal::Remaining(start - take));
                }
            }
        }
    }
}

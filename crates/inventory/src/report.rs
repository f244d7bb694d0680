//! Plain-text stock report.

use crate::store::Inventory;

/// Header line printed before the item lines.
pub const REPORT_HEADER: &str = "Items Report";

/// Displayable report: the header, then `<item> -> <quantity>` per line in
/// insertion order.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    inventory: &'a Inventory,
}

impl<'a> Report<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        Self { inventory }
    }
}

impl core::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{REPORT_HEADER}")?;
        for (item, qty) in self.inventory.iter() {
            writeln!(f, "{item} -> {qty}")?;
        }
        Ok(())
    }
}

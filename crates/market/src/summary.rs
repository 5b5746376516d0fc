//! Market-wide stock views.

use std::collections::HashMap;

use marketplace_inventory::{Item, Vendor};

/// Stock of one item across a market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary<'a> {
    pub item: &'a Item,
    /// Sum of every vendor's stock of `item`, sold-out vendors included.
    pub quantity: i64,
    /// Vendors currently holding `item`, in market order.
    pub vendors: Vec<&'a Vendor>,
}

/// Per-item summaries for every item a market has ever listed.
///
/// Iteration follows first-listed order; lookup by item is constant time.
#[derive(Debug, Clone, Default)]
pub struct TotalInventory<'a> {
    entries: Vec<ItemSummary<'a>>,
    index: HashMap<&'a Item, usize>,
}

impl<'a> TotalInventory<'a> {
    pub(crate) fn push(&mut self, summary: ItemSummary<'a>) {
        self.index.insert(summary.item, self.entries.len());
        self.entries.push(summary);
    }

    pub fn get(&self, item: &Item) -> Option<&ItemSummary<'a>> {
        self.index.get(item).map(|&slot| &self.entries[slot])
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.index.contains_key(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemSummary<'a>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for TotalInventory<'a> {
    type Item = ItemSummary<'a>;
    type IntoIter = std::vec::IntoIter<ItemSummary<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

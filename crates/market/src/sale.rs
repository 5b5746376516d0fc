//! Sale allocation.
//!
//! A sale is decided before it is applied: [`allocate`] walks vendors in market
//! order and takes as much as each can give (first fit) until the request is
//! covered. Nothing is mutated until the whole request is known to fit.

use serde::{Deserialize, Serialize};

use marketplace_core::VendorId;
use marketplace_inventory::{Item, Vendor};

/// Units to take from one vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub vendor: VendorId,
    pub quantity: i64,
}

/// Complete allocation of a sale across vendors, in market order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalePlan {
    pub item: Item,
    pub quantity: i64,
    pub allocations: Vec<Allocation>,
}

impl SalePlan {
    /// Total units covered by the allocations.
    pub fn allocated(&self) -> i64 {
        self.allocations.iter().map(|a| a.quantity).sum()
    }
}

/// First-fit walk over `vendors` (given as `(position, vendor)` in market
/// order). Returns `(position, units)` pairs, or `None` if the vendors cannot
/// cover `quantity` between them.
pub(crate) fn allocate<'a>(
    vendors: impl IntoIterator<Item = (usize, &'a Vendor)>,
    item: &Item,
    quantity: i64,
) -> Option<Vec<(usize, i64)>> {
    let mut remaining = quantity;
    let mut takes = Vec::new();

    for (position, vendor) in vendors {
        if remaining == 0 {
            break;
        }
        let available = vendor.check_stock(item);
        if available <= 0 {
            continue;
        }
        let take = remaining.min(available);
        remaining -= take;
        takes.push((position, take));
    }

    (remaining == 0).then_some(takes)
}

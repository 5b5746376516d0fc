use std::collections::HashSet;

use marketplace_core::{Clock, SystemClock, VendorId};
use marketplace_inventory::{Item, Vendor};

use crate::config::OverstockPolicy;
use crate::sale::{self, Allocation, SalePlan};
use crate::summary::{ItemSummary, TotalInventory};

/// A named market holding an append-only, ordered list of vendors.
///
/// Vendor order is significant: listings follow it, and sales drain the
/// earliest-added vendor with stock first.
#[derive(Debug, Clone)]
pub struct Market<C = SystemClock> {
    name: String,
    vendors: Vec<Vendor>,
    policy: OverstockPolicy,
    clock: C,
}

impl Market<SystemClock> {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_clock(name, SystemClock)
    }
}

impl<C: Clock> Market<C> {
    pub fn with_clock(name: impl Into<String>, clock: C) -> Self {
        Self {
            name: name.into(),
            vendors: Vec::new(),
            policy: OverstockPolicy::default(),
            clock,
        }
    }

    pub fn with_policy(mut self, policy: OverstockPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vendors(&self) -> &[Vendor] {
        &self.vendors
    }

    pub fn policy(&self) -> &OverstockPolicy {
        &self.policy
    }

    pub fn vendor(&self, id: VendorId) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id() == id)
    }

    /// Mutable access for restocking a vendor after it joined the market.
    pub fn vendor_mut(&mut self, id: VendorId) -> Option<&mut Vendor> {
        self.vendors.iter_mut().find(|v| v.id() == id)
    }

    pub fn add_vendor(&mut self, vendor: Vendor) {
        tracing::debug!(market = %self.name, vendor = %vendor.name(), "vendor added");
        self.vendors.push(vendor);
    }

    pub fn vendor_names(&self) -> Vec<&str> {
        self.vendors.iter().map(Vendor::name).collect()
    }

    /// Vendors with positive stock of `item`, in market order.
    pub fn vendors_that_sell(&self, item: &Item) -> Vec<&Vendor> {
        self.vendors
            .iter()
            .filter(|v| v.check_stock(item) > 0)
            .collect()
    }

    /// Every item any vendor has stocked, deduplicated, first-seen order.
    ///
    /// Sold-out items remain listed.
    pub fn inventory_list(&self) -> Vec<&Item> {
        let mut seen = HashSet::new();
        self.vendors
            .iter()
            .flat_map(|v| v.items())
            .filter(|item| seen.insert(*item))
            .collect()
    }

    /// Market-wide stock of `item`, saturating at the bounds of `i64`.
    pub fn total_item(&self, item: &Item) -> i64 {
        self.vendors
            .iter()
            .map(|v| v.check_stock(item))
            .fold(0, i64::saturating_add)
    }

    pub fn total_inventory(&self) -> TotalInventory<'_> {
        let mut inventory = TotalInventory::default();
        for item in self.inventory_list() {
            inventory.push(ItemSummary {
                item,
                quantity: self.total_item(item),
                vendors: self.vendors_that_sell(item),
            });
        }
        inventory
    }

    /// Items the market holds too much of, per the configured policy.
    pub fn overstocked_items(&self) -> Vec<&Item> {
        self.total_inventory()
            .into_iter()
            .filter(|s| self.policy.is_overstocked(s.quantity, s.vendors.len()))
            .map(|s| s.item)
            .collect()
    }

    pub fn sorted_item_list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.inventory_list().into_iter().map(Item::name).collect();
        names.sort();
        names
    }

    /// Decide how a sale of `quantity` units would be split across vendors.
    ///
    /// Returns `None` when the item is unknown to the market, the quantity is
    /// negative, or the market-wide total cannot cover it. Never mutates.
    pub fn plan_sale(&self, item: &Item, quantity: i64) -> Option<SalePlan> {
        let takes = self.allocate(item, quantity)?;
        let allocations = takes
            .into_iter()
            .map(|(position, units)| Allocation {
                vendor: self.vendors[position].id(),
                quantity: units,
            })
            .collect();
        Some(SalePlan {
            item: item.clone(),
            quantity,
            allocations,
        })
    }

    /// Sell `quantity` units of `item`, drawing on vendors in market order.
    ///
    /// Either the whole request is filled or nothing changes.
    pub fn sell(&mut self, item: &Item, quantity: i64) -> bool {
        let Some(takes) = self.allocate(item, quantity) else {
            return false;
        };

        for &(position, units) in &takes {
            let vendor = &mut self.vendors[position];
            tracing::debug!(
                market = %self.name,
                vendor = %vendor.name(),
                item = %item.name(),
                units,
                "allocating sale"
            );
            vendor.sale(item, units);
        }

        tracing::info!(
            market = %self.name,
            item = %item.name(),
            quantity,
            vendors = takes.len(),
            "sale completed"
        );
        true
    }

    /// Today's date as `dd/mm/YYYY`.
    pub fn date(&self) -> String {
        self.clock.today().format("%d/%m/%Y").to_string()
    }

    fn allocate(&self, item: &Item, quantity: i64) -> Option<Vec<(usize, i64)>> {
        if quantity < 0 {
            tracing::warn!(market = %self.name, item = %item.name(), quantity, "refusing negative sale");
            return None;
        }

        let inventory = self.total_inventory();
        let Some(summary) = inventory.get(item) else {
            tracing::warn!(market = %self.name, item = %item.name(), "refusing sale of unlisted item");
            return None;
        };
        if summary.quantity < quantity {
            tracing::warn!(
                market = %self.name,
                item = %item.name(),
                requested = quantity,
                available = summary.quantity,
                "refusing sale: insufficient stock"
            );
            return None;
        }

        sale::allocate(self.vendors.iter().enumerate(), item, quantity)
    }
}

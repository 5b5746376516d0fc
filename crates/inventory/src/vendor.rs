use std::collections::HashMap;

use rust_decimal::Decimal;

use marketplace_core::{DomainError, DomainResult, VendorId};

use crate::item::Item;

/// A stall holding quantities of items.
///
/// Inventory keeps the order in which items were first stocked; markets rely
/// on that order when listing what is on offer. An item stays listed once
/// stocked, even after it sells out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    id: VendorId,
    name: String,
    lines: Vec<(Item, i64)>,
    index: HashMap<Item, usize>,
}

impl Vendor {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(VendorId::new(), name)
    }

    pub fn with_id(id: VendorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            lines: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn id(&self) -> VendorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stocked items with their quantity on hand, in first-stocked order.
    pub fn inventory(&self) -> impl Iterator<Item = (&Item, i64)> + '_ {
        self.lines.iter().map(|(item, quantity)| (item, *quantity))
    }

    /// Items ever stocked, in first-stocked order.
    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.lines.iter().map(|(item, _)| item)
    }

    /// Quantity on hand; `0` for items never stocked.
    pub fn check_stock(&self, item: &Item) -> i64 {
        self.index
            .get(item)
            .map(|&slot| self.lines[slot].1)
            .unwrap_or(0)
    }

    /// Add `quantity` units of `item`.
    ///
    /// Stock saturates at `i64::MAX` rather than wrapping.
    pub fn stock(&mut self, item: &Item, quantity: i64) {
        let on_hand = self.quantity_mut(item);
        let Some(total) = on_hand.checked_add(quantity) else {
            *on_hand = on_hand.saturating_add(quantity);
            let stock = *on_hand;
            tracing::warn!(
                vendor = %self.name,
                item = %item.name(),
                quantity,
                stock,
                "stock saturated"
            );
            return;
        };
        *on_hand = total;
    }

    /// Remove `quantity` units of `item` without checking availability.
    ///
    /// Stock can go negative here. Use [`Vendor::try_sale`] or sell through a
    /// market when the caller has not already checked availability.
    pub fn sale(&mut self, item: &Item, quantity: i64) {
        let on_hand = self.quantity_mut(item);
        *on_hand = on_hand.saturating_sub(quantity);
        let remaining = *on_hand;
        if remaining < 0 {
            tracing::warn!(
                vendor = %self.name,
                item = %item.name(),
                stock = remaining,
                "unchecked sale left negative stock"
            );
        }
    }

    /// Remove `quantity` units of `item`, refusing if fewer are on hand.
    pub fn try_sale(&mut self, item: &Item, quantity: i64) -> DomainResult<()> {
        if quantity < 0 {
            return Err(DomainError::validation("sale quantity cannot be negative"));
        }
        let available = self.check_stock(item);
        if quantity > available {
            return Err(DomainError::insufficient_stock(
                item.name(),
                quantity,
                available,
            ));
        }
        self.sale(item, quantity);
        Ok(())
    }

    /// Value of everything on hand at list price.
    ///
    /// Saturates at the bounds of `Decimal` instead of overflowing.
    pub fn potential_revenue(&self) -> Decimal {
        self.lines
            .iter()
            .map(|(item, quantity)| item.price().saturating_mul(Decimal::from(*quantity)))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    fn quantity_mut(&mut self, item: &Item) -> &mut i64 {
        let slot = match self.index.get(item) {
            Some(&slot) => slot,
            None => {
                self.lines.push((item.clone(), 0));
                let slot = self.lines.len() - 1;
                self.index.insert(item.clone(), slot);
                slot
            }
        };
        &mut self.lines[slot].1
    }
}

//! Market configuration.
//!
//! Values come from the environment (`MARKET_OVERSTOCK_QUANTITY`,
//! `MARKET_OVERSTOCK_VENDORS`) or from a host's config file via serde.
//! Anything missing or malformed falls back to the defaults.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Rule deciding when an item counts as overstocked.
///
/// An item is overstocked when its market-wide quantity is strictly greater
/// than `min_quantity_exclusive` and at least `min_vendors` vendors currently
/// hold some of it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverstockPolicy {
    pub min_quantity_exclusive: i64,
    pub min_vendors: usize,
}

impl Default for OverstockPolicy {
    fn default() -> Self {
        Self {
            min_quantity_exclusive: 50,
            min_vendors: 2,
        }
    }
}

impl OverstockPolicy {
    pub const QUANTITY_VAR: &'static str = "MARKET_OVERSTOCK_QUANTITY";
    pub const VENDORS_VAR: &'static str = "MARKET_OVERSTOCK_VENDORS";

    /// Read the policy from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the policy through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            min_quantity_exclusive: read_var(
                &lookup,
                Self::QUANTITY_VAR,
                defaults.min_quantity_exclusive,
            ),
            min_vendors: read_var(&lookup, Self::VENDORS_VAR, defaults.min_vendors),
        }
    }

    pub fn is_overstocked(&self, quantity: i64, vendor_count: usize) -> bool {
        quantity > self.min_quantity_exclusive && vendor_count >= self.min_vendors
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + core::fmt::Display + Copy,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, %default, "ignoring malformed config value");
            default
        }),
    }
}

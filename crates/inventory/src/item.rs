use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use marketplace_core::{DomainError, DomainResult};

/// A purchasable good.
///
/// Equality and hashing cover both `name` and `price`, so independently built
/// items with the same fields are the same inventory key. Deserialization goes
/// through the same validation as [`Item::with_price`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    name: String,
    price: Decimal,
}

/// Unvalidated wire form of [`Item`].
#[derive(Deserialize)]
struct ItemRecord {
    name: String,
    price: Decimal,
}

impl TryFrom<ItemRecord> for Item {
    type Error = DomainError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::with_price(record.name, record.price)
    }
}

impl Item {
    /// Build an item from a currency-formatted price such as `"$0.75"`.
    pub fn new(name: impl Into<String>, price: &str) -> DomainResult<Self> {
        let price = parse_price(price)?;
        Self::with_price(name, price)
    }

    /// Build an item from an already-parsed price.
    pub fn with_price(name: impl Into<String>, price: Decimal) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if price.is_sign_negative() && !price.is_zero() {
            return Err(DomainError::validation(format!("price for {name} cannot be negative")));
        }
        Ok(Self { name, price })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.price)
    }
}

/// Parse a currency-formatted amount into a decimal.
///
/// Any leading currency marker (`$`, `€`, `US$ `, ...) is dropped; the rest
/// must be a plain non-negative decimal number.
pub fn parse_price(input: &str) -> DomainResult<Decimal> {
    let number = input
        .trim()
        .trim_start_matches(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
        .trim();

    if number.is_empty() {
        return Err(DomainError::validation(format!("price {input:?} has no amount")));
    }

    let price = Decimal::from_str(number)
        .map_err(|e| DomainError::validation(format!("price {input:?} is not a number: {e}")))?;

    if price.is_sign_negative() && !price.is_zero() {
        return Err(DomainError::validation(format!("price {input:?} cannot be negative")));
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    fn peach() -> Item {
        Item::new("Peach", "$0.75").unwrap()
    }

    fn tomato() -> Item {
        Item::new("Tomato", "$0.50").unwrap()
    }

    #[test]
    fn has_readable_attributes() {
        assert_eq!(peach().name(), "Peach");
        assert_eq!(peach().price(), dec!(0.75));
        assert_eq!(tomato().name(), "Tomato");
        assert_eq!(tomato().price(), dec!(0.50));
    }

    #[test]
    fn items_with_same_fields_are_the_same_key() {
        let mut keys = HashSet::new();
        keys.insert(peach());
        keys.insert(Item::new("Peach", "$0.75").unwrap());
        // Trailing zeros do not change the amount.
        keys.insert(Item::new("Peach", "$0.750").unwrap());
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn same_name_different_price_is_a_different_item() {
        assert_ne!(peach(), Item::new("Peach", "$0.80").unwrap());
    }

    #[test]
    fn parse_price_strips_currency_markers() {
        assert_eq!(parse_price("$5.30").unwrap(), dec!(5.30));
        assert_eq!(parse_price("  $4.25 ").unwrap(), dec!(4.25));
        assert_eq!(parse_price("€12").unwrap(), dec!(12));
        assert_eq!(parse_price("US$ 1.05").unwrap(), dec!(1.05));
        assert_eq!(parse_price("0.5").unwrap(), dec!(0.5));
    }

    #[test]
    fn parse_price_rejects_malformed_input() {
        for bad in ["", "$", "   ", "$abc", "$1.2.3", "$0.75 each"] {
            let err = parse_price(bad).unwrap_err();
            assert!(
                matches!(err, DomainError::Validation(_)),
                "expected validation error for {bad:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn negative_prices_are_rejected() {
        assert!(parse_price("$-1.00").is_err());
        assert!(Item::with_price("Peach", dec!(-0.01)).is_err());
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = Item::new("  ", "$1.00").unwrap_err();
        assert_eq!(err, DomainError::validation("item name cannot be empty"));
    }

    #[test]
    fn display_shows_name_and_price() {
        assert_eq!(peach().to_string(), "Peach (0.75)");
        // The parsed marker is not part of the item.
        assert_eq!(Item::new("Peach", "€0.75").unwrap().to_string(), "Peach (0.75)");
    }

    #[test]
    fn deserialization_validates_like_the_constructor() {
        let err = serde_json::from_str::<Item>(r#"{"name":"","price":"-5"}"#).unwrap_err();
        assert!(err.to_string().contains("validation failed"), "{err}");

        let err = serde_json::from_str::<Item>(r#"{"name":"Peach","price":"-5"}"#).unwrap_err();
        assert!(err.to_string().contains("cannot be negative"), "{err}");

        let item: Item = serde_json::from_str(r#"{"name":"Peach","price":"0.75"}"#).unwrap();
        assert_eq!(item, peach());
    }

    #[test]
    fn serializes_name_and_price() {
        let json = serde_json::to_value(peach()).unwrap();
        assert_eq!(json["name"], "Peach");
        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, peach());
    }
}

//! Inventory domain module.
//!
//! Items (priced goods) and the vendors that stock them. Pure in-memory
//! bookkeeping; aggregation across vendors lives in `marketplace-market`.

pub mod item;
pub mod vendor;

pub use item::{Item, parse_price};
pub use vendor::Vendor;

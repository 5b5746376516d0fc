//! Market domain module.
//!
//! A market aggregates the inventories of its vendors and coordinates sales
//! that may draw on several of them. Vendors are consulted and depleted in the
//! order they joined the market.

pub mod config;
pub mod market;
pub mod sale;
pub mod summary;

pub use config::OverstockPolicy;
pub use market::Market;
pub use sale::{Allocation, SalePlan};
pub use summary::{ItemSummary, TotalInventory};

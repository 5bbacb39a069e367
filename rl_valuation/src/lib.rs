//! RL Valuation - Rocket League inventory pricing
//!
//! Reads a rendered rl.insider.gg price page and an inventory CSV export,
//! and ranks the owned items by their catalogue value.

pub mod catalogue;
pub mod config;
pub mod error;
pub mod formatters;
pub mod inventory;
pub mod pipeline;
pub mod valuation;

pub use catalogue::{parse_price, Catalogue, CatalogueSource, Extraction, FileCatalogue};
pub use config::{CategoryMap, PaintAliases};
pub use error::{Error, Result};
pub use inventory::{load_inventory, parse_inventory, InventoryNormalizer, InventoryRecord};
pub use pipeline::{Pipeline, Report};
pub use valuation::{valuate, PriceIndex, Valuation};

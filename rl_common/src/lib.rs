//! Shared types for Rocket League item valuation
//!
//! Data model passed between the catalogue extractor, the inventory loader
//! and the valuation merge, plus the error and diagnostic types every stage
//! reports through.

pub mod diagnostics;
pub mod error;
pub mod models;

pub use diagnostics::{Diagnostics, Warning};
pub use error::{Result, ValuationError};
pub use models::{Category, ColourList, InventoryItem, PriceRow, ValuedItem};

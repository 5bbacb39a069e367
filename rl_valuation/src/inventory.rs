//! Inventory loading and normalization.
//!
//! The inventory is a CSV export with at least `name`, `slot`, `paint` and
//! `tradeable` columns. Exports from the game tooling are often Windows-1252
//! rather than UTF-8, and occasionally contain broken lines.

use encoding_rs::WINDOWS_1252;
use log::{debug, info};
use rl_common::{Diagnostics, InventoryItem, ValuationError, Warning};
use serde::Deserialize;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::config::PaintAliases;
use crate::error::Result;

const REQUIRED_COLUMNS: [&str; 4] = ["name", "slot", "paint", "tradeable"];
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
/// Exact text of the tradeable column for items that cannot be traded
const NOT_TRADEABLE: &str = "False";
const BLUEPRINT_SLOT: &str = "Blueprint";

/// One inventory line as exported. Extra columns are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InventoryRecord {
    pub name: String,
    pub slot: String,
    pub paint: String,
    pub tradeable: String,
}

/// Records read from an inventory file, plus the lines that were skipped.
#[derive(Debug, Default)]
pub struct InventoryLoad {
    pub records: Vec<InventoryRecord>,
    pub diagnostics: Diagnostics,
}

/// Reads an inventory CSV file from disk.
pub fn load_inventory<P: AsRef<Path>>(path: P) -> Result<InventoryLoad> {
    let path = path.as_ref();
    info!("Loading inventory from {}", path.display());
    let bytes = fs::read(path)?;
    parse_inventory(&decode_inventory(&bytes))
}

/// Decodes inventory bytes: UTF-8 when valid, Windows-1252 otherwise.
pub fn decode_inventory(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!("Inventory is not UTF-8, decoding as Windows-1252");
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text
        }
    }
}

/// Parses inventory CSV content.
///
/// Lines that cannot be read (wrong number of fields, bad quoting) are
/// skipped with a [`Warning::SourceRecord`]. A header without one of the
/// required columns fails the whole load.
pub fn parse_inventory(content: &str) -> Result<InventoryLoad> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ValuationError::MissingInventoryColumn(column.to_string()).into());
        }
    }

    let mut load = InventoryLoad::default();
    for result in rdr.deserialize::<InventoryRecord>() {
        match result {
            Ok(record) => load.records.push(record),
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                load.diagnostics.push(Warning::SourceRecord {
                    line,
                    detail: record_error_detail(&e),
                });
            }
        }
    }

    info!(
        "Read {} inventory records ({} lines skipped)",
        load.records.len(),
        load.diagnostics.len()
    );
    Ok(load)
}

fn record_error_detail(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("expected {expected_len} fields, found {len}"),
        csv::ErrorKind::Deserialize { err, .. } => err.to_string(),
        _ => err.to_string(),
    }
}

/// Turns raw inventory records into items comparable with catalogue colours.
#[derive(Debug, Clone, Default)]
pub struct InventoryNormalizer {
    aliases: PaintAliases,
}

impl InventoryNormalizer {
    pub fn new(aliases: PaintAliases) -> Self {
        Self { aliases }
    }

    /// Drops untradeable records, canonicalizes paint names and keeps either
    /// blueprints only or everything except blueprints. Record order is kept.
    pub fn normalize(&self, records: &[InventoryRecord], want_blueprint: bool) -> Vec<InventoryItem> {
        let items: Vec<InventoryItem> = records
            .iter()
            .filter(|record| record.tradeable != NOT_TRADEABLE)
            .filter(|record| (record.slot == BLUEPRINT_SLOT) == want_blueprint)
            .map(|record| InventoryItem {
                name: record.name.clone(),
                slot: record.slot.clone(),
                paint: self.aliases.canonicalize(&record.paint).to_string(),
                tradeable: true,
            })
            .collect();

        info!(
            "Kept {} of {} inventory records ({} mode)",
            items.len(),
            records.len(),
            if want_blueprint { "blueprint" } else { "standard" }
        );
        items
    }
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;

//! Joins owned items with catalogue prices and ranks them by value.

use log::{debug, info};
use rl_common::{ColourList, Diagnostics, InventoryItem, PriceRow, ValuedItem, Warning};
use serde::Serialize;
use std::collections::HashMap;

/// Price rows by item name.
///
/// Rows from excluded sections are never indexed. When a name appears more
/// than once the last row wins.
pub struct PriceIndex<'a> {
    entries: HashMap<&'a str, &'a PriceRow>,
}

impl<'a> PriceIndex<'a> {
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = &'a PriceRow>,
    {
        let mut entries = HashMap::new();
        for row in rows {
            if row.category.is_excluded() {
                continue;
            }
            if entries.insert(row.name.as_str(), row).is_some() {
                debug!("Duplicate catalogue entry for {}, keeping the later one", row.name);
            }
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&'a PriceRow> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ranked owned items, most valuable first.
#[derive(Debug, Default, Serialize)]
pub struct Valuation {
    pub ranked: Vec<ValuedItem>,
    /// Items whose paint had no colour column
    pub diagnostics: Diagnostics,
    /// Owned items with no catalogue entry
    pub unmatched: usize,
}

impl Valuation {
    /// The `n` most valuable items
    pub fn top(&self, n: usize) -> &[ValuedItem] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    pub fn total(&self) -> f64 {
        self.ranked.iter().map(|item| item.price).sum()
    }
}

/// Values every owned item found in the catalogue and sorts by price,
/// highest first. Equal prices keep inventory order.
///
/// Items missing from the catalogue are expected and silently left out.
/// Items whose paint is not a catalogue colour are left out with a
/// [`Warning::ColourLookup`].
pub fn valuate(rows: &[PriceRow], items: &[InventoryItem], colours: &ColourList) -> Valuation {
    let index = PriceIndex::from_rows(rows);
    info!("Indexed {} catalogue items", index.len());

    let mut valuation = Valuation::default();

    for item in items {
        let Some(row) = index.get(&item.name) else {
            debug!("{} is not in the catalogue", item.name);
            valuation.unmatched += 1;
            continue;
        };

        let Some(price) = colours
            .position(&item.paint)
            .and_then(|column| row.price_at(column))
        else {
            valuation.diagnostics.push(Warning::ColourLookup {
                name: item.name.clone(),
                paint: item.paint.clone(),
            });
            continue;
        };

        valuation.ranked.push(ValuedItem {
            name: item.name.clone(),
            slot: item.slot.clone(),
            paint: item.paint.clone(),
            price,
        });
    }

    // stable: ties stay in inventory order
    valuation
        .ranked
        .sort_by(|a, b| b.price.total_cmp(&a.price));

    info!(
        "Valued {} items ({} not in catalogue, {} without a colour column)",
        valuation.ranked.len(),
        valuation.unmatched,
        valuation.diagnostics.len()
    );
    valuation
}

#[cfg(test)]
#[path = "valuation_tests.rs"]
mod tests;

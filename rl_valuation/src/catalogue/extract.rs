//! Price section extraction.
//!
//! Each `div.priceTableContainer` is one category section. Its `h2` label is
//! resolved through the [`CategoryMap`]; each `tr` with `td` cells is one item.
//! Painted sections have a price cell per colour column. Other sections have
//! a single price cell whose value goes to the default colour, every other
//! colour being valued at 0.

use log::{debug, info};
use rl_common::{
    Category, ColourList, Diagnostics, PriceRow, Result, ValuationError, Warning,
};
use scraper::{ElementRef, Html};

use super::price::try_parse_price;
use super::{element_label, element_text, Selectors};
use crate::config::CategoryMap;

/// Labels containing this have one price column per colour
const PAINTED_MARKER: &str = "Painted";

/// Rows read from a catalogue page, in page order.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Includes rows from excluded sections; see [`Extraction::indexable_rows`]
    pub rows: Vec<PriceRow>,
    pub diagnostics: Diagnostics,
}

impl Extraction {
    /// Rows whose section has a canonical category
    pub fn indexable_rows(&self) -> impl Iterator<Item = &PriceRow> {
        self.rows.iter().filter(|row| !row.category.is_excluded())
    }

    pub fn excluded_count(&self) -> usize {
        self.rows.iter().filter(|row| row.category.is_excluded()).count()
    }
}

pub(super) fn extract_prices(
    document: &Html,
    selectors: &Selectors,
    colours: &ColourList,
    categories: &CategoryMap,
) -> Result<Extraction> {
    if colours.is_empty() {
        return Err(ValuationError::MissingColourLabels);
    }

    let mut extraction = Extraction::default();
    let mut sections = 0;

    for container in document.select(&selectors.container) {
        let Some(heading) = container.select(&selectors.heading).next() else {
            extraction.diagnostics.push(Warning::RowShape {
                section: "(untitled)".to_string(),
                detail: "price section has no heading".to_string(),
            });
            continue;
        };

        let label = element_label(&heading);
        let category = categories.resolve(&label)?;
        let painted = label.contains(PAINTED_MARKER);
        sections += 1;

        let section = Section {
            label: &label,
            category,
            painted,
            colours,
            selectors,
        };
        let before = extraction.rows.len();

        for row in container.select(&selectors.row) {
            let cells: Vec<ElementRef> = row.select(&selectors.cell).collect();
            if cells.is_empty() {
                continue;
            }

            match section.read_row(&cells, &mut extraction.diagnostics) {
                Ok(price_row) => extraction.rows.push(price_row),
                Err(detail) => extraction.diagnostics.push(Warning::RowShape {
                    section: label.clone(),
                    detail,
                }),
            }
        }

        debug!(
            "Section {label:?} ({:?}): {} rows",
            category,
            extraction.rows.len() - before
        );
    }

    info!(
        "Extracted {} price rows from {} sections ({} excluded)",
        extraction.rows.len(),
        sections,
        extraction.excluded_count()
    );
    Ok(extraction)
}

/// One resolved price section
struct Section<'a> {
    label: &'a str,
    category: &'a Category,
    painted: bool,
    colours: &'a ColourList,
    selectors: &'a Selectors,
}

impl Section<'_> {
    /// Reads one item row. `Err` carries why the row was skipped.
    fn read_row(
        &self,
        cells: &[ElementRef],
        diagnostics: &mut Diagnostics,
    ) -> std::result::Result<PriceRow, String> {
        let name = cells[0]
            .select(&self.selectors.item_name)
            .next()
            .map(|name| element_text(&name).trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| "row has no item name".to_string())?;

        let price_cells = &cells[1..];
        let prices: Vec<f64> = if self.painted {
            if price_cells.len() != self.colours.len() {
                return Err(format!(
                    "{name}: {} price cells for {} colours",
                    price_cells.len(),
                    self.colours.len()
                ));
            }
            price_cells
                .iter()
                .map(|cell| parse_cell(cell, diagnostics))
                .collect()
        } else {
            let cell = price_cells
                .first()
                .ok_or_else(|| format!("{name}: row has no price cell"))?;
            let mut prices = vec![parse_cell(cell, diagnostics)];
            prices.resize(self.colours.len(), 0.0);
            prices
        };

        if self.category.is_excluded() {
            debug!("{name} is in excluded section {:?}", self.label);
        }

        Ok(PriceRow {
            name,
            category: self.category.clone(),
            prices,
        })
    }
}

fn parse_cell(cell: &ElementRef, diagnostics: &mut Diagnostics) -> f64 {
    try_parse_price(&element_text(cell)).unwrap_or_else(|warning| {
        diagnostics.push(warning);
        0.0
    })
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;

//! One valuation run: catalogue + inventory in, ranked report out.

use log::info;
use rl_common::{ColourList, Diagnostics};
use serde::Serialize;
use std::path::Path;

use crate::catalogue::{Catalogue, CatalogueSource};
use crate::config::{CategoryMap, PaintAliases};
use crate::error::Result;
use crate::inventory::{load_inventory, InventoryLoad, InventoryNormalizer};
use crate::valuation::{valuate, Valuation};

/// Result of a run, with every warning from every stage.
#[derive(Debug, Serialize)]
pub struct Report {
    pub colours: ColourList,
    /// Catalogue rows that made it into the price index
    pub indexed_rows: usize,
    /// Inventory items left after normalization
    pub inventory_items: usize,
    pub valuation: Valuation,
    pub diagnostics: Diagnostics,
}

/// The lookup tables a run uses
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    categories: CategoryMap,
    normalizer: InventoryNormalizer,
}

impl Pipeline {
    pub fn new(categories: CategoryMap, aliases: PaintAliases) -> Self {
        Self {
            categories,
            normalizer: InventoryNormalizer::new(aliases),
        }
    }

    /// Values an already loaded inventory against catalogue markup.
    ///
    /// Fails only on catalogue problems (no colour labels, unknown section);
    /// everything else ends up in [`Report::diagnostics`].
    pub fn run(&self, html: &str, inventory: InventoryLoad, want_blueprint: bool) -> Result<Report> {
        let catalogue = Catalogue::parse(html);
        let colours = catalogue.colours()?;
        let extraction = catalogue.extract_prices(&colours, &self.categories)?;
        let indexed_rows = extraction.indexable_rows().count();

        let items = self.normalizer.normalize(&inventory.records, want_blueprint);
        let mut valuation = valuate(&extraction.rows, &items, &colours);

        let mut diagnostics = extraction.diagnostics;
        diagnostics.merge(inventory.diagnostics);
        diagnostics.merge(std::mem::take(&mut valuation.diagnostics));

        info!(
            "Valuation finished: {} ranked items, {}",
            valuation.ranked.len(),
            diagnostics.summary()
        );

        Ok(Report {
            colours,
            indexed_rows,
            inventory_items: items.len(),
            valuation,
            diagnostics,
        })
    }

    /// Fetches the catalogue from `source` and loads the inventory file, then runs.
    pub fn run_from<S, P>(&self, source: &S, inventory_path: P, want_blueprint: bool) -> Result<Report>
    where
        S: CatalogueSource + ?Sized,
        P: AsRef<Path>,
    {
        let html = source.fetch()?;
        let inventory = load_inventory(inventory_path)?;
        self.run(&html, inventory, want_blueprint)
    }
}

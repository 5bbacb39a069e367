//! Catalogue page reading: colour columns, price sections and price cells

mod colours;
mod extract;
pub mod price;
mod source;

pub use extract::Extraction;
pub use price::{parse_price, try_parse_price};
pub use source::{CatalogueSource, FileCatalogue};

use rl_common::{ColourList, Result, ValuationError};
use scraper::{ElementRef, Html, Selector};

use crate::config::CategoryMap;

/// A fully rendered catalogue page.
pub struct Catalogue {
    document: Html,
}

impl Catalogue {
    /// Parse the page markup. Malformed markup is repaired, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Colour columns in page order
    pub fn colours(&self) -> Result<ColourList> {
        colours::read_colours(&self.document, &Selectors::new()?)
    }

    /// Price rows for every item in every price section
    pub fn extract_prices(
        &self,
        colours: &ColourList,
        categories: &CategoryMap,
    ) -> Result<Extraction> {
        extract::extract_prices(&self.document, &Selectors::new()?, colours, categories)
    }
}

/// CSS selectors for the parts of the page we read
struct Selectors {
    colour_labels: Selector,
    colour_header: Selector,
    container: Selector,
    heading: Selector,
    row: Selector,
    cell: Selector,
    item_name: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            colour_labels: selector("table#colorLabels")?,
            colour_header: selector("span.priceTableHeader")?,
            container: selector("div.priceTableContainer")?,
            heading: selector("h2")?,
            row: selector("tr")?,
            cell: selector("td")?,
            item_name: selector("div.fnl")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ValuationError::Selector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// All text below an element, untouched
fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>()
}

/// All text below an element with whitespace runs collapsed and trimmed
fn element_label(element: &ElementRef) -> String {
    element_text(element)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

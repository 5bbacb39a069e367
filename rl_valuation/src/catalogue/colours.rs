use log::{debug, info};
use rl_common::{ColourList, Result, ValuationError};
use scraper::Html;

use super::{element_label, Selectors};

/// Reads the colour column labels from the page's colour header table.
pub(super) fn read_colours(document: &Html, selectors: &Selectors) -> Result<ColourList> {
    let table = document
        .select(&selectors.colour_labels)
        .next()
        .ok_or(ValuationError::MissingColourLabels)?;

    let colours: Vec<String> = table
        .select(&selectors.colour_header)
        .map(|label| element_label(&label))
        .inspect(|label| debug!("Colour column: {label}"))
        .collect();

    if colours.is_empty() {
        return Err(ValuationError::MissingColourLabels);
    }

    info!("Found {} colour columns", colours.len());
    Ok(ColourList::new(colours))
}

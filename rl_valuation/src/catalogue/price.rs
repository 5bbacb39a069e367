//! Price cell parsing.
//!
//! Catalogue cells hold ranges such as `"1.2k - 1.5k"` or `"300 - 400"`, a
//! single value, or an em-dash when there is no data. A range is valued at
//! its midpoint.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use rl_common::Warning;

/// Range separator as rendered by the catalogue: hyphen between hair spaces
const RANGE_SEPARATOR: &str = "\u{200A}-\u{200A}";
const NO_DATA: &str = "—";
const THOUSANDS_MARKER: &str = "k";

lazy_static! {
    static ref NUMBER: Regex = Regex::new(r"\d+(?:\.\d+)?").expect("number pattern compiles");
}

/// Parses a price cell into its average value.
///
/// # Returns
/// The midpoint of the range, multiplied by 1000 when the cell has a `k`.
/// A cell without any number is a [`Warning::Parse`].
pub fn try_parse_price(raw: &str) -> Result<f64, Warning> {
    let price = raw.replace(RANGE_SEPARATOR, "-").replace(NO_DATA, "0");
    let price = price.trim();

    if price.is_empty() {
        return Ok(0.0);
    }

    let numbers: Vec<f64> = NUMBER
        .find_iter(price)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    let (low, high) = match numbers.as_slice() {
        [] => {
            return Err(Warning::Parse {
                raw: raw.to_string(),
            })
        }
        [only] if *only == 0.0 => return Ok(0.0),
        [only] => (*only, *only),
        [low, high, ..] => (*low, *high),
    };

    let value = if price.contains(THOUSANDS_MARKER) {
        (low + high) * 1000.0 / 2.0
    } else {
        (low + high) / 2.0
    };
    debug!("Parsed price {raw:?} -> {value}");
    Ok(value)
}

/// Parses a price cell, falling back to 0 when it holds no number.
pub fn parse_price(raw: &str) -> f64 {
    try_parse_price(raw).unwrap_or(0.0)
}

#[cfg(test)]
#[path = "price_tests.rs"]
mod tests;

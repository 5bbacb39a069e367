use rl_common::{Diagnostics, ValuedItem};
use serde::Serialize;

use crate::error::Result;
use crate::pipeline::Report;

/// Text table of ranked items, one line per item
pub fn format_ranking(items: &[ValuedItem]) -> String {
    if items.is_empty() {
        return "No inventory items found in the catalogue.\n".to_string();
    }

    let name_width = column_width(items.iter().map(|i| i.name.as_str()), "Name");
    let slot_width = column_width(items.iter().map(|i| i.slot.as_str()), "Slot");
    let paint_width = column_width(items.iter().map(|i| i.paint.as_str()), "Paint");

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<name_width$}  {:<slot_width$}  {:<paint_width$}  {:>10}\n",
        "#", "Name", "Slot", "Paint", "Price"
    ));
    output.push_str(&format!(
        "{}\n",
        "-".repeat(3 + name_width + slot_width + paint_width + 10 + 8)
    ));

    for (rank, item) in items.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<name_width$}  {:<slot_width$}  {:<paint_width$}  {:>10.1}\n",
            rank + 1,
            item.name,
            item.slot,
            item.paint,
            item.price
        ));
    }

    output
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

/// Warning summary followed by one line per warning
pub fn format_diagnostics(diagnostics: &Diagnostics) -> String {
    let mut output = format!("{}\n", diagnostics.summary());
    for warning in diagnostics.iter() {
        output.push_str(&format!("  - {warning}\n"));
    }
    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    top: &'a [ValuedItem],
    ranked_total: usize,
    not_in_catalogue: usize,
    warnings: &'a Diagnostics,
}

/// JSON document with the `top` most valuable items and all warnings
pub fn format_json(report: &Report, top: usize) -> Result<String> {
    let json = JsonReport {
        top: report.valuation.top(top),
        ranked_total: report.valuation.ranked.len(),
        not_in_catalogue: report.valuation.unmatched,
        warnings: &report.diagnostics,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

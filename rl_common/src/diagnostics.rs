//! Non-fatal diagnostics collected during a valuation run

use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A recoverable problem. The offending cell, row or record is skipped
/// (or zeroed, for prices) and the run continues.
#[derive(Debug, Error, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Price cell held no number; valued at 0.
    #[error("no price in {raw:?}, using 0")]
    Parse { raw: String },

    /// Catalogue row or section without the expected cells; skipped.
    #[error("skipped row in {section:?}: {detail}")]
    RowShape { section: String, detail: String },

    /// Inventory paint has no price column; item left out of the valuation.
    #[error("{name} has paint {paint:?} with no matching colour column")]
    ColourLookup { name: String, paint: String },

    /// Inventory line could not be read; skipped.
    #[error("inventory line {line}: {detail}")]
    SourceRecord { line: u64, detail: String },
}

impl Warning {
    /// Short label used when summarising warnings by kind
    pub fn kind(&self) -> &'static str {
        match self {
            Warning::Parse { .. } => "price parse",
            Warning::RowShape { .. } => "row shape",
            Warning::ColourLookup { .. } => "colour lookup",
            Warning::SourceRecord { .. } => "inventory record",
        }
    }
}

/// Ordered list of warnings from one or more stages.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning and log it.
    pub fn push(&mut self, warning: Warning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Append another stage's warnings, keeping their order.
    pub fn merge(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }

    /// Warning counts keyed by [`Warning::kind`]
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for warning in &self.warnings {
            *counts.entry(warning.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// One-line summary, e.g. `3 warnings (1 price parse, 2 row shape)`
    pub fn summary(&self) -> String {
        if self.warnings.is_empty() {
            return "no warnings".to_string();
        }
        let parts: Vec<String> = self
            .counts()
            .into_iter()
            .map(|(kind, count)| format!("{count} {kind}"))
            .collect();
        let noun = if self.warnings.len() == 1 { "warning" } else { "warnings" };
        format!("{} {} ({})", self.warnings.len(), noun, parts.join(", "))
    }
}

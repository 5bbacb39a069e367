//! Static lookup tables for the valuation pipeline
//!
//! Both tables are compiled in and passed explicitly to the stage that needs
//! them: [`CategoryMap`] to the catalogue extractor, [`PaintAliases`] to the
//! inventory normalizer.

use rl_common::{Category, Result, ValuationError};
use std::collections::HashMap;

/// Catalogue section labels and the category each maps to.
/// `None` marks a section whose items are left out of the valuation.
///
/// "Painted Decals" and "Unpainted Decals" may also contain Animated Decals;
/// the catalogue does not separate them, so both map to "Decal".
/// "Goal Expolosion" is kept as spelled; rows with it only matter for display.
const CATEGORY_TABLE: &[(&str, Option<&str>)] = &[
    ("Painted BM Decals", Some("Animated Decal")),
    ("Unpainted BM Decals", Some("Animated Decal")),
    ("Painted Goal Explosions", Some("Goal Explosion")),
    ("Painted Cars", Some("Body")),
    ("Painted Wheels [Exotic]", Some("Wheels")),
    ("Painted Wheels [Limited]", Some("Wheels")),
    ("Painted Wheels [Import]", Some("Wheels")),
    ("Painted Wheels [Very Rare]", Some("Wheels")),
    ("Painted Wheels [Rare]", Some("Wheels")),
    ("Painted Wheels [Uncommon]", Some("Wheels")),
    ("Painted Decals", Some("Decal")),
    ("Painted Boosts", Some("Rocket Boost")),
    ("Painted Toppers", Some("Topper")),
    ("Painted Antennas", Some("Antenna")),
    ("Painted Trails", Some("Trail")),
    ("Painted Banners", Some("Player Banner")),
    ("Painted Avatar Borders", Some("Avatar Border")),
    ("Alpha + Beta", None),
    ("Unpainted Goal Explosions", Some("Goal Expolosion")),
    ("Unpainted Cars", Some("Body")),
    ("Unpainted Wheels", Some("Wheels")),
    ("Unpainted Decals", Some("Decal")),
    ("Unpainted Boosts", Some("Rocket Boost")),
    ("Unpainted Toppers", Some("Topper")),
    ("Unpainted Antennas", Some("Antenna")),
    ("Unpainted Trails", Some("Trail")),
    ("Unpainted Banners", Some("Player Banner")),
    ("Unpainted Avatar Borders", Some("Avatar Border")),
    ("Engine Audio", Some("Engine Audio")),
    ("Gift Packs", Some("Reward Item")),
    ("Paint Finishes", Some("Paint Finish")),
];

/// Inventory paint names that differ from the catalogue's colour labels
const PAINT_ALIAS_TABLE: &[(&str, &str)] = &[
    ("none", "Default"),
    ("Titanium White", "White"),
    ("Forest Green", "Green"),
    ("Burnt Sienna", "Sienna"),
];

/// Section label → category lookup
#[derive(Debug, Clone)]
pub struct CategoryMap {
    entries: HashMap<String, Category>,
}

impl CategoryMap {
    /// Build a map from explicit entries; later duplicates win.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Category)>,
        S: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(label, category)| (label.into(), category))
                .collect(),
        }
    }

    /// Add or replace one label
    pub fn insert(&mut self, label: impl Into<String>, category: Category) {
        self.entries.insert(label.into(), category);
    }

    /// Resolve a section label.
    ///
    /// A missing label is an error: guessing a category would put prices in
    /// the wrong bucket.
    pub fn resolve(&self, label: &str) -> Result<&Category> {
        self.entries
            .get(label)
            .ok_or_else(|| ValuationError::UnknownCategory(label.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::from_pairs(CATEGORY_TABLE.iter().map(|(label, category)| {
            let category = match category {
                Some(name) => Category::canonical(*name),
                None => Category::Excluded,
            };
            (*label, category)
        }))
    }
}

/// Raw inventory paint name → catalogue colour name
#[derive(Debug, Clone)]
pub struct PaintAliases {
    aliases: HashMap<String, String>,
}

impl PaintAliases {
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: Into<String>,
        B: Into<String>,
    {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(raw, canonical)| (raw.into(), canonical.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, raw: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.insert(raw.into(), canonical.into());
    }

    /// Canonical name for a paint; unknown paints pass through unchanged.
    /// Only whole values are replaced.
    pub fn canonicalize<'a>(&'a self, paint: &'a str) -> &'a str {
        self.aliases.get(paint).map(String::as_str).unwrap_or(paint)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl Default for PaintAliases {
    fn default() -> Self {
        Self::from_pairs(PAINT_ALIAS_TABLE.iter().copied())
    }
}

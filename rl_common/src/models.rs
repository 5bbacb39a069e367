use serde::Serialize;

/// Colour variants in catalogue column order.
///
/// The first entry is the default colour, which is where unpainted items
/// carry their value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColourList(Vec<String>);

impl ColourList {
    pub fn new<I, S>(colours: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(colours.into_iter().map(Into::into).collect())
    }

    /// Column index of a colour name (exact match)
    pub fn position(&self, colour: &str) -> Option<usize> {
        self.0.iter().position(|c| c == colour)
    }

    pub fn contains(&self, colour: &str) -> bool {
        self.position(colour).is_some()
    }

    /// The first column, conventionally "Default"
    pub fn default_colour(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Canonical item category of a catalogue section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "name", rename_all = "snake_case")]
pub enum Category {
    Canonical(String),
    /// Section is read but its rows never reach the price index.
    Excluded,
}

impl Category {
    pub fn canonical(name: impl Into<String>) -> Self {
        Category::Canonical(name.into())
    }

    pub fn is_excluded(&self) -> bool {
        matches!(self, Category::Excluded)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Category::Canonical(name) => Some(name),
            Category::Excluded => None,
        }
    }
}

/// One catalogue item with a price per colour column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub name: String,
    pub category: Category,
    /// One entry per [`ColourList`] entry, same order
    pub prices: Vec<f64>,
}

impl PriceRow {
    /// Price in the given column, if the column exists
    pub fn price_at(&self, column: usize) -> Option<f64> {
        self.prices.get(column).copied()
    }
}

/// One owned item after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub name: String,
    pub slot: String,
    /// Canonical colour name, comparable with [`ColourList`] entries
    pub paint: String,
    pub tradeable: bool,
}

/// An owned item with its resolved catalogue price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuedItem {
    pub name: String,
    pub slot: String,
    pub paint: String,
    pub price: f64,
}

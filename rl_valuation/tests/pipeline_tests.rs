use rl_common::{Category, ValuationError, Warning};
use rl_valuation::{
    load_inventory, CatalogueSource, CategoryMap, Error, FileCatalogue, PaintAliases, Pipeline,
    Result,
};
use std::io::Write;
use tempfile::NamedTempFile;

// Test fixtures - a trimmed catalogue page and inventory exports

fn create_catalogue_html() -> String {
    r#"<!DOCTYPE html>
<html><body>
<table id="colorLabels"><tr>
  <td><span class="priceTableHeader">Default</span></td>
  <td><span class="priceTableHeader">Black</span></td>
  <td><span class="priceTableHeader">White</span></td>
  <td><span class="priceTableHeader">Sienna</span></td>
</tr></table>
<div id="itemPricesContainer">
  <div class="priceTableContainer">
    <h2>Painted Cars</h2>
    <table>
      <tr><th>Item</th><th>Default</th><th>Black</th><th>White</th><th>Sienna</th></tr>
      <tr><td><div class="fnl">Octane</div></td><td>10</td><td>20</td><td>30</td><td>—</td></tr>
      <tr><td><div class="fnl">Dominus</div></td><td>5</td><td>100 - 150</td><td>1.2k - 1.5k</td><td>40</td></tr>
      <tr><td><div class="fnl">Broken</div></td><td>5</td></tr>
    </table>
  </div>
  <div class="priceTableContainer">
    <h2>Unpainted Wheels</h2>
    <table>
      <tr><td><div class="fnl">Zomba</div></td><td>300&#8202;-&#8202;400</td></tr>
      <tr><td><div class="fnl">Draco</div></td><td>30</td></tr>
    </table>
  </div>
  <div class="priceTableContainer">
    <h2>Alpha + Beta</h2>
    <table>
      <tr><td><div class="fnl">Gold Rush</div></td><td>20k - 25k</td></tr>
    </table>
  </div>
  <div class="priceTableContainer">
    <h2>Painted Wheels [Exotic]</h2>
    <table>
      <tr><td><div class="fnl">Octane: Zomba</div></td><td>1</td><td>2</td><td>3</td><td>4k</td></tr>
    </table>
  </div>
</div>
</body></html>"#
        .to_string()
}

fn create_inventory_csv() -> String {
    "\
product id,name,slot,paint,certification,quality,tradeable,amount
1,Octane,Body,Titanium White,none,Import,true,1
2,Dominus,Body,none,none,Import,true,1
3,Dominus,Body,Titanium White,Striker,Import,true,1
4,Zomba,Wheels,none,none,Exotic,true,1
5,Zomba,Wheels,Forest Green,none,Exotic,False,1
6,Gold Rush,Body,none,none,Limited,true,1
7,Merc,Body,Black,none,Import,true,1
8,Draco,Wheels,Crimson,none,Exotic,true,1
9,Octane: Zomba,Blueprint,Burnt Sienna,none,Exotic,true,1
10,Octane,Body,Black,none,Import,true,1,surplus
"
    .to_string()
}

fn write_temp(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

struct InMemoryCatalogue(String);

impl CatalogueSource for InMemoryCatalogue {
    fn fetch(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

#[test]
fn test_standard_run_ranks_owned_items() {
    let inventory = write_temp(create_inventory_csv().as_bytes());
    let source = InMemoryCatalogue(create_catalogue_html());

    let report = Pipeline::default()
        .run_from(&source, inventory.path(), false)
        .unwrap();

    let ranked: Vec<(&str, &str, f64)> = report
        .valuation
        .ranked
        .iter()
        .map(|v| (v.name.as_str(), v.paint.as_str(), v.price))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("Dominus", "White", 1350.0),
            ("Zomba", "Default", 350.0),
            ("Octane", "White", 30.0),
            ("Dominus", "Default", 5.0),
        ]
    );
    assert_eq!(report.colours.len(), 4);
    assert_eq!(report.indexed_rows, 5);
}

#[test]
fn test_standard_run_collects_warnings_from_every_stage() {
    let inventory = write_temp(create_inventory_csv().as_bytes());
    let source = InMemoryCatalogue(create_catalogue_html());

    let report = Pipeline::default()
        .run_from(&source, inventory.path(), false)
        .unwrap();

    let counts = report.diagnostics.counts();
    // "Broken" has one price cell in a painted section
    assert_eq!(counts.get("row shape"), Some(&1));
    // line 11 has an extra field
    assert_eq!(counts.get("inventory record"), Some(&1));
    // Draco's "Crimson" is not a catalogue colour
    assert_eq!(counts.get("colour lookup"), Some(&1));
    assert_eq!(report.diagnostics.len(), 3);

    // Merc and Gold Rush (excluded section) have no price
    assert_eq!(report.valuation.unmatched, 2);
}

#[test]
fn test_blueprint_run_values_blueprints_only() {
    let inventory = write_temp(create_inventory_csv().as_bytes());
    let source = InMemoryCatalogue(create_catalogue_html());

    let report = Pipeline::default()
        .run_from(&source, inventory.path(), true)
        .unwrap();

    assert_eq!(report.inventory_items, 1);
    assert_eq!(report.valuation.ranked.len(), 1);
    let item = &report.valuation.ranked[0];
    assert_eq!(item.name, "Octane: Zomba");
    assert_eq!(item.slot, "Blueprint");
    assert_eq!(item.paint, "Sienna");
    assert_eq!(item.price, 4000.0);
}

#[test]
fn test_unknown_section_aborts_run() {
    let html = create_catalogue_html().replace("Alpha + Beta", "Alpha Boost Collection");
    let inventory = write_temp(create_inventory_csv().as_bytes());

    let err = Pipeline::default()
        .run_from(&InMemoryCatalogue(html), inventory.path(), false)
        .unwrap_err();

    match err {
        Error::Valuation(ValuationError::UnknownCategory(label)) => {
            assert_eq!(label, "Alpha Boost Collection")
        }
        other => panic!("expected unknown category, got {other}"),
    }
}

#[test]
fn test_custom_category_map_accepts_new_section() {
    let html = create_catalogue_html().replace("Alpha + Beta", "Alpha Boost Collection");
    let inventory = write_temp(create_inventory_csv().as_bytes());

    let mut categories = CategoryMap::default();
    categories.insert("Alpha Boost Collection", Category::canonical("Rocket Boost"));
    let pipeline = Pipeline::new(categories, PaintAliases::default());

    let report = pipeline
        .run_from(&InMemoryCatalogue(html), inventory.path(), false)
        .unwrap();

    assert_eq!(report.valuation.ranked[0].name, "Gold Rush");
    assert_eq!(report.valuation.ranked[0].price, 22500.0);
}

#[test]
fn test_page_without_colour_labels_aborts_run() {
    let inventory = write_temp(create_inventory_csv().as_bytes());
    let source = InMemoryCatalogue("<html><body>Loading prices…</body></html>".to_string());

    let err = Pipeline::default()
        .run_from(&source, inventory.path(), false)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Valuation(ValuationError::MissingColourLabels)
    ));
}

#[test]
fn test_saved_page_and_windows_1252_inventory() {
    let page = write_temp(create_catalogue_html().as_bytes());
    // "Dominus" with a Windows-1252 encoded certification column
    let inventory = write_temp(
        b"name,slot,paint,certification,tradeable\nDominus,Body,Titanium White,Tact\xE9cien,True\n",
    );

    let report = Pipeline::default()
        .run_from(&FileCatalogue::new(page.path()), inventory.path(), false)
        .unwrap();

    assert_eq!(report.valuation.ranked.len(), 1);
    assert_eq!(report.valuation.ranked[0].price, 1350.0);
    assert!(report.diagnostics.iter().all(|w| !matches!(w, Warning::SourceRecord { .. })));
}

#[test]
fn test_missing_inventory_file_is_an_error() {
    let err = load_inventory("/nonexistent/inventory.csv").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_run_with_loaded_inventory() {
    let inventory = write_temp(create_inventory_csv().as_bytes());
    let load = load_inventory(inventory.path()).unwrap();
    assert_eq!(load.records.len(), 9);

    let report = Pipeline::default()
        .run(&create_catalogue_html(), load, false)
        .unwrap();
    assert_eq!(report.valuation.top(2).len(), 2);
    assert_eq!(report.valuation.top(2)[0].name, "Dominus");
}

//! RL Valuation - ranks a Rocket League inventory by catalogue price
//!
//! Reads a saved price page and an inventory CSV, prints the most valuable
//! items and a summary of anything that was skipped.

use clap::Parser;
use rl_valuation::formatters::{format_diagnostics, format_json, format_ranking};
use rl_valuation::{FileCatalogue, Pipeline};
use std::path::PathBuf;

/// Rank owned Rocket League items by their rl.insider.gg price
#[derive(Parser, Debug)]
#[command(name = "rl_valuation")]
#[command(version, about, long_about = None)]
struct Args {
    /// Saved catalogue page (fully rendered HTML)
    #[arg(short, long)]
    catalogue: PathBuf,

    /// Inventory CSV export
    #[arg(short, long, default_value = "inventory.csv")]
    inventory: PathBuf,

    /// Value blueprints instead of regular items (use the blueprint price page)
    #[arg(long, default_value_t = false)]
    blueprint: bool,

    /// Number of items to print
    #[arg(long, default_value_t = 20)]
    top: usize,

    /// Print JSON instead of a table
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting rl_valuation...");

    let source = FileCatalogue::new(&args.catalogue);
    let report = match Pipeline::default().run_from(&source, &args.inventory, args.blueprint) {
        Ok(report) => report,
        Err(e) => {
            log::error!("Valuation failed: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match format_json(&report, args.top) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                log::error!("Failed to write report: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print!("{}", format_ranking(report.valuation.top(args.top)));
    println!(
        "\n{} of {} items priced, total {:.1}",
        report.valuation.ranked.len(),
        report.inventory_items,
        report.valuation.total()
    );
    if !report.diagnostics.is_empty() {
        println!();
        print!("{}", format_diagnostics(&report.diagnostics));
    }
}

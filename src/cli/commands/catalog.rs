//! Catalog command - list built-in well-known dependencies

use crate::catalog::KnownDependency;
use crate::cli::args::{CatalogArgs, OutputFormat};
use crate::error::FetchResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the catalog command
pub fn execute(args: CatalogArgs) -> FetchResult<()> {
    match args.format {
        OutputFormat::Table => print_table(),
        OutputFormat::Json => print_json()?,
        OutputFormat::Plain => {
            for known in KnownDependency::all() {
                println!("{}", known);
            }
        }
    }
    Ok(())
}

fn print_table() {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Catalog");

    println!(
        "{:<22} {:<50} {}",
        style("NAME").bold(),
        style("COORDINATE").bold(),
        style("REPOSITORY").bold()
    );
    println!("{}", "-".repeat(100));

    for known in KnownDependency::all() {
        let coordinate = known.coordinate();
        println!(
            "{:<22} {:<50} {}",
            known.name(),
            coordinate.notation(),
            style(coordinate.repository()).dim()
        );
    }

    println!();
    ui::remark(&ctx, "Use with: jarfetch fetch --known <name>");
}

fn print_json() -> FetchResult<()> {
    #[derive(serde::Serialize)]
    struct CatalogJson {
        name: &'static str,
        #[serde(flatten)]
        coordinate: crate::coordinate::Coordinate,
    }

    let entries: Vec<CatalogJson> = KnownDependency::all()
        .iter()
        .map(|k| CatalogJson {
            name: k.name(),
            coordinate: k.coordinate(),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

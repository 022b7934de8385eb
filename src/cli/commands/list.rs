//! List command - show requested dependencies without downloading

use super::requested_coordinates;
use crate::cache::CacheDir;
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::coordinate::Coordinate;
use crate::error::FetchResult;
use crate::manager::unique_coordinates;
use crate::resolver::resolve_url;
use crate::ui::{self, UiContext};
use console::style;

/// One row of the listing
#[derive(serde::Serialize)]
struct Row {
    coordinate: Coordinate,
    url: Option<String>,
    path: String,
    cached: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, config: &Config) -> FetchResult<()> {
    let requested = requested_coordinates(&args.deps, config)?;
    let cache = CacheDir::at(args.cache_dir.clone().unwrap_or_else(|| config.cache_dir()));

    let rows: Vec<Row> = unique_coordinates(requested)
        .into_iter()
        .map(|coordinate| Row {
            url: resolve_url(&coordinate).ok().map(String::from),
            path: cache.entry_path(&coordinate).display().to_string(),
            cached: cache.contains(&coordinate),
            coordinate,
        })
        .collect();

    if rows.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "No dependencies requested");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&rows),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Plain => {
            for row in &rows {
                println!("{}", row.coordinate.notation());
            }
        }
    }

    Ok(())
}

fn print_table(rows: &[Row]) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Dependencies");

    println!(
        "{:<50} {:<8} {}",
        style("COORDINATE").bold(),
        style("STATE").bold(),
        style("URL").bold()
    );
    println!("{}", "-".repeat(100));

    for row in rows {
        let state = if row.cached {
            style("cached").green()
        } else {
            style("missing").yellow()
        };
        let url = row.url.as_deref().unwrap_or("(invalid)");
        println!("{:<50} {:<8} {}", row.coordinate.notation(), state, url);
    }

    println!();
    println!("{} dependency(ies)", rows.len());
}

//! Cache command - inspect or clear the artifact cache

use crate::cache::{CacheDir, CacheEntry};
use crate::cli::args::{CacheAction, CacheArgs, OutputFormat};
use crate::config::Config;
use crate::error::FetchResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the cache command
pub fn execute(args: CacheArgs, config: &Config) -> FetchResult<()> {
    let cache = CacheDir::at(args.cache_dir.unwrap_or_else(|| config.cache_dir()));

    match args.action {
        CacheAction::List { format } => list_entries(&cache, format),
        CacheAction::Path => {
            println!("{}", cache.path().display());
            Ok(())
        }
        CacheAction::Clear { yes } => clear(&cache, yes),
    }
}

/// List all cached artifacts
fn list_entries(cache: &CacheDir, format: OutputFormat) -> FetchResult<()> {
    let entries = cache.entries()?;

    if entries.is_empty() {
        match format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => println!("No cached artifacts in {}", cache.path().display()),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => print_json(&entries)?,
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}", entry.path.display());
            }
        }
    }

    Ok(())
}

fn print_table(entries: &[CacheEntry]) {
    println!(
        "{:<45} {:>12} {:<18}",
        "ARTIFACT", "SIZE", "MODIFIED"
    );
    println!("{}", "-".repeat(77));

    let mut total = 0;
    for entry in entries {
        let modified = entry
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<45} {:>12} {:<18}",
            entry.file_name,
            format_size(entry.size),
            style(modified).dim()
        );
        total += entry.size;
    }

    println!();
    println!("Total: {} artifact(s), {}", entries.len(), format_size(total));
}

fn print_json(entries: &[CacheEntry]) -> FetchResult<()> {
    #[derive(serde::Serialize)]
    struct EntryJson {
        file_name: String,
        path: String,
        size: u64,
        modified: Option<String>,
        sha256: String,
    }

    let mut json_entries = Vec::with_capacity(entries.len());
    for entry in entries {
        json_entries.push(EntryJson {
            file_name: entry.file_name.clone(),
            path: entry.path.display().to_string(),
            size: entry.size,
            modified: entry.modified.map(|m| m.to_rfc3339()),
            sha256: entry.digest()?,
        });
    }

    println!("{}", serde_json::to_string_pretty(&json_entries)?);
    Ok(())
}

/// Delete cached artifacts after confirmation
fn clear(cache: &CacheDir, yes: bool) -> FetchResult<()> {
    let ctx = UiContext::detect().with_auto_yes(yes);

    let count = cache.entries()?.len();
    if count == 0 {
        ui::step_info(&ctx, "Cache is already empty");
        return Ok(());
    }

    let prompt = format!("Delete {} artifact(s) from {}?", count, cache.path().display());
    if !ui::confirm(&ctx, &prompt, false)? {
        ui::step_warn_hint(&ctx, "Cache not cleared", "Pass --yes to skip the prompt");
        return Ok(());
    }

    let removed = cache.clear()?;
    ui::step_ok(&ctx, &format!("Removed {} file(s)", removed));
    Ok(())
}

/// Human-readable byte count
fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

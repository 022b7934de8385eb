//! jarfetch - runtime dependency fetcher
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use jarfetch::cli::{log_directive, Cli, Commands};
use jarfetch::config::ConfigManager;
use jarfetch::error::FetchResult;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> FetchResult<()> {
    let cli = Cli::parse();

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load()?;

    let filter = EnvFilter::new(log_directive(cli.verbose, config.general.verbose));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .without_time();
    if config.general.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    debug!("Using config {}", config_manager.path().display());

    match cli.command {
        Commands::Fetch(args) => jarfetch::cli::commands::fetch(args, &config),
        Commands::List(args) => jarfetch::cli::commands::list(args, &config),
        Commands::Url(args) => jarfetch::cli::commands::url(args, &config),
        Commands::Catalog(args) => jarfetch::cli::commands::catalog(args),
        Commands::Cache(args) => jarfetch::cli::commands::cache(args, &config),
        Commands::Config(args) => jarfetch::cli::commands::config(args, &config, &config_manager),
    }
}

//! CLI argument definitions using clap derive

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// jarfetch - runtime dependency fetcher
///
/// Downloads Maven artifacts into a local cache when missing and
/// prints the resulting classpath.
#[derive(Parser, Debug)]
#[command(name = "jarfetch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug). `general.verbose = true`
    /// in the config already implies -v
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "JARFETCH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download missing dependencies and print the classpath
    Fetch(FetchArgs),

    /// Show requested dependencies and whether they are cached
    List(ListArgs),

    /// Print the download URL of a coordinate
    Url(UrlArgs),

    /// List built-in well-known dependencies
    Catalog(CatalogArgs),

    /// Inspect or clear the artifact cache
    Cache(CacheArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Where the requested dependencies come from
#[derive(Args, Debug, Default)]
pub struct DependencyArgs {
    /// Coordinates as group:artifact:version[@repository]
    pub coordinates: Vec<String>,

    /// Manifest file (defaults to ./jarfetch.toml when present)
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Ignore ./jarfetch.toml
    #[arg(long, conflicts_with = "manifest")]
    pub no_manifest: bool,

    /// Built-in catalog entries (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub known: Vec<String>,
}

/// Arguments for the fetch command
#[derive(Parser, Debug)]
pub struct FetchArgs {
    #[command(flatten)]
    pub deps: DependencyArgs,

    /// Cache directory (overrides config)
    #[arg(long, env = "JARFETCH_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Attempt every dependency instead of stopping at the first failure
    #[arg(long)]
    pub continue_on_error: bool,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub deps: DependencyArgs,

    /// Cache directory (overrides config)
    #[arg(long, env = "JARFETCH_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the url command
#[derive(Parser, Debug)]
pub struct UrlArgs {
    /// Coordinate as group:artifact:version[@repository]
    pub coordinate: String,
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Subcommand for cache
    #[command(subcommand)]
    pub action: CacheAction,

    /// Cache directory (overrides config)
    #[arg(long, global = true, env = "JARFETCH_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// List cached artifacts
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the cache directory path
    Path,

    /// Delete all cached artifacts
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., fetch.timeout_secs)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line, or the joined classpath for fetch)
    Plain,
}

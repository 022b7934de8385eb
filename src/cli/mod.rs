//! Command-line interface

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

/// Log filter for a `-v` count. `general.verbose` counts as one `-v`, so
/// per-dependency progress shows up by default.
pub fn log_directive(verbose: u8, config_verbose: bool) -> &'static str {
    let level = if config_verbose {
        verbose.max(1)
    } else {
        verbose
    };
    match level {
        0 => "jarfetch=warn",
        1 => "jarfetch=info",
        _ => "jarfetch=debug",
    }
}

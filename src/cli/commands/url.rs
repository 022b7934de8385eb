//! Url command - print the download URL of a coordinate

use crate::cli::args::UrlArgs;
use crate::config::Config;
use crate::coordinate::Coordinate;
use crate::error::FetchResult;
use crate::resolver::resolve_url;

/// Execute the url command
pub fn execute(args: UrlArgs, config: &Config) -> FetchResult<()> {
    let coordinate = Coordinate::parse(&args.coordinate, &config.fetch.default_repository)?;
    println!("{}", resolve_url(&coordinate)?);
    Ok(())
}

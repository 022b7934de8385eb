//! Fetch command - download missing dependencies and print the classpath

use super::requested_coordinates;
use crate::cli::args::{FetchArgs, OutputFormat};
use crate::config::Config;
use crate::error::{FetchError, FetchResult, InstallError};
use crate::install::{Classpath, Installer};
use crate::manager::{ArtifactSource, FailurePolicy, FetchManager, InstallReport};
use crate::transport::HttpTransport;
use crate::ui::{self, FetchProgress, UiContext};
use std::path::Path;

/// Classpath installer that also ticks the progress bar
struct ProgressInstaller<'a> {
    classpath: &'a mut Classpath,
    progress: &'a FetchProgress,
}

impl Installer for ProgressInstaller<'_> {
    fn install(&mut self, artifact: &Path) -> Result<(), InstallError> {
        self.classpath.install(artifact)?;
        self.progress.advance(artifact);
        Ok(())
    }
}

/// Execute the fetch command
pub fn execute(args: FetchArgs, config: &Config) -> FetchResult<()> {
    let ctx = UiContext::detect();
    let coordinates = requested_coordinates(&args.deps, config)?;

    if coordinates.is_empty() {
        if args.format == OutputFormat::Table {
            ui::step_warn_hint(
                &ctx,
                "No dependencies requested",
                "Pass coordinates, --known, or add jarfetch.toml",
            );
        }
        return Ok(());
    }

    let policy = if args.continue_on_error {
        FailurePolicy::Continue
    } else {
        config.fetch.failure_policy
    };
    let cache_dir = args.cache_dir.clone().unwrap_or_else(|| config.cache_dir());

    let mut manager = FetchManager::new(&cache_dir, config.general.verbose)?
        .with_transport(HttpTransport::new(config.fetch.timeout()))
        .with_failure_policy(policy)
        .with_default_repository(config.fetch.default_repository.clone());
    manager.register_all(coordinates);

    let pending = manager.pending().len();
    if args.format == OutputFormat::Table {
        ui::intro(&ctx, &format!("Fetching {} dependencies", pending));
    }

    let mut classpath = Classpath::new();
    let progress = if args.format == OutputFormat::Table {
        FetchProgress::new(&ctx, pending as u64)
    } else {
        FetchProgress::new(&UiContext::non_interactive(), 0)
    };
    let result = {
        let mut installer = ProgressInstaller {
            classpath: &mut classpath,
            progress: &progress,
        };
        manager.fetch_and_install(&mut installer)
    };
    progress.finish();
    let report = result?;

    match args.format {
        OutputFormat::Table => print_table(&ctx, &report, manager.cache().path()),
        OutputFormat::Json => print_json(&report, &classpath)?,
        OutputFormat::Plain => print_plain(&classpath)?,
    }

    if report.is_complete() {
        Ok(())
    } else {
        Err(FetchError::PartialInstall {
            failed: report.failed.len(),
            total: pending,
        })
    }
}

fn print_table(ctx: &UiContext, report: &InstallReport, cache_dir: &Path) {
    for artifact in &report.installed {
        let detail = match artifact.source {
            ArtifactSource::Cached => "cached",
            ArtifactSource::Downloaded => "downloaded",
        };
        ui::step_ok_detail(ctx, &artifact.coordinate.notation(), detail);
    }
    for failed in &report.failed {
        ui::step_error_detail(ctx, &failed.coordinate.notation(), &failed.reason);
    }

    ui::key_value(ctx, "cache", &cache_dir.display().to_string());

    let summary = format!(
        "{} installed, {} downloaded",
        report.installed.len(),
        report.downloaded()
    );
    if report.is_complete() {
        ui::outro_success(ctx, &summary);
    } else {
        ui::outro_warn(ctx, &format!("{}, {} failed", summary, report.failed.len()));
    }
}

fn print_json(report: &InstallReport, classpath: &Classpath) -> FetchResult<()> {
    #[derive(serde::Serialize)]
    struct FetchJson<'a> {
        #[serde(flatten)]
        report: &'a InstallReport,
        classpath: String,
    }

    let joined = classpath.joined().map_err(|e| FetchError::User(e.to_string()))?;
    let json = FetchJson {
        report,
        classpath: joined.to_string_lossy().into_owned(),
    };
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_plain(classpath: &Classpath) -> FetchResult<()> {
    let joined = classpath.joined().map_err(|e| FetchError::User(e.to_string()))?;
    println!("{}", joined.to_string_lossy());
    Ok(())
}

//! Progress indicators with CI fallback

use super::context::UiContext;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Progress bar over a fetch-and-install pass.
///
/// Shows an indicatif bar in interactive mode and nothing in plain mode,
/// where the final report is printed instead.
pub struct FetchProgress {
    bar: Option<ProgressBar>,
}

impl FetchProgress {
    /// Create a bar for `total` dependencies
    pub fn new(ctx: &UiContext, total: u64) -> Self {
        let bar = if ctx.use_fancy_output() && total > 0 {
            let bar = ProgressBar::new(total);
            if let Ok(style) = ProgressStyle::default_bar().template(
                "  {spinner:.cyan} Installing  {bar:20.cyan/dim} {pos}/{len} {msg:.dim}  {elapsed:.dim}",
            ) {
                bar.set_style(
                    style
                        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
                        .progress_chars("━╸─"),
                );
            }
            bar.enable_steady_tick(std::time::Duration::from_millis(120));
            Some(bar)
        } else {
            None
        };
        Self { bar }
    }

    /// Record one installed artifact
    pub fn advance(&self, artifact: &Path) {
        if let Some(ref bar) = self.bar {
            let name = artifact
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            bar.set_message(name);
            bar.inc(1);
        }
    }

    /// Finish and clear the progress bar
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.disable_steady_tick();
            bar.finish_and_clear();
        }
    }
}

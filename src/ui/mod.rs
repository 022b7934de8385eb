//! UI module for consistent CLI output
//!
//! Uses `cliclack` for clack-style logs and prompts and `indicatif` for the
//! install progress bar, with plain output in CI/non-interactive environments.

mod context;
mod output;
mod progress;
mod prompts;

pub use context::{UiContext, PLAIN_ENV};
pub use output::{
    intro, key_value, outro_success, outro_warn, remark, step_error_detail, step_info, step_ok,
    step_ok_detail, step_warn_hint,
};
pub use progress::FetchProgress;
pub use prompts::confirm;

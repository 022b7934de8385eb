//! Confirmation prompts with non-interactive fallback

use super::context::UiContext;
use crate::error::{FetchError, FetchResult};

/// Ask a yes/no question. Returns `true` under auto-yes and `default`
/// when there is no terminal to ask on.
pub fn confirm(ctx: &UiContext, message: &str, default: bool) -> FetchResult<bool> {
    if ctx.auto_yes() {
        println!("  {} (auto-approved)", message);
        return Ok(true);
    }

    if !ctx.is_interactive() {
        return Ok(default);
    }

    cliclack::confirm(message)
        .initial_value(default)
        .interact()
        .map_err(|e| FetchError::User(format!("Prompt failed: {}", e)))
}

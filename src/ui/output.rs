//! Step and summary lines for fetch, cache and config commands
//!
//! Interactive terminals get clack-style logs. Plain mode prints one
//! tagged line per step so CI logs stay greppable.

use super::context::UiContext;
use console::{style, StyledObject};

/// Tag shown in front of a plain-mode line
#[derive(Debug, Clone, Copy)]
enum Tag {
    Ok,
    Warn,
    Fail,
    Info,
}

impl Tag {
    fn styled(self) -> StyledObject<&'static str> {
        match self {
            Tag::Ok => style("ok").green(),
            Tag::Warn => style("warn").yellow(),
            Tag::Fail => style("fail").red(),
            Tag::Info => style("info").cyan(),
        }
    }
}

fn plain_line(tag: Tag, message: &str) {
    println!("  {:>4} {}", tag.styled(), message);
}

/// Title line before a batch of steps
pub fn intro(ctx: &UiContext, title: &str) {
    if ctx.use_fancy_output() {
        cliclack::intro(style(title).cyan().bold()).ok();
    } else {
        println!("{}", style(title).bold());
    }
}

/// Closing summary when everything was installed
pub fn outro_success(ctx: &UiContext, summary: &str) {
    if ctx.use_fancy_output() {
        cliclack::outro(style(summary).green().bold()).ok();
    } else {
        plain_line(Tag::Ok, summary);
    }
}

/// Closing summary when some dependencies were left out
pub fn outro_warn(ctx: &UiContext, summary: &str) {
    if ctx.use_fancy_output() {
        cliclack::outro(style(summary).yellow().bold()).ok();
    } else {
        plain_line(Tag::Warn, summary);
    }
}

/// Completed step with a short qualifier, e.g. an artifact and "cached"
pub fn step_ok_detail(ctx: &UiContext, subject: &str, detail: &str) {
    let line = format!("{} ({})", subject, style(detail).dim());
    if ctx.use_fancy_output() {
        cliclack::log::success(line).ok();
    } else {
        plain_line(Tag::Ok, &line);
    }
}

pub fn step_ok(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::success(message).ok();
    } else {
        plain_line(Tag::Ok, message);
    }
}

/// Warning plus what to do about it
pub fn step_warn_hint(ctx: &UiContext, message: &str, hint: &str) {
    let line = format!("{}; {}", message, style(hint).dim());
    if ctx.use_fancy_output() {
        cliclack::log::warning(line).ok();
    } else {
        plain_line(Tag::Warn, &line);
    }
}

/// Failed step, e.g. a coordinate and why it is unavailable
pub fn step_error_detail(ctx: &UiContext, subject: &str, reason: &str) {
    let line = format!("{}: {}", subject, style(reason).red());
    if ctx.use_fancy_output() {
        cliclack::log::error(line).ok();
    } else {
        plain_line(Tag::Fail, &line);
    }
}

pub fn step_info(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::info(message).ok();
    } else {
        plain_line(Tag::Info, message);
    }
}

/// Dimmed follow-up line, e.g. how to use what was just listed
pub fn remark(ctx: &UiContext, message: &str) {
    if ctx.use_fancy_output() {
        cliclack::log::remark(message).ok();
    } else {
        println!("  {}", style(message).dim());
    }
}

/// Aligned `key: value` line such as the cache location
pub fn key_value(ctx: &UiContext, key: &str, value: &str) {
    let key = if ctx.use_fancy_output() {
        style(key).dim()
    } else {
        style(key)
    };
    println!("  {:>6}: {}", key, value);
}

//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{FetchError, FetchResult};
use crate::manager::FailurePolicy;
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Keys accepted by `config set`
const VALID_KEYS: &[&str] = &[
    "general.verbose",
    "general.log_format",
    "cache.dir",
    "fetch.default_repository",
    "fetch.timeout_secs",
    "fetch.failure_policy",
];

/// Execute the config command
pub fn execute(args: ConfigArgs, config: &Config, manager: &ConfigManager) -> FetchResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force)?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value)?,
    }

    Ok(())
}

fn show_config(config: &Config) -> FetchResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn init_config(manager: &ConfigManager, force: bool) -> FetchResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default())?;
    ui::step_ok_detail(
        &ctx,
        "Configuration initialized",
        &path.display().to_string(),
    );

    Ok(())
}

fn set_value(manager: &ConfigManager, config: &Config, key: &str, value: &str) -> FetchResult<()> {
    let ctx = UiContext::detect();
    let mut config = config.clone();
    apply(&mut config, key, value)?;

    manager.save(&config)?;
    ui::step_ok(&ctx, &format!("Set {} = {}", key, value));
    Ok(())
}

/// Apply a dot-separated key to the config
fn apply(config: &mut Config, key: &str, value: &str) -> FetchResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "verbose"] => config.general.verbose = parse_bool(value)?,
        ["general", "log_format"] => match value {
            "text" | "json" => config.general.log_format = value.to_string(),
            _ => {
                return Err(FetchError::User(format!(
                    "Invalid log format: {}. Use text or json",
                    value
                )))
            }
        },
        ["cache", "dir"] => {
            config.cache.dir = if value.is_empty() {
                None
            } else {
                Some(PathBuf::from(value))
            }
        }
        ["fetch", "default_repository"] => config.fetch.default_repository = value.to_string(),
        ["fetch", "timeout_secs"] => config.fetch.timeout_secs = parse_u64(value)?,
        ["fetch", "failure_policy"] => config.fetch.failure_policy = parse_policy(value)?,
        _ => {
            return Err(FetchError::User(format!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )))
        }
    }

    Ok(())
}

fn parse_bool(value: &str) -> FetchResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(FetchError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}

fn parse_u64(value: &str) -> FetchResult<u64> {
    value
        .parse()
        .map_err(|_| FetchError::User(format!("Invalid number: {}", value)))
}

fn parse_policy(value: &str) -> FetchResult<FailurePolicy> {
    match value {
        "stop" => Ok(FailurePolicy::Stop),
        "continue" => Ok(FailurePolicy::Continue),
        _ => Err(FetchError::User(format!(
            "Invalid failure policy: {}. Use stop or continue",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_known_keys() {
        let mut config = Config::default();
        apply(&mut config, "fetch.timeout_secs", "15").unwrap();
        apply(&mut config, "fetch.failure_policy", "continue").unwrap();
        apply(&mut config, "general.verbose", "no").unwrap();
        apply(&mut config, "cache.dir", "/tmp/deps").unwrap();

        assert_eq!(config.fetch.timeout_secs, 15);
        assert_eq!(config.fetch.failure_policy, FailurePolicy::Continue);
        assert!(!config.general.verbose);
        assert_eq!(config.cache.dir, Some(PathBuf::from("/tmp/deps")));

        apply(&mut config, "cache.dir", "").unwrap();
        assert!(config.cache.dir.is_none());
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut config = Config::default();
        let err = apply(&mut config, "vm.name", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn apply_rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply(&mut config, "fetch.timeout_secs", "soon").is_err());
        assert!(apply(&mut config, "fetch.failure_policy", "retry").is_err());
        assert!(apply(&mut config, "general.log_format", "xml").is_err());
    }
}

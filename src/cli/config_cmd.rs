//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;
use crate::domain::Action;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter),
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value),
        ConfigAction::Get { key } => handle_get(store, presenter, &key),
        ConfigAction::List => handle_list(store, presenter),
        ConfigAction::Path => handle_path(store, presenter),
    }
}

fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init()?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let mut config = store.load()?;

    match key {
        "action" => {
            value
                .parse::<Action>()
                .map_err(|e| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: e.to_string(),
                })?;
            config.action = Some(value.to_string());
        }
        "system_clipboard" => {
            config.system_clipboard =
                Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be 'true' or 'false'".to_string(),
                })?)
        }
        "quiet" => {
            config.quiet = Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?)
        }
        _ => unreachable!(), // Already validated
    }

    store.save(&config)?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load()?;

    let value = match key {
        "action" => config.action,
        "system_clipboard" => config.system_clipboard.map(|b| b.to_string()),
        "quiet" => config.quiet.map(|b| b.to_string()),
        _ => unreachable!(), // Already validated
    };

    match value {
        Some(value) => presenter.output(&value),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load()?;

    presenter.key_value(
        "action",
        config.action.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "system_clipboard",
        &config
            .system_clipboard
            .map_or("(not set)".to_string(), |b| b.to_string()),
    );
    presenter.key_value(
        "quiet",
        &config.quiet.map_or("(not set)".to_string(), |b| b.to_string()),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().display().to_string());
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

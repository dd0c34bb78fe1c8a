use crate::game_logic::errors::{DischargeError, DischargeResult};
use crate::resources::DischargeConfig;
use bevy::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use validator::Validate;

pub mod range_types;

pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().and_then(|mut path| {
        path.push("discharge");
        fs::create_dir_all(&path).ok()?;
        path.push("config.toml");
        Some(path)
    })
}

/// Load the user config, falling back to defaults on any problem
pub fn load_config() -> DischargeConfig {
    let Some(config_path) = get_config_path() else {
        warn!("No config directory available, using default settings");
        return DischargeConfig::default();
    };

    match load_config_from(&config_path) {
        Ok(config) => {
            info!("Loaded config from {}", config_path.display());
            config
        }
        Err(DischargeError::ConfigFileNotFound { .. }) => DischargeConfig::default(),
        Err(err) => {
            warn!("Ignoring config at {}: {err}", config_path.display());
            DischargeConfig::default()
        }
    }
}

/// Read, clamp and validate a config file
pub fn load_config_from<P: AsRef<Path>>(path: P) -> DischargeResult<DischargeConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DischargeError::ConfigFileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let mut config: DischargeConfig = toml::from_str(&contents)?;
    config.settings = config.settings.sanitized();

    config.settings.validate().map_err(|validation_errors| {
        let reason = validation_errors
            .field_errors()
            .iter()
            .map(|(field, errors)| {
                let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                format!("{field}: {}", error_msgs.join(", "))
            })
            .collect::<Vec<String>>()
            .join("; ");
        DischargeError::ConfigValidationFailed { reason }
    })?;

    Ok(config)
}

pub fn save_config(config: &DischargeConfig) -> DischargeResult<()> {
    let config_path = get_config_path().ok_or(DischargeError::ConfigDirNotFound)?;
    save_config_to(config, config_path)
}

pub fn save_config_to<P: AsRef<Path>>(config: &DischargeConfig, path: P) -> DischargeResult<()> {
    let contents = toml::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

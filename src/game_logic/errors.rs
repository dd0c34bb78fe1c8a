use bevy::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DischargeError {
    // Config-related errors
    #[error("Failed to get config directory")]
    ConfigDirNotFound,

    #[error("Failed to create config directory: {0}")]
    ConfigDirCreationFailed(#[from] std::io::Error),

    #[error("Failed to serialize config: {0}")]
    SerializationFailed(#[from] toml::ser::Error),

    #[error("Failed to deserialize config: {0}")]
    DeserializationFailed(#[from] toml::de::Error),

    #[error("Config file not found at path: {path}")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Config validation failed: {reason}")]
    ConfigValidationFailed { reason: String },

    // Routing precondition violations
    #[error("Agent {agent} is not present in the agent snapshot")]
    UnknownAgent { agent: Entity },
}

/// Result type alias for all operations
pub type DischargeResult<T> = Result<T, DischargeError>;

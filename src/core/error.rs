use thiserror::Error;

use crate::inventory::{ItemError, StashError};

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Stash error: {0}")]
    Stash(#[from] StashError),

    #[error("Item error: {0}")]
    Item(#[from] ItemError),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    InvalidConfig(String),

    #[error("Asset error: {0}")]
    AssetError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    RenderError(String),
}

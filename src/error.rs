//! Error types for the fantasy market analyzer

use thiserror::Error;


pub type Result<T> = std::result::Result<T, MarketError>;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("Snapshot path not provided and {env_var} environment variable not set")]
    MissingSnapshot { env_var: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid player category: {category}")]
    InvalidCategory { category: String },

    #[error("Invalid player id: {id:?}")]
    InvalidPlayerId { id: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: String },
}

impl From<anyhow::Error> for MarketError {
    fn from(err: anyhow::Error) -> Self {
        MarketError::Config {
            message: format!("{:#}", err),
        }
    }
}

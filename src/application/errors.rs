//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Telegram API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{0}")]
    Market(#[from] MarketError),

    #[error("Missing message reference: {0}")]
    MissingMessage(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Market data errors. Every variant means the stats are unavailable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketError {
    #[error("Invalid market data response: missing field `{0}`")]
    MissingField(&'static str),

    #[error("Invalid market data response: field `{field}` is not a finite number ({value})")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Market data request failed: {0}")]
    Transport(String),

    #[error("Market data provider returned status {0}")]
    Status(u16),

    #[error("Invalid market data response: {0}")]
    Decode(String),
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

//! Configuration management
//!
//! Everything comes from the environment and is read once at startup.
//! `BOT_TOKEN` and `CHAT_ID` are required; the rest have defaults.

use std::time::Duration;

use crate::application::errors::ConfigError;

pub const DEFAULT_SYMBOL: &str = "TONUSDT";
pub const DEFAULT_ASSET_NAME: &str = "Toncoin";
pub const DEFAULT_ASSET_TICKER: &str = "TON";
pub const DEFAULT_MARKET_API_BASE: &str = "https://api.binance.com";
pub const DEFAULT_POST_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_PORT: u16 = 8080;

/// Bot configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub market: MarketConfig,
    pub auto_post: AutoPostConfig,
    pub liveness: LivenessConfig,
}

#[derive(Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    pub token: String,
}

// Keep the token out of logs; only the bot id before the `:` is shown
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = match self.token.split_once(':') {
            Some((bot_id, _)) => format!("{}:***", bot_id),
            None => "***".to_string(),
        };
        f.debug_struct("TelegramConfig")
            .field("token", &redacted)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketConfig {
    pub api_base: String,
    pub symbol: String,
    pub asset_name: String,
    pub asset_ticker: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoPostConfig {
    pub chat_id: i64,
    pub interval: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LivenessConfig {
    pub port: u16,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_MARKET_API_BASE.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
            asset_name: DEFAULT_ASSET_NAME.to_string(),
            asset_ticker: DEFAULT_ASSET_TICKER.to_string(),
        }
    }
}

impl Default for LivenessConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl MarketConfig {
    /// Market settings only; needs no bot credentials
    pub fn from_env() -> Self {
        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: optional(lookup, "MARKET_API_BASE")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            symbol: optional(lookup, "TICKER_SYMBOL")
                .map(|s| s.to_uppercase())
                .unwrap_or(defaults.symbol),
            asset_name: optional(lookup, "ASSET_NAME").unwrap_or(defaults.asset_name),
            asset_ticker: optional(lookup, "ASSET_TICKER").unwrap_or(defaults.asset_ticker),
        }
    }
}

impl LivenessConfig {
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match optional(lookup, "PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT",
                reason: format!("{:?}: {}", raw, e),
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { port })
    }
}

impl Config {
    /// Load through an arbitrary lookup; empty values count as missing
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = optional(lookup, "BOT_TOKEN").ok_or(ConfigError::MissingVar("BOT_TOKEN"))?;

        let raw_chat_id = optional(lookup, "CHAT_ID").ok_or(ConfigError::MissingVar("CHAT_ID"))?;
        let chat_id = raw_chat_id.parse::<i64>().map_err(|e| ConfigError::InvalidValue {
            name: "CHAT_ID",
            reason: format!("{:?}: {}", raw_chat_id, e),
        })?;

        let interval_secs = match optional(lookup, "POST_INTERVAL_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::InvalidValue {
                        name: "POST_INTERVAL_SECS",
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        name: "POST_INTERVAL_SECS",
                        reason: format!("{:?}: {}", raw, e),
                    })
                }
            },
            None => DEFAULT_POST_INTERVAL_SECS,
        };

        Ok(Self {
            telegram: TelegramConfig { token },
            market: MarketConfig::from_lookup(lookup),
            auto_post: AutoPostConfig {
                chat_id,
                interval: Duration::from_secs(interval_secs),
            },
            liveness: LivenessConfig::from_lookup(lookup)?,
        })
    }

    /// Load from the process environment; a token given here (e.g. from a CLI flag) wins over `BOT_TOKEN`
    pub fn from_env_with_token(token: Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(&|key| match (key, &token) {
            ("BOT_TOKEN", Some(token)) => Some(token.clone()),
            _ => std::env::var(key).ok(),
        })
    }
}

fn optional(lookup: &dyn Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Environment configuration
//! - Market: Market data providers (Binance)
//! - Adapters: Platform integrations (Telegram)
//! - Liveness: HTTP endpoint for uptime monitors

pub mod adapters;
pub mod config;
pub mod liveness;
pub mod market;

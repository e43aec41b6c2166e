//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Bot, market data and configuration errors
//! - Messaging: Message parsing, formatting, dispatching
//! - Handlers: One reaction per trigger
//! - Services: Ticker fetch/render and the auto poster

pub mod errors;
pub mod handlers;
pub mod messaging;
pub mod services;

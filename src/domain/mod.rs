//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (StatsSnapshot, Mood, Message, Command)
//! - Traits: Abstractions for infrastructure (Bot, MarketData)

pub mod entities;
pub mod traits;

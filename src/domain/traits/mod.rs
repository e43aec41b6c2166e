//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod market;

pub use bot::{Bot, InlineKeyboard, KeyboardButton};
pub use market::MarketData;

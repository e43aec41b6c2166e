//! Telegram bot that reports 24h market stats for one trading pair.
//!
//! Stats are posted on `/tonprice`, refreshed in place from an inline button,
//! summarised as a mood on `/tonmood`, and broadcast to one chat on a timer.

pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod test_support;

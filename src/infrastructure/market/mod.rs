//! Market data providers

pub mod binance;

pub use binance::BinanceClient;

use async_trait::async_trait;
use crate::application::errors::MarketError;
use crate::domain::entities::StatsSnapshot;

/// MarketData trait - abstraction for 24h ticker providers
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetch the current 24h statistics for a trading pair such as `TONUSDT`.
    /// Issues exactly one request; callers decide whether to retry.
    async fn fetch_stats(&self, symbol: &str) -> Result<StatsSnapshot, MarketError>;
}

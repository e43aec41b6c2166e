use std::sync::Arc;

use crate::application::errors::MarketError;
use crate::application::messaging::formatter::{MessageFormatter, RenderedMessage};
use crate::domain::entities::StatsSnapshot;
use crate::domain::traits::MarketData;

/// Fetches stats for the configured symbol and renders them.
/// Shared by the command handlers and the auto poster.
pub struct TickerService {
    market: Arc<dyn MarketData>,
    symbol: String,
    formatter: MessageFormatter,
}

impl TickerService {
    pub fn new(market: Arc<dyn MarketData>, symbol: impl Into<String>, formatter: MessageFormatter) -> Self {
        Self {
            market,
            symbol: symbol.into(),
            formatter,
        }
    }

    pub async fn snapshot(&self) -> Result<StatsSnapshot, MarketError> {
        self.market.fetch_stats(&self.symbol).await
    }

    /// Fresh stats message with the refresh button
    pub async fn stats_message(&self) -> Result<RenderedMessage, MarketError> {
        let snapshot = self.snapshot().await?;
        Ok(self.formatter.format_stats(&snapshot))
    }

    /// Fresh mood message
    pub async fn mood_message(&self) -> Result<RenderedMessage, MarketError> {
        let snapshot = self.snapshot().await?;
        Ok(self.formatter.format_mood(&snapshot))
    }
}

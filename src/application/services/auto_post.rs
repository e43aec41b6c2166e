use std::sync::Arc;
use std::time::Duration;

use crate::application::errors::BotError;
use crate::application::services::TickerService;
use crate::domain::traits::Bot;

/// Default pause between automatic posts
pub const DEFAULT_POST_INTERVAL: Duration = Duration::from_secs(60);

/// Pushes a fresh stats message to one chat at a fixed interval
pub struct AutoPoster {
    ticker: Arc<TickerService>,
    bot: Arc<dyn Bot>,
    chat_id: i64,
    interval: Duration,
}

impl AutoPoster {
    pub fn new(ticker: Arc<TickerService>, bot: Arc<dyn Bot>, chat_id: i64) -> Self {
        Self {
            ticker,
            bot,
            chat_id,
            interval: DEFAULT_POST_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// One fetch, format and send
    pub async fn post_once(&self) -> Result<i64, BotError> {
        let rendered = self.ticker.stats_message().await?;
        self.bot
            .send_message(self.chat_id, &rendered.text, rendered.keyboard.as_ref())
            .await
    }

    /// Runs until the process exits. A failed iteration is logged and the
    /// window is dropped; the next attempt comes after the same interval.
    pub async fn run(self) {
        tracing::info!(
            "Auto post loop started: chat {} every {}s",
            self.chat_id,
            self.interval.as_secs()
        );

        loop {
            match self.post_once().await {
                Ok(message_id) => tracing::info!("✅ Auto post sent (message {})", message_id),
                Err(e) => tracing::error!("❌ Auto post failed: {}", e),
            }
            tokio::time::sleep(self.interval).await;
        }
    }
}

use std::sync::Arc;

use async_trait::async_trait;

use super::Handler;
use crate::application::errors::BotError;
use crate::application::services::TickerService;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;

/// `/tonprice` - replies with the stats message and a refresh button
pub struct PriceHandler {
    ticker: Arc<TickerService>,
}

impl PriceHandler {
    pub fn new(ticker: Arc<TickerService>) -> Self {
        Self { ticker }
    }
}

#[async_trait]
impl Handler for PriceHandler {
    async fn handle(&self, bot: &dyn Bot, message: &Message) -> Result<(), BotError> {
        let reason = match self.ticker.stats_message().await {
            Ok(rendered) => {
                match bot.send_message(message.chat_id, &rendered.text, rendered.keyboard.as_ref()).await {
                    Ok(_) => return Ok(()),
                    Err(e) => {
                        tracing::warn!("[{}] sending price failed: {}", message.chat_id, e);
                        e.to_string()
                    }
                }
            }
            Err(e) => {
                tracing::warn!("[{}] price fetch failed: {}", message.chat_id, e);
                e.to_string()
            }
        };

        bot.send_message(message.chat_id, &format!("❌ Failed to fetch price: {}", reason), None)
            .await?;
        Ok(())
    }
}

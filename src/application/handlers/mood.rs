use std::sync::Arc;

use async_trait::async_trait;

use super::Handler;
use crate::application::errors::BotError;
use crate::application::services::TickerService;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;

/// `/tonmood`
pub struct MoodHandler {
    ticker: Arc<TickerService>,
}

impl MoodHandler {
    pub fn new(ticker: Arc<TickerService>) -> Self {
        Self { ticker }
    }
}

#[async_trait]
impl Handler for MoodHandler {
    async fn handle(&self, bot: &dyn Bot, message: &Message) -> Result<(), BotError> {
        let reason = match self.ticker.mood_message().await {
            Ok(rendered) => match bot.send_message(message.chat_id, &rendered.text, None).await {
                Ok(_) => return Ok(()),
                Err(e) => {
                    tracing::warn!("[{}] sending mood failed: {}", message.chat_id, e);
                    e.to_string()
                }
            },
            Err(e) => {
                tracing::warn!("[{}] mood fetch failed: {}", message.chat_id, e);
                e.to_string()
            }
        };

        bot.send_message(message.chat_id, &format!("❌ Failed to fetch mood: {}", reason), None)
            .await?;
        Ok(())
    }
}

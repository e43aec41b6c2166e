use std::sync::Arc;

use async_trait::async_trait;

use super::Handler;
use crate::application::errors::BotError;
use crate::application::services::TickerService;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;

pub const UPDATED_NOTICE: &str = "🔁 Updated!";
pub const FAILED_NOTICE: &str = "❌ Error updating price";

/// Refresh button - edits the stats message in place, then answers the callback.
/// On any failure the message is left untouched and only the answer reports it.
pub struct RefreshHandler {
    ticker: Arc<TickerService>,
}

impl RefreshHandler {
    pub fn new(ticker: Arc<TickerService>) -> Self {
        Self { ticker }
    }

    async fn refresh(&self, bot: &dyn Bot, message: &Message) -> Result<(), BotError> {
        let message_id = message
            .message_id
            .ok_or_else(|| BotError::MissingMessage("callback has no message to edit".to_string()))?;

        let rendered = self.ticker.stats_message().await?;
        bot.edit_message(message.chat_id, message_id, &rendered.text, rendered.keyboard.as_ref())
            .await
    }
}

#[async_trait]
impl Handler for RefreshHandler {
    async fn handle(&self, bot: &dyn Bot, message: &Message) -> Result<(), BotError> {
        let Some(callback_id) = message.callback_id.as_deref() else {
            return Err(BotError::MissingMessage("refresh without callback id".to_string()));
        };

        let notice = match self.refresh(bot, message).await {
            Ok(()) => UPDATED_NOTICE,
            Err(e) => {
                tracing::warn!("[{}] refresh failed: {}", message.chat_id, e);
                FAILED_NOTICE
            }
        };

        bot.answer_callback(callback_id, Some(notice)).await
    }
}

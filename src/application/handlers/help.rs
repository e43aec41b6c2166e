use async_trait::async_trait;

use super::Handler;
use crate::application::errors::BotError;
use crate::domain::entities::{CommandRegistry, Message};
use crate::domain::traits::Bot;

/// `/help` and `/start`
pub struct HelpHandler {
    text: String,
}

impl HelpHandler {
    pub fn new(registry: &CommandRegistry) -> Self {
        let mut text = "Available commands:\n".to_string();
        for cmd in registry.all() {
            text.push_str(&format!("/{} - {}\n", cmd.name, cmd.description));
        }
        Self { text: text.trim_end().to_string() }
    }
}

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, bot: &dyn Bot, message: &Message) -> Result<(), BotError> {
        bot.send_message(message.chat_id, &self.text, None).await?;
        Ok(())
    }
}

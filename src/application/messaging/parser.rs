//! Message parser - Parses raw chat input into structured messages

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::domain::entities::{CommandRegistry, Content, Message, Trigger, REFRESH_ACTION};

/// `/name`, `/name@bot_username`, optionally followed by arguments
static COMMAND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^/([A-Za-z0-9_]+)(?:@([A-Za-z0-9_]+))?(?:\s+(.*))?$")
        .expect("command pattern is valid")
});

/// Parses incoming text and callbacks into Message objects and maps them to triggers
pub struct MessageParser {
    registry: CommandRegistry,
    bot_username: Option<String>,
}

impl MessageParser {
    pub fn new(registry: CommandRegistry) -> Self {
        Self {
            registry,
            bot_username: None,
        }
    }

    /// Commands addressed to a different bot (`/cmd@other_bot`) are treated as plain text
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Parse a text message
    pub fn parse(&self, chat_id: i64, text: &str) -> Message {
        let text = text.trim();

        let Some(caps) = COMMAND_RE.captures(text) else {
            return Message::from_text(chat_id, text);
        };

        if let (Some(mention), Some(me)) = (caps.get(2), self.bot_username.as_deref()) {
            if !mention.as_str().eq_ignore_ascii_case(me) {
                return Message::from_text(chat_id, text);
            }
        }

        let name = caps.get(1).map(|m| m.as_str().to_lowercase()).unwrap_or_default();
        let args = caps
            .get(3)
            .map(|m| m.as_str().split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();

        Message::from_command(chat_id, name, args)
    }

    /// Parse a callback query (inline button press)
    pub fn parse_callback(&self, chat_id: i64, callback_id: &str, data: Option<&str>) -> Message {
        match data {
            Some(data) => Message::from_callback(chat_id, callback_id, data),
            None => {
                let mut msg = Message::new(chat_id, Content::Empty);
                msg.callback_id = Some(callback_id.to_string());
                msg
            }
        }
    }

    /// Which handler, if any, should see this message
    pub fn trigger_for(&self, message: &Message) -> Option<Trigger> {
        match &message.content {
            Content::Command { name, .. } => self.registry.find(name).map(|c| c.trigger),
            Content::CallbackData(data) if data == REFRESH_ACTION => Some(Trigger::Refresh),
            _ => None,
        }
    }
}

//! Long-polling loop that feeds Telegram updates into the dispatcher

use std::sync::Arc;
use std::time::Duration;

use super::{TelegramAdapter, Update};
use crate::application::messaging::{MessageDispatcher, MessageParser};
use crate::domain::entities::Message;

/// Seconds Telegram may hold a getUpdates request open
const LONG_POLL_SECS: i64 = 30;

/// Pause after a failed getUpdates call
const ERROR_PAUSE: Duration = Duration::from_secs(5);

pub struct UpdatePoller {
    adapter: Arc<TelegramAdapter>,
    dispatcher: Arc<MessageDispatcher>,
}

impl UpdatePoller {
    pub fn new(adapter: Arc<TelegramAdapter>, dispatcher: Arc<MessageDispatcher>) -> Self {
        Self { adapter, dispatcher }
    }

    /// Poll forever. Every event is handled on its own task, so a slow fetch
    /// for one chat never holds up the next update.
    pub async fn run(self) {
        let mut offset: i64 = 0;

        tracing::info!("Starting message loop...");

        loop {
            match self.adapter.get_updates(offset, LONG_POLL_SECS).await {
                Ok(updates) => {
                    if !updates.is_empty() {
                        tracing::debug!("Received {} updates", updates.len());
                    }

                    for update in &updates {
                        let Some(message) = to_message(self.dispatcher.parser(), update) else {
                            continue;
                        };
                        let dispatcher = Arc::clone(&self.dispatcher);
                        tokio::spawn(async move {
                            dispatcher.dispatch(message).await;
                        });
                    }

                    offset = TelegramAdapter::get_next_offset(&updates, offset);
                }
                Err(e) => {
                    tracing::error!("Failed to get updates: {}", e);
                    tokio::time::sleep(ERROR_PAUSE).await;
                }
            }
        }
    }
}

/// Reduce a raw update to a domain message. Updates without text or callback are skipped.
pub fn to_message(parser: &MessageParser, update: &Update) -> Option<Message> {
    if let Some(msg) = &update.message {
        let text = msg.text.as_deref()?;
        let mut message = parser.parse(msg.chat.id, text).with_message_id(msg.message_id);
        if let Some(user) = &msg.from {
            message = message.with_sender(user.id.to_string());
        }
        return Some(message);
    }

    if let Some(cb) = &update.callback_query {
        let Some(origin) = &cb.message else {
            // Callback without an accessible message; the chat is unknown but the
            // press still needs an answer, which the refresh handler gives.
            return Some(
                parser
                    .parse_callback(cb.from.id, &cb.id, cb.data.as_deref())
                    .with_sender(cb.from.id.to_string()),
            );
        };
        return Some(
            parser
                .parse_callback(origin.chat.id, &cb.id, cb.data.as_deref())
                .with_message_id(origin.message_id)
                .with_sender(cb.from.id.to_string()),
        );
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CommandRegistry, Content, Trigger};

    fn parser() -> MessageParser {
        MessageParser::new(CommandRegistry::with_defaults())
    }

    fn parse_update(raw: serde_json::Value) -> Update {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_text_update_becomes_command() {
        let update = parse_update(serde_json::json!({
            "update_id": 1,
            "message": {
                "message_id": 20,
                "from": { "id": 555, "first_name": "A" },
                "chat": { "id": 555 },
                "text": "/tonprice"
            }
        }));

        let p = parser();
        let msg = to_message(&p, &update).unwrap();
        assert_eq!(msg.chat_id, 555);
        assert_eq!(msg.message_id, Some(20));
        assert_eq!(msg.sender.as_deref(), Some("555"));
        assert_eq!(p.trigger_for(&msg), Some(Trigger::Price));
    }

    #[test]
    fn test_callback_update_keeps_message_reference() {
        let update = parse_update(serde_json::json!({
            "update_id": 2,
            "callback_query": {
                "id": "cb-1",
                "from": { "id": 555 },
                "message": { "message_id": 77, "chat": { "id": -100 } },
                "data": "refresh_price"
            }
        }));

        let p = parser();
        let msg = to_message(&p, &update).unwrap();
        assert_eq!(msg.chat_id, -100);
        assert_eq!(msg.message_id, Some(77));
        assert_eq!(msg.callback_id.as_deref(), Some("cb-1"));
        assert_eq!(p.trigger_for(&msg), Some(Trigger::Refresh));
    }

    #[test]
    fn test_callback_without_message_has_no_reference() {
        let update = parse_update(serde_json::json!({
            "update_id": 3,
            "callback_query": { "id": "cb-2", "from": { "id": 9 }, "data": "refresh_price" }
        }));

        let msg = to_message(&parser(), &update).unwrap();
        assert_eq!(msg.message_id, None);
        assert_eq!(msg.content, Content::CallbackData("refresh_price".into()));
    }

    #[test]
    fn test_update_without_text_is_skipped() {
        let update = parse_update(serde_json::json!({
            "update_id": 4,
            "message": { "message_id": 1, "chat": { "id": 1 } }
        }));
        assert!(to_message(&parser(), &update).is_none());
    }
}

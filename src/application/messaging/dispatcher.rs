//! Message dispatcher - Routes messages to handlers

use std::collections::HashMap;
use std::sync::Arc;

use super::parser::MessageParser;
use crate::application::handlers::{Handler, HelpHandler, MoodHandler, PriceHandler, RefreshHandler};
use crate::application::services::TickerService;
use crate::domain::entities::{Content, Message, Trigger};
use crate::domain::traits::Bot;

/// Message dispatcher - a table from trigger kind to handler
pub struct MessageDispatcher {
    parser: MessageParser,
    bot: Arc<dyn Bot>,
    handlers: HashMap<Trigger, Arc<dyn Handler>>,
}

impl MessageDispatcher {
    pub fn new(parser: MessageParser, bot: Arc<dyn Bot>) -> Self {
        Self {
            parser,
            bot,
            handlers: HashMap::new(),
        }
    }

    /// Dispatcher with the price, refresh, mood and help handlers registered
    pub fn with_defaults(parser: MessageParser, bot: Arc<dyn Bot>, ticker: Arc<TickerService>) -> Self {
        let help = HelpHandler::new(parser.registry());
        let mut dispatcher = Self::new(parser, bot);
        dispatcher.register(Trigger::Price, PriceHandler::new(ticker.clone()));
        dispatcher.register(Trigger::Refresh, RefreshHandler::new(ticker.clone()));
        dispatcher.register(Trigger::Mood, MoodHandler::new(ticker));
        dispatcher.register(Trigger::Help, help);
        dispatcher
    }

    /// Register a handler, replacing any previous one for the trigger
    pub fn register<H: Handler + 'static>(&mut self, trigger: Trigger, handler: H) {
        self.handlers.insert(trigger, Arc::new(handler));
    }

    pub fn parser(&self) -> &MessageParser {
        &self.parser
    }

    /// Run the handler for this message, if any. Delivery errors are logged here
    /// and never reach the caller.
    pub async fn dispatch(&self, message: Message) {
        let Some(trigger) = self.parser.trigger_for(&message) else {
            match &message.content {
                Content::Command { name, .. } => {
                    tracing::debug!("[{}] Ignoring unknown command /{}", message.chat_id, name)
                }
                Content::CallbackData(data) => {
                    tracing::debug!("[{}] Ignoring unknown callback {}", message.chat_id, data)
                }
                _ => tracing::debug!("[{}] Ignoring non-command message", message.chat_id),
            }
            return;
        };

        let Some(handler) = self.handlers.get(&trigger) else {
            tracing::warn!("No handler registered for {:?}", trigger);
            return;
        };

        tracing::debug!("[{}] Dispatching {:?}", message.chat_id, trigger);
        if let Err(e) = handler.handle(self.bot.as_ref(), &message).await {
            tracing::error!("[{}] {:?} handler failed: {}", message.chat_id, trigger, e);
        }
    }
}

//! Fakes shared by the unit tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::application::errors::{BotError, MarketError};
use crate::application::messaging::formatter::MessageFormatter;
use crate::application::services::TickerService;
use crate::domain::entities::StatsSnapshot;
use crate::domain::traits::{Bot, InlineKeyboard, MarketData};

/// Market data source that always answers with the same result
pub struct FakeMarket {
    result: Result<StatsSnapshot, MarketError>,
    calls: AtomicUsize,
}

impl FakeMarket {
    pub fn ok(price: f64, high: f64, low: f64, change: f64) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(StatsSnapshot::new(price, high, low, change).unwrap()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            result: Err(MarketError::Transport("connection refused".to_string())),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketData for FakeMarket {
    async fn fetch_stats(&self, _symbol: &str) -> Result<StatsSnapshot, MarketError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Everything a handler asked the chat platform to do
#[derive(Debug, Clone, PartialEq)]
pub enum BotCall {
    Send { chat_id: i64, text: String, keyboard: Option<InlineKeyboard> },
    Edit { chat_id: i64, message_id: i64, text: String, keyboard: Option<InlineKeyboard> },
    Answer { callback_id: String, text: Option<String> },
}

/// Bot that records calls instead of talking to Telegram
#[derive(Default)]
pub struct RecordingBot {
    calls: Mutex<Vec<BotCall>>,
    fail_sends: bool,
    fail_first_send: AtomicBool,
    fail_edits: bool,
}

impl RecordingBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_sends() -> Arc<Self> {
        Arc::new(Self { fail_sends: true, ..Self::default() })
    }

    /// Rejects the first send the way Telegram rejects bad markup, then behaves
    pub fn failing_first_send() -> Arc<Self> {
        Arc::new(Self { fail_first_send: AtomicBool::new(true), ..Self::default() })
    }

    pub fn failing_edits() -> Arc<Self> {
        Arc::new(Self { fail_edits: true, ..Self::default() })
    }

    pub fn calls(&self) -> Vec<BotCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn send_message(&self, chat_id: i64, text: &str, keyboard: Option<&InlineKeyboard>) -> Result<i64, BotError> {
        if self.fail_sends {
            return Err(BotError::Network("send failed".to_string()));
        }
        if self.fail_first_send.swap(false, Ordering::SeqCst) {
            return Err(BotError::Api("Bad Request: can't parse entities".to_string()));
        }
        let mut calls = self.calls.lock().unwrap();
        calls.push(BotCall::Send { chat_id, text: text.to_string(), keyboard: keyboard.cloned() });
        Ok(calls.len() as i64)
    }

    async fn edit_message(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        keyboard: Option<&InlineKeyboard>,
    ) -> Result<(), BotError> {
        if self.fail_edits {
            return Err(BotError::Api("message can't be edited".to_string()));
        }
        self.calls.lock().unwrap().push(BotCall::Edit {
            chat_id,
            message_id,
            text: text.to_string(),
            keyboard: keyboard.cloned(),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<(), BotError> {
        self.calls.lock().unwrap().push(BotCall::Answer {
            callback_id: callback_id.to_string(),
            text: text.map(str::to_string),
        });
        Ok(())
    }
}

pub fn ticker(market: Arc<FakeMarket>) -> Arc<TickerService> {
    Arc::new(TickerService::new(market, "TONUSDT", MessageFormatter::default()))
}

//! Message formatter - Renders snapshots as Telegram HTML

use crate::domain::entities::{Mood, StatsSnapshot, REFRESH_ACTION};
use crate::domain::traits::{InlineKeyboard, KeyboardButton};

/// Label on the refresh button
pub const REFRESH_LABEL: &str = "🔄 Refresh";

/// Text plus optional keyboard, ready to send or edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub text: String,
    pub keyboard: Option<InlineKeyboard>,
}

/// Renders stats and mood messages for one asset
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    asset_name: String,
    asset_ticker: String,
}

impl MessageFormatter {
    pub fn new(asset_name: impl Into<String>, asset_ticker: impl Into<String>) -> Self {
        Self {
            asset_name: asset_name.into(),
            asset_ticker: asset_ticker.into(),
        }
    }

    /// Full stats block with the refresh button attached
    pub fn format_stats(&self, s: &StatsSnapshot) -> RenderedMessage {
        let text = format!(
            "💰 <b>{} ({})</b>\n\
             • Price: <code>${:.4}</code>\n\
             • 24h High: <code>${:.4}</code>\n\
             • 24h Low: <code>${:.4}</code>\n\
             • 24h Change: <code>{}%</code>",
            self.asset_name,
            self.asset_ticker,
            s.price,
            s.high_24h,
            s.low_24h,
            signed_percent(s.change_percent_24h),
        );

        RenderedMessage {
            text,
            keyboard: Some(refresh_keyboard()),
        }
    }

    /// Mood headline and the change line. No button.
    pub fn format_mood(&self, s: &StatsSnapshot) -> RenderedMessage {
        let mood = Mood::classify(s.change_percent_24h);
        let text = format!(
            "{} <b>{} {}</b>\n\n24h Change: <code>{}%</code>",
            mood.emoji(),
            self.asset_ticker,
            mood.phrase(),
            signed_percent(s.change_percent_24h),
        );

        RenderedMessage { text, keyboard: None }
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new("Toncoin", "TON")
    }
}

/// The single-button keyboard attached to every stats message
pub fn refresh_keyboard() -> InlineKeyboard {
    InlineKeyboard::single(KeyboardButton::new(REFRESH_LABEL).with_callback(REFRESH_ACTION))
}

/// `+2.50`, `-3.10`. Anything that rounds to zero prints as `+0.00`.
fn signed_percent(value: f64) -> String {
    let formatted = format!("{:+.2}", value);
    if formatted == "-0.00" {
        return "+0.00".to_string();
    }
    formatted
}

//! Trigger handlers - One stateless reaction per inbound trigger
//!
//! Market failures never leave a handler: they become a short message to the
//! user (commands) or a transient callback answer (refresh). The `Err` a
//! handler returns is only ever a failure to deliver that reply.

pub mod help;
pub mod mood;
pub mod price;
pub mod refresh;

use async_trait::async_trait;

use crate::application::errors::BotError;
use crate::domain::entities::Message;
use crate::domain::traits::Bot;

pub use help::HelpHandler;
pub use mood::MoodHandler;
pub use price::PriceHandler;
pub use refresh::RefreshHandler;

/// Handler trait - reacts to one kind of inbound event
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, bot: &dyn Bot, message: &Message) -> Result<(), BotError>;
}

//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod message;
pub mod mood;
pub mod snapshot;

pub use command::{Command, CommandRegistry, Trigger, REFRESH_ACTION};
pub use message::{Content, Message};
pub use mood::Mood;
pub use snapshot::{NonFiniteField, StatsSnapshot};

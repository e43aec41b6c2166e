//! Message handling - Parsing, formatting and dispatching

pub mod dispatcher;
pub mod formatter;
pub mod parser;

pub use dispatcher::MessageDispatcher;
pub use formatter::{MessageFormatter, RenderedMessage};
pub use parser::MessageParser;

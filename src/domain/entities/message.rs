/// Message content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Command { name: String, args: Vec<String> },
    CallbackData(String),
    Empty,
}

/// An inbound event from the chat platform, reduced to what the handlers need
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub chat_id: i64,
    /// The message this event refers to. For button presses this is the
    /// message carrying the button.
    pub message_id: Option<i64>,
    /// Set only for button presses
    pub callback_id: Option<String>,
    pub sender: Option<String>,
    pub content: Content,
}

impl Message {
    pub fn new(chat_id: i64, content: Content) -> Self {
        Self {
            chat_id,
            message_id: None,
            callback_id: None,
            sender: None,
            content,
        }
    }

    pub fn from_text(chat_id: i64, text: impl Into<String>) -> Self {
        Self::new(chat_id, Content::Text(text.into()))
    }

    pub fn from_command(chat_id: i64, name: impl Into<String>, args: Vec<String>) -> Self {
        Self::new(chat_id, Content::Command { name: name.into(), args })
    }

    pub fn from_callback(chat_id: i64, callback_id: impl Into<String>, data: impl Into<String>) -> Self {
        let mut msg = Self::new(chat_id, Content::CallbackData(data.into()));
        msg.callback_id = Some(callback_id.into());
        msg
    }

    pub fn with_message_id(mut self, message_id: i64) -> Self {
        self.message_id = Some(message_id);
        self
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }
}

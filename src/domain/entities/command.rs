use std::collections::HashMap;

/// Callback data carried by the refresh button
pub const REFRESH_ACTION: &str = "refresh_price";

/// The kinds of inbound events the bot reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Price,
    Mood,
    Refresh,
    Help,
}

/// Represents a bot command
#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub aliases: Vec<String>,
    pub trigger: Trigger,
}

impl Command {
    pub fn new(name: impl Into<String>, trigger: Trigger) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            aliases: Vec::new(),
            trigger,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn matches(&self, input: &str) -> bool {
        self.name.eq_ignore_ascii_case(input)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(input))
    }
}

/// Command registry for the commands users can type
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry the bot ships with
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(
            Command::new("tonprice", Trigger::Price)
                .with_description("Show current price and 24h stats")
                .with_aliases(&["price"]),
        );
        registry.register(
            Command::new("tonmood", Trigger::Mood)
                .with_description("How is the market feeling today?")
                .with_aliases(&["mood"]),
        );
        registry.register(
            Command::new("help", Trigger::Help)
                .with_description("Show help message")
                .with_aliases(&["start"]),
        );
        registry
    }

    pub fn register(&mut self, command: Command) {
        let pos = self.commands.len();
        self.index.insert(command.name.to_lowercase(), pos);
        for alias in &command.aliases {
            self.index.insert(alias.to_lowercase(), pos);
        }
        self.commands.push(command);
    }

    pub fn find(&self, input: &str) -> Option<&Command> {
        self.index
            .get(&input.to_lowercase())
            .and_then(|&pos| self.commands.get(pos))
            .filter(|c| c.matches(input))
    }

    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

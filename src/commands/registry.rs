//! Ordered collection of the bot commands.

use crate::commands::{Parameters, command::BotCommand};

/// Commands known to the bot, in registration order.
///
/// Registration order is the dispatch priority: the first command whose
/// template matches wins. Commands are registered once at startup and only
/// read afterwards. Neither duplicates nor malformed templates are rejected.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<BotCommand>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        CommandRegistry {
            commands: Vec::new(),
        }
    }

    /// Appends `command` after the already registered ones.
    pub fn register(&mut self, command: BotCommand) {
        self.commands.push(command);
    }

    /// All commands, in registration order.
    pub fn all(&self) -> &[BotCommand] {
        &self.commands
    }

    /// First command matching `text`, with its captured parameters.
    pub fn find_match(&self, text: &str) -> Option<(&BotCommand, Parameters)> {
        self.commands
            .iter()
            .find_map(|command| command.matches(text).map(|parameters| (command, parameters)))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::commands::{CommandContext, CommandHandler};

    struct NamedHandler(&'static str);

    #[async_trait]
    impl CommandHandler for NamedHandler {
        async fn execute(&self, _context: &CommandContext<'_>) -> String {
            self.0.to_string()
        }
    }

    fn command(usage: &str) -> BotCommand {
        BotCommand::new(usage, usage, Box::new(NamedHandler("handler")))
    }

    #[test]
    fn test_register_keeps_order() {
        let mut registry = CommandRegistry::new();
        registry.register(command("Log summary <project_alias> <time>"));
        registry.register(command("Log detail <project_alias> <time>"));
        registry.register(command("help"));

        let usages: Vec<&str> = registry.all().iter().map(|c| c.usage()).collect();
        assert_eq!(
            usages,
            vec![
                "Log summary <project_alias> <time>",
                "Log detail <project_alias> <time>",
                "help"
            ]
        );
    }

    #[test]
    fn test_find_match_first_registered_wins() {
        let mut registry = CommandRegistry::new();
        registry.register(command("Log <kind> <project_alias>"));
        registry.register(command("Log summary <project_alias>"));

        let (matched, parameters) = registry.find_match("Log summary core").unwrap();

        assert_eq!(matched.usage(), "Log <kind> <project_alias>");
        assert_eq!(parameters.get("kind").unwrap(), "summary");
        assert_eq!(parameters.get("project_alias").unwrap(), "core");
    }

    #[test]
    fn test_find_match_skips_non_matching() {
        let mut registry = CommandRegistry::new();
        registry.register(command("Log summary <project_alias> <time>"));
        registry.register(command("Log detail <project_alias> <time>"));
        registry.register(command("help"));

        let (matched, parameters) = registry.find_match("Log detail core yesterday").unwrap();
        assert_eq!(matched.usage(), "Log detail <project_alias> <time>");
        assert_eq!(parameters.get("time").unwrap(), "yesterday");

        let (matched, _) = registry.find_match("help").unwrap();
        assert_eq!(matched.usage(), "help");
    }

    #[test]
    fn test_find_match_none() {
        let mut registry = CommandRegistry::new();
        registry.register(command("help"));

        assert!(registry.find_match("hello there").is_none());
        assert!(CommandRegistry::new().find_match("help").is_none());
    }

    #[test]
    fn test_register_accepts_duplicates() {
        let mut registry = CommandRegistry::new();
        registry.register(command("help"));
        registry.register(command("help"));

        assert_eq!(registry.all().len(), 2);
    }
}

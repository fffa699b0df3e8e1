//! Help command handler.
//!
//! Lists every registered command, in registration order, with its
//! description.

use async_trait::async_trait;
use log::debug;

use crate::commands::{CommandContext, CommandHandler, markdown_response::format_help};

/// Handler of the `help` command.
pub struct HelpHandler;

#[async_trait]
impl CommandHandler for HelpHandler {
    async fn execute(&self, context: &CommandContext<'_>) -> String {
        debug!("handling help command");
        format_help(context.commands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Parameters, command::BotCommand};

    #[tokio::test]
    async fn test_handle_help_lists_all_commands() {
        let commands = vec![
            BotCommand::new("Log detail <project_alias> <time>", "detail", Box::new(HelpHandler)),
            BotCommand::new("help", "help", Box::new(HelpHandler)),
        ];
        let parameters = Parameters::new();
        let context = CommandContext {
            text: "help",
            parameters: &parameters,
            commands: &commands,
        };

        let response = HelpHandler.execute(&context).await;

        assert!(response.contains("*Log* *detail* `project_alias` `time` - _detail_"));
        assert!(response.contains("*help* - _help_"));
        assert_eq!(response.lines().count(), 2);
    }
}

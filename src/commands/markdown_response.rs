//! Markdown response formatters for bot commands.
//!
//! Mattermost renders `*text*` as italic, `_text_` as italic and
//! `` `text` `` as code, which the help message uses to tell literal words
//! apart from parameters.

use crate::commands::command::BotCommand;

/// Formats the help message listing every registered command.
///
/// Literal words are rendered in italics, parameters as code, followed by the
/// command description:
///
/// ```text
/// *Log* *summary* `project_alias` `time` - _Show the log summary..._
/// ```
pub fn format_help(commands: &[BotCommand]) -> String {
    commands
        .iter()
        .map(|command| {
            let usage: String = command
                .tokens()
                .iter()
                .map(|token| {
                    if token.is_parameter {
                        format!("`{}` ", token.word)
                    } else {
                        format!("*{}* ", token.word)
                    }
                })
                .collect();
            format!("{}- _{}_\n", usage, command.description())
        })
        .collect()
}

/// Reply sent when no command matches the message.
pub fn format_not_understood(username: &str) -> String {
    format!("I don't understand you. Please type `@{} help`.", username)
}

/// Announcement posted to the log channel once the bot is listening.
pub fn format_started(display_name: &str) -> String {
    format!("_{} has **started** running_", display_name)
}

/// Announcement posted to the log channel when the bot shuts down.
pub fn format_stopped(display_name: &str) -> String {
    format!("_{} has **stopped** running_", display_name)
}

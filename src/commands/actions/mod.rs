//! Command action handlers.
//!
//! Individual [`CommandHandler`](crate::commands::CommandHandler)
//! implementations and the registration of the bot's commands.
//!
//! # Available Handlers
//!
//! - [`WorklogHandler`] - Summary and detail work-log reports
//! - [`HelpHandler`] - List of registered commands

use std::sync::Arc;

mod help;
mod worklog;

pub use crate::commands::actions::{
    help::HelpHandler,
    worklog::{ReportLayout, WorklogHandler},
};
use crate::{
    commands::{command::BotCommand, registry::CommandRegistry},
    worklog::Requester,
};

pub const LOG_SUMMARY_USAGE: &str = "Log summary <project_alias> <time>";
pub const LOG_DETAIL_USAGE: &str = "Log detail <project_alias> <time>";
pub const HELP_USAGE: &str = "help";

/// Builds the registry of the bot commands.
///
/// `help` is registered last so it never shadows another command.
pub fn register_commands(requester: Arc<dyn Requester>) -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register(BotCommand::new(
        LOG_SUMMARY_USAGE,
        "Show the log summary for project `project_alias` `last-week|this-week|yesterday|today|dd-mm-yyyy~dd-mm-yyyy`",
        Box::new(WorklogHandler::new(
            Arc::clone(&requester),
            ReportLayout::Summary,
        )),
    ));
    registry.register(BotCommand::new(
        LOG_DETAIL_USAGE,
        "Show the detail logwork with message for `project_alias` `last-week|this-week|yesterday|today|dd-mm-yyyy~dd-mm-yyyy`",
        Box::new(WorklogHandler::new(requester, ReportLayout::Detail)),
    ));
    registry.register(BotCommand::new(HELP_USAGE, "help", Box::new(HelpHandler)));

    registry
}

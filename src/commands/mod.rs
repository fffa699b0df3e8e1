//! Bot command matching, execution and response formatting.
//!
//! # Overview
//!
//! Commands are declared by a usage template mixing literal words and
//! `<parameter>` placeholders:
//!
//! | Template | Effect |
//! |----------|--------|
//! | `Log summary <project_alias> <time>` | Hour totals per member and project |
//! | `Log detail <project_alias> <time>` | Totals plus every individual entry |
//! | `help` | Lists the registered commands |
//!
//! # Architecture
//!
//! ```text
//! Chat message
//!      │
//!      ▼
//! ┌─────────────┐
//! │ Dispatcher  │  ← ignores own / unaddressed messages, strips mentions
//! └─────────────┘
//!      │
//!      ▼
//! ┌─────────────────┐
//! │ CommandRegistry │  ← templates in priority order, first match wins
//! └─────────────────┘
//!      │ Parameters
//!      ▼
//! ┌─────────────────────┐
//! │ CommandHandler      │
//! │  - WorklogHandler   │
//! │  - HelpHandler      │
//! └─────────────────────┘
//!      │
//!      ▼
//!    Reply
//! ```
//!
//! # Module Organization
//!
//! - [`token`] - Template tokenization
//! - [`command`] - Registered commands and template matching
//! - [`registry`] - Ordered command registry
//! - [`dispatcher`] - Message routing
//! - [`actions`] - Command handlers
//! - [`markdown_response`] - Response formatting utilities

use std::collections::HashMap;

use async_trait::async_trait;

mod actions;
mod command;
mod dispatcher;
mod markdown_response;
mod registry;
mod token;

pub use crate::commands::actions::register_commands;
pub use crate::commands::dispatcher::Dispatcher;
pub use crate::commands::markdown_response::{format_started, format_stopped};

use crate::commands::command::BotCommand;

/// Parameter values captured by a template match, indexed by parameter name.
pub type Parameters = HashMap<String, String>;

/// A chat message received by the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    /// Chat user id of the author
    pub author_id: String,
    /// Raw message text
    pub text: String,
    /// Channel the message was posted in
    pub channel_id: String,
    /// Id of the message, used to thread the reply
    pub message_id: String,
}

/// Reply produced for an [`IncomingMessage`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Markdown text to post
    pub text: String,
    /// Id of the message the reply is threaded to
    pub reply_to: String,
    /// Channel to post in
    pub channel_id: String,
}

/// Runtime context handed to a [`CommandHandler`].
pub struct CommandContext<'a> {
    /// Message text, mentions removed
    pub text: &'a str,
    /// Parameters captured by the template
    pub parameters: &'a Parameters,
    /// Every registered command, in registration order
    pub commands: &'a [BotCommand],
}

/// Produces the reply of a matched command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn execute(&self, context: &CommandContext<'_>) -> String;
}

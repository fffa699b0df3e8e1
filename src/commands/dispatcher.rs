//! Message dispatching.
//!
//! This module provides the [`Dispatcher`], the entry point for every chat
//! message. It decides whether the bot is addressed, matches the message
//! against the registered commands and produces the reply.
//!
//! # Flow
//!
//! ```text
//! IncomingMessage → is_for_bot() → strip_mentions() → CommandRegistry::find_match() → execute() → Reply
//! ```

use log::{debug, info};
use regex::Regex;

use crate::commands::{
    CommandContext, IncomingMessage, Reply, markdown_response::format_not_understood,
    registry::CommandRegistry,
};

/// Anything but an ASCII word character.
const NOT_WORD: &str = "[^0-9A-Za-z_]";
/// Punctuation glued to a mention, like `@` or a trailing `:`.
const GLUED: &str = r"[^\s0-9A-Za-z_]*";

/// Routes chat messages to the registered commands.
///
/// The dispatcher only reads its registry, so one instance can be shared by
/// every in-flight message.
pub struct Dispatcher {
    /// Registered commands, in priority order
    registry: CommandRegistry,
    /// Chat user id of the bot, to ignore its own messages
    bot_user_id: String,
    /// Chat username of the bot, without `@`
    bot_username: String,
    /// Bot username as a standalone word
    mention: Regex,
    /// Bot username with its glued punctuation and both boundaries
    glued_mention: Regex,
}

impl Dispatcher {
    pub fn new(
        registry: CommandRegistry,
        bot_user_id: &str,
        bot_username: &str,
    ) -> Result<Self, regex::Error> {
        let name = regex::escape(bot_username);
        let mention = Regex::new(&format!("(?:^|{NOT_WORD}){name}(?:$|{NOT_WORD})"))?;
        let glued_mention =
            Regex::new(&format!("(?:^|{NOT_WORD}){GLUED}{name}{GLUED}(?:$|{NOT_WORD})"))?;

        Ok(Dispatcher {
            registry,
            bot_user_id: bot_user_id.to_owned(),
            bot_username: bot_username.to_owned(),
            mention,
            glued_mention,
        })
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Returns `true` when `text` mentions the bot username as a standalone word.
    ///
    /// Only ASCII letters, digits and `_` count as word characters.
    pub fn mentions_bot(&self, text: &str) -> bool {
        !self.bot_username.is_empty() && self.mention.is_match(text)
    }

    /// Removes every mention of the bot from `text` and normalizes the spacing.
    ///
    /// Punctuation glued to a mention goes with it: `@mr_kofi:`, `(@mr_kofi)`
    /// and `mr_kofi!` are all removed.
    pub fn strip_mentions(&self, text: &str) -> String {
        let mut stripped = text.to_owned();
        if !self.bot_username.is_empty() {
            // a match eats the boundary of the next one, so repeat
            while self.glued_mention.is_match(&stripped) {
                stripped = self
                    .glued_mention
                    .replace_all(&stripped, " ")
                    .into_owned();
            }
        }
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Returns `true` when the message must be answered.
    ///
    /// Messages written by the bot itself and messages not mentioning the bot
    /// are ignored.
    pub fn is_for_bot(&self, message: &IncomingMessage) -> bool {
        if message.author_id == self.bot_user_id {
            debug!("ignore own message {}", message.message_id);
            return false;
        }
        if !self.mentions_bot(&message.text) {
            debug!("ignore message {}, bot not mentioned", message.message_id);
            return false;
        }
        true
    }

    /// Handles one message.
    ///
    /// Returns `None` when the message is not for the bot. Otherwise the
    /// first matching command is executed and its output is returned as a
    /// reply threaded to the message, or a fixed fallback is returned when no
    /// command matches.
    pub async fn dispatch(&self, message: &IncomingMessage) -> Option<Reply> {
        if !self.is_for_bot(message) {
            return None;
        }

        let text = self.strip_mentions(message.text.trim());
        debug!("dispatch message {}: '{}'", message.message_id, text);

        let response = match self.registry.find_match(&text) {
            Some((command, parameters)) => {
                info!("message {} matched '{}'", message.message_id, command.usage());
                let context = CommandContext {
                    text: &text,
                    parameters: &parameters,
                    commands: self.registry.all(),
                };
                command.execute(&context).await
            }
            None => {
                info!("message {} matched no command", message.message_id);
                format_not_understood(&self.bot_username)
            }
        };

        Some(Reply {
            text: response,
            reply_to: message.message_id.clone(),
            channel_id: message.channel_id.clone(),
        })
    }
}

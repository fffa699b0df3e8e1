//! Registered bot commands and template matching.
//!
//! A [`BotCommand`] pairs a usage template with a description and a
//! [`CommandHandler`]. [`match_tokens`] decides whether a message invokes a
//! template and captures its parameters.

use std::fmt;

use log::debug;

use crate::commands::{
    CommandContext, CommandHandler, Parameters,
    token::{Token, tokenize},
};

/// A command the bot answers to.
///
/// Tokens are computed once, when the command is created.
pub struct BotCommand {
    usage: String,
    description: String,
    tokens: Vec<Token>,
    handler: Box<dyn CommandHandler>,
}

impl fmt::Debug for BotCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("BotCommand")
            .field("usage", &self.usage)
            .field("description", &self.description)
            .finish()
    }
}

impl BotCommand {
    /// Creates a command from its usage template.
    ///
    /// # Arguments
    ///
    /// * `usage` - Template, e.g. `"Log summary <project_alias> <time>"`
    /// * `description` - Text shown by the `help` command
    /// * `handler` - Produces the reply when the template matches
    pub fn new(usage: &str, description: &str, handler: Box<dyn CommandHandler>) -> Self {
        BotCommand {
            usage: usage.to_owned(),
            description: description.to_owned(),
            tokens: tokenize(usage),
            handler,
        }
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Matches `text` against this command's template.
    pub fn matches(&self, text: &str) -> Option<Parameters> {
        match_tokens(&self.tokens, text)
    }

    /// Runs the handler and returns its reply.
    pub async fn execute(&self, context: &CommandContext<'_>) -> String {
        debug!("execute command '{}' with {:?}", self.usage, context.parameters);
        self.handler.execute(context).await
    }
}

/// Matches `text` against `tokens`.
///
/// Input words are compared positionally with the tokens:
///
/// - a literal token must equal its word exactly (case-sensitive)
/// - a parameter token captures one word
/// - a trailing parameter token captures every remaining word, joined by single
///   spaces, and may be left out entirely (it is then absent from the result)
///
/// Extra words after a trailing literal token make the match fail. No partial
/// parameters are returned on failure.
pub fn match_tokens(tokens: &[Token], text: &str) -> Option<Parameters> {
    let words: Vec<&str> = text.split_whitespace().collect();

    let literal_count = tokens.iter().filter(|t| !t.is_parameter).count();
    if words.len() < literal_count {
        return None;
    }

    let mut parameters = Parameters::new();

    for (index, token) in tokens.iter().enumerate() {
        let is_last = index + 1 == tokens.len();

        if token.is_parameter && is_last {
            if index < words.len() {
                parameters.insert(token.word.clone(), words[index..].join(" "));
            }
            return Some(parameters);
        }

        let word = words.get(index)?;
        if token.is_parameter {
            parameters.insert(token.word.clone(), word.to_string());
        } else if token.word != *word {
            return None;
        }
    }

    // The template ends with a literal: the input must not be longer
    if words.len() > tokens.len() {
        return None;
    }

    Some(parameters)
}

//! Mattermost integration for the bot.
//!
//! This module provides a small Mattermost client with support for:
//! - Login and bot profile updates
//! - Finding or creating the bot log channel
//! - Posting threaded replies
//! - Listening to posted messages over the websocket
//!
//! # Architecture
//!
//! The module is structured around the [`MattermostClient`] which coordinates:
//! - **Api**: REST calls against the v4 API via the api submodule
//! - **Sync**: Websocket listening and event parsing via the sync submodule
//!
//! # Usage
//!
//! ```text
//! let client = MattermostClient::new("https://chat.example.com", &account).await?;
//! client.send_message("hello", "", "").await;
//! client.sync(|message| { /* handle message */ }).await;
//! ```

mod api;
mod client;
mod structs;
mod sync;

pub use crate::mattermost::client::MattermostClient;

/// Credentials and profile of the bot account.
#[derive(Debug, Clone)]
pub struct BotAccount {
    /// Login id, an email or a username
    pub login_id: String,
    /// Account password
    pub password: String,
    /// Username the bot must have, without `@`
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Name of the team the bot lives in
    pub team_name: String,
    /// Name of the channel receiving the bot lifecycle messages
    pub log_channel: String,
}

/// Identity of the logged in bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotSession {
    /// User id of the bot
    pub user_id: String,
    /// Username of the bot, without `@`
    pub username: String,
    /// Id of the log channel, `None` if it could not be found nor created
    pub log_channel_id: Option<String>,
}

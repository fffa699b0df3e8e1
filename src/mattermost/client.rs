//! Mattermost client wrapper for bot messaging and synchronization.
//!
//! This module provides a high-level [`MattermostClient`] that performs the
//! bot's startup sequence and exposes message sending and event listening.

use anyhow::{Context, Result};
use log::{error, info, warn};

use crate::commands::IncomingMessage;
use crate::mattermost::{
    BotAccount, BotSession,
    api::MattermostApi,
    structs::{NewChannel, NewPost, User, UserPatch},
    sync::MattermostSync,
};

/// High-level Mattermost client for bot messaging operations.
pub struct MattermostClient {
    /// REST client, authenticated as the bot
    api: MattermostApi,
    /// Identity of the bot resolved at startup
    session: BotSession,
}

impl MattermostClient {
    /// Connects to the Mattermost server and prepares the bot account.
    ///
    /// This method performs the complete initialization workflow:
    /// 1. Pings the server
    /// 2. Logs in as the bot user
    /// 3. Updates the bot profile if its names differ from the configuration
    /// 4. Finds the bot team
    /// 5. Finds the log channel of the team, creating it when missing
    ///
    /// # Errors
    ///
    /// Returns an error if the server is unreachable, the login fails, the
    /// profile cannot be updated or the team does not exist. A missing log
    /// channel that cannot be created is only logged.
    pub async fn new(url: &str, account: &BotAccount) -> Result<Self> {
        let mut api = MattermostApi::new(url);

        api.ping()
            .await
            .context("there was a problem pinging the mattermost server")?;
        info!("server detected at {}", api.url());

        let user = api
            .login(&account.login_id, &account.password)
            .await
            .context("there was a problem logging into the mattermost server")?;

        let user = Self::update_user_if_needed(&api, user, account).await?;

        let team = api
            .get_team_by_name(&account.team_name)
            .await
            .with_context(|| format!("failed to find team '{}'", account.team_name))?;

        let log_channel_id = Self::find_or_create_log_channel(&api, &team.id, account).await;

        Ok(MattermostClient {
            api,
            session: BotSession {
                user_id: user.id,
                username: user.username,
                log_channel_id,
            },
        })
    }

    async fn update_user_if_needed(
        api: &MattermostApi,
        user: User,
        account: &BotAccount,
    ) -> Result<User> {
        if user.username == account.username
            && user.first_name == account.first_name
            && user.last_name == account.last_name
        {
            return Ok(user);
        }

        let patch = UserPatch {
            username: account.username.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
        };
        let user = api
            .patch_user(&user.id, &patch)
            .await
            .context("failed to update the bot user")?;
        info!("updated the bot account settings");

        Ok(user)
    }

    async fn find_or_create_log_channel(
        api: &MattermostApi,
        team_id: &str,
        account: &BotAccount,
    ) -> Option<String> {
        match api.get_channel_by_name(team_id, &account.log_channel).await {
            Ok(channel) => return Some(channel.id),
            Err(e) => warn!("failed to get channel {}: {}", account.log_channel, e),
        }

        let new_channel = NewChannel {
            team_id: team_id.to_string(),
            name: account.log_channel.clone(),
            display_name: format!("{} channel", account.first_name),
            purpose: "Bot debug messages".to_string(),
            channel_type: "O".to_string(),
        };
        match api.create_channel(&new_channel).await {
            Ok(channel) => {
                info!("created the log channel {}", account.log_channel);
                Some(channel.id)
            }
            Err(e) => {
                error!("failed to create the channel {}: {}", account.log_channel, e);
                None
            }
        }
    }

    pub fn session(&self) -> &BotSession {
        &self.session
    }

    /// Posts `message` in `channel_id`, threaded under `reply_to` when not empty.
    ///
    /// An empty `channel_id` targets the log channel. Failures are logged and
    /// never retried.
    pub async fn send_message(&self, message: &str, reply_to: &str, channel_id: &str) {
        let channel_id = match (channel_id.is_empty(), &self.session.log_channel_id) {
            (false, _) => channel_id.to_string(),
            (true, Some(log_channel_id)) => log_channel_id.clone(),
            (true, None) => {
                warn!("no channel to send the message to");
                return;
            }
        };

        let post = NewPost {
            channel_id,
            message: message.to_string(),
            root_id: reply_to.to_string(),
        };
        if let Err(e) = self.api.create_post(&post).await {
            error!("failed to send a message to {}: {}", post.channel_id, e);
        }
    }

    /// Listens to the websocket and calls `on_message` for every posted message.
    ///
    /// Runs until the process is terminated.
    pub async fn sync<F>(&self, on_message: F)
    where
        F: Fn(IncomingMessage) + Send + Sync + 'static,
    {
        MattermostSync::new(&self.api.websocket_url(), self.api.token())
            .sync(on_message)
            .await
    }
}

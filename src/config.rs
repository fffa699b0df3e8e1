//! Configuration file structures for the Kofi bot.
//!
//! The configuration is read from a YAML file and can be overridden with
//! environment variables prefixed by `KOFI_`, sections being separated by
//! `__` (e.g. `KOFI_MATTERMOST__PASSWORD`).
//!
//! # Configuration File Format
//!
//! ```yaml
//! mattermost:
//!   url: "https://chat.example.com"
//!   login_id: "kofi@example.com"
//!   password: "secret-password"
//!   team_name: "geek-up"
//!   log_channel: "mr_kofi_bot_channel"
//!   username: "mr_kofi"
//!   first_name: "Kofi"
//!   last_name: "Bot"
//!
//! worklog:
//!   url: "https://worklog.example.com/api/export"
//!
//! bot:
//!   display_name: "Mr Kofi"
//!   max_concurrent_requests: 4
//! ```

use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

use crate::mattermost::BotAccount;

const ENV_PREFIX: &str = "KOFI_";

/// Root configuration structure.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Mattermost server and bot account settings
    pub mattermost: Mattermost,
    /// Work-log API settings
    pub worklog: Worklog,
    /// Bot behaviour settings
    #[serde(default)]
    pub bot: BotSettings,
}

/// Mattermost server and bot account configuration.
#[derive(Debug, Deserialize)]
pub struct Mattermost {
    /// Base URL of the Mattermost server, e.g. `https://chat.example.com`.
    pub url: String,
    pub login_id: String,
    pub password: String,
    /// Team the bot belongs to.
    pub team_name: String,
    /// Channel receiving the lifecycle messages, created when missing.
    #[serde(default = "default_log_channel")]
    pub log_channel: String,
    /// Username the bot profile is updated to, without `@`.
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Work-log API configuration.
#[derive(Debug, Deserialize)]
pub struct Worklog {
    /// Export endpoint, queried with `start`, `stop` and `project_alias`.
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct BotSettings {
    /// Name used in the start and stop announcements.
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Maximum number of commands handled at the same time.
    #[serde(default = "default_max_concurrent_requests")]
    pub max_concurrent_requests: usize,
}

impl Default for BotSettings {
    fn default() -> Self {
        BotSettings {
            display_name: default_display_name(),
            max_concurrent_requests: default_max_concurrent_requests(),
        }
    }
}

fn default_log_channel() -> String {
    "mr_kofi_bot_channel".to_string()
}

fn default_display_name() -> String {
    "Mr Kofi".to_string()
}

fn default_max_concurrent_requests() -> usize {
    4
}

impl Config {
    /// Loads the configuration from `path`, then applies the `KOFI_`
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or a required value is
    /// missing from both the file and the environment.
    pub fn load(path: &str) -> Result<Config> {
        let mut config: Config = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.normalize();
        Ok(config)
    }

    fn normalize(&mut self) {
        self.mattermost.url = self.mattermost.url.trim_end_matches('/').to_string();
        self.worklog.url = self.worklog.url.trim_end_matches('/').to_string();
        if self.bot.max_concurrent_requests == 0 {
            self.bot.max_concurrent_requests = 1;
        }
    }
}

impl Mattermost {
    pub fn account(&self) -> BotAccount {
        BotAccount {
            login_id: self.login_id.clone(),
            password: self.password.clone(),
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            team_name: self.team_name.clone(),
            log_channel: self.log_channel.clone(),
        }
    }
}

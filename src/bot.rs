//! Bot wiring and lifecycle.
//!
//! [`Bot::new`] connects to Mattermost and registers the commands, then
//! [`Bot::start`] runs the bot:
//!
//! ```text
//! startup → "started" announcement → websocket sync ─┬→ message task → reply
//!                                                    └→ message task → reply
//! Ctrl-C → "stopped" announcement → exit
//! ```
//!
//! Every received message is handled in its own task. At most
//! `bot.max_concurrent_requests` of them run a command at the same time.

use std::sync::Arc;

use log::{debug, info, warn};
use tokio::sync::Semaphore;

use crate::{
    commands::{Dispatcher, IncomingMessage, format_started, format_stopped, register_commands},
    config::Config,
    mattermost::MattermostClient,
    worklog::WorkLogRequester,
};

struct MessageContext {
    message: IncomingMessage,
    client: Arc<MattermostClient>,
    dispatcher: Arc<Dispatcher>,
    semaphore: Arc<Semaphore>,
}

pub struct Bot {
    client: Arc<MattermostClient>,

    dispatcher: Arc<Dispatcher>,

    /// Bounds the number of commands handled at the same time
    semaphore: Arc<Semaphore>,

    display_name: String,
}

impl Bot {
    pub async fn new(config: Config) -> Result<Self, anyhow::Error> {
        let client = Arc::new(
            MattermostClient::new(&config.mattermost.url, &config.mattermost.account()).await?,
        );

        let requester = Arc::new(WorkLogRequester::new(&config.worklog.url));
        let session = client.session();
        let dispatcher = Arc::new(Dispatcher::new(
            register_commands(requester),
            &session.user_id,
            &session.username,
        )?);
        info!(
            "{} commands registered for @{}",
            dispatcher.registry().all().len(),
            session.username
        );

        Ok(Bot {
            client,
            dispatcher,
            semaphore: Arc::new(Semaphore::new(config.bot.max_concurrent_requests)),
            display_name: config.bot.display_name,
        })
    }

    pub async fn start(self) {
        self.client
            .send_message(&format_started(&self.display_name), "", "")
            .await;

        self.start_shutdown_task();

        let client = Arc::clone(&self.client);
        let dispatcher = Arc::clone(&self.dispatcher);
        let semaphore = Arc::clone(&self.semaphore);

        let on_message = move |message: IncomingMessage| {
            Self::handle_message(MessageContext {
                message,
                client: Arc::clone(&client),
                dispatcher: Arc::clone(&dispatcher),
                semaphore: Arc::clone(&semaphore),
            })
        };

        self.client.sync(on_message).await;
    }

    /// Announces the shutdown in the log channel on Ctrl-C, then exits.
    fn start_shutdown_task(&self) {
        let client = Arc::clone(&self.client);
        let display_name = self.display_name.clone();

        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for the shutdown signal: {}", e);
                return;
            }
            info!("shutting down");
            client
                .send_message(&format_stopped(&display_name), "", "")
                .await;
            std::process::exit(0);
        });
    }

    fn handle_message(ctx: MessageContext) {
        tokio::spawn(async move {
            // Return silently if the message is not for the bot
            if !ctx.dispatcher.is_for_bot(&ctx.message) {
                return;
            }

            let Ok(_permit) = ctx.semaphore.acquire().await else {
                warn!("request limiter closed, drop message {}", ctx.message.message_id);
                return;
            };

            let Some(reply) = ctx.dispatcher.dispatch(&ctx.message).await else {
                return;
            };
            debug!("reply to {} in {}", reply.reply_to, reply.channel_id);

            ctx.client
                .send_message(&reply.text, &reply.reply_to, &reply.channel_id)
                .await;
        });
    }
}

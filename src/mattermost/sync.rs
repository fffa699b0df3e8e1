//! Mattermost websocket listening and event handling.
//!
//! [`MattermostSync::sync`] opens the websocket, authenticates with the
//! session token and forwards every `posted` event to a callback. A dropped
//! connection is reopened after [`RECONNECT_DELAY`].

use futures::{SinkExt, StreamExt};
use log::{debug, error, info, warn};
use tokio::time::{Duration, sleep};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::commands::IncomingMessage;
use crate::mattermost::structs::{Post, WebSocketEvent};

/// Delay before reopening a closed websocket.
pub const RECONNECT_DELAY: Duration = Duration::from_secs(5);

const POSTED_EVENT: &str = "posted";

/// Listens to the Mattermost websocket.
pub struct MattermostSync {
    /// Websocket endpoint, `ws://` or `wss://`
    websocket_url: String,
    /// Session token used for the authentication challenge
    token: String,
}

impl MattermostSync {
    pub fn new(websocket_url: &str, token: &str) -> Self {
        MattermostSync {
            websocket_url: websocket_url.to_owned(),
            token: token.to_owned(),
        }
    }

    fn authentication_challenge(&self) -> String {
        serde_json::json!({
            "seq": 1,
            "action": "authentication_challenge",
            "data": { "token": self.token },
        })
        .to_string()
    }

    /// Enters the listening loop. Never returns.
    ///
    /// # Arguments
    ///
    /// * `on_message` - Callback invoked for each message posted in a channel
    ///   the bot can read.
    pub async fn sync<F>(&self, on_message: F)
    where
        F: Fn(IncomingMessage) + Send + Sync + 'static,
    {
        info!("start listening to {}", self.websocket_url);

        loop {
            match connect_async(self.websocket_url.as_str()).await {
                Ok((mut ws_stream, _)) => {
                    info!("websocket connected");

                    if let Err(e) = ws_stream
                        .send(Message::text(self.authentication_challenge()))
                        .await
                    {
                        error!("failed to authenticate the websocket: {}", e);
                    } else {
                        while let Some(frame) = ws_stream.next().await {
                            match frame {
                                Ok(Message::Text(text)) => {
                                    if let Some(message) = parse_event(text.as_str()) {
                                        on_message(message);
                                    }
                                }
                                Ok(Message::Close(_)) => {
                                    info!("websocket closed by the server");
                                    break;
                                }
                                Ok(_) => {}
                                Err(e) => {
                                    error!("websocket error: {}", e);
                                    break;
                                }
                            }
                        }
                    }
                }
                Err(e) => warn!("websocket connection error: {}", e),
            }

            info!("reconnecting in {}s", RECONNECT_DELAY.as_secs());
            sleep(RECONNECT_DELAY).await;
        }
    }
}

/// Extracts the posted message from a raw websocket frame.
///
/// Returns `None` for any other event or for a malformed payload.
pub fn parse_event(raw: &str) -> Option<IncomingMessage> {
    let event: WebSocketEvent = match serde_json::from_str(raw) {
        Ok(event) => event,
        Err(e) => {
            debug!("ignore websocket frame: {}", e);
            return None;
        }
    };

    if event.event != POSTED_EVENT {
        return None;
    }

    let post = event.data.get("post")?.as_str()?;
    let post: Post = match serde_json::from_str(post) {
        Ok(post) => post,
        Err(e) => {
            warn!("failed to parse posted message: {}", e);
            return None;
        }
    };

    Some(IncomingMessage {
        author_id: post.user_id,
        text: post.message,
        channel_id: post.channel_id,
        message_id: post.id,
    })
}

//! Mattermost v4 API payloads used by the bot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Mattermost user account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Body of `PUT /api/v4/users/{id}/patch`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPatch {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// A Mattermost team.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

/// A Mattermost channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

/// Body of `POST /api/v4/channels`.
#[derive(Debug, Clone, Serialize)]
pub struct NewChannel {
    pub team_id: String,
    pub name: String,
    pub display_name: String,
    pub purpose: String,
    /// `O` for an open channel
    #[serde(rename = "type")]
    pub channel_type: String,
}

/// A message posted in a channel.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Post {
    pub id: String,
    pub channel_id: String,
    pub user_id: String,
    pub message: String,
    /// Id of the thread root, empty for a root post
    #[serde(default)]
    pub root_id: String,
}

/// Body of `POST /api/v4/posts`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub channel_id: String,
    pub message: String,
    pub root_id: String,
}

/// An event pushed on the websocket.
///
/// For `posted` events, `data.post` holds the [`Post`] serialized as a JSON
/// string.
#[derive(Debug, Clone, Deserialize)]
pub struct WebSocketEvent {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub data: HashMap<String, Value>,
}

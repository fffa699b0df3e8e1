//! HTTP client for the Mattermost v4 REST API.
//!
//! This module provides the [`MattermostApi`] struct, a thin wrapper over the
//! few endpoints the bot needs. Authenticated calls use the session token
//! returned by [`MattermostApi::login`].

use log::{debug, info};
use reqwest::{Client, Error};

use crate::mattermost::structs::{Channel, NewChannel, NewPost, Post, Team, User, UserPatch};

/// Raw Mattermost REST client.
pub struct MattermostApi {
    /// Server base url, without trailing slash
    url: String,
    /// Session token, set by a successful login
    token: String,
    /// HTTP client
    client: Client,
}

impl MattermostApi {
    /// Create a new, unauthenticated [MattermostApi].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the Mattermost server, e.g. `https://chat.example.com`.
    pub fn new(url: &str) -> Self {
        MattermostApi {
            url: url.trim_end_matches('/').to_string(),
            token: String::new(),
            client: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Websocket endpoint derived from the server url.
    pub fn websocket_url(&self) -> String {
        let ws_base = if let Some(rest) = self.url.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = self.url.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            self.url.clone()
        };
        format!("{}/api/v4/websocket", ws_base)
    }

    /// Request `GET /api/v4/system/ping` to check the server is up.
    pub async fn ping(&self) -> Result<(), Error> {
        let url = format!("{}/api/v4/system/ping", &self.url);
        debug!("request {}", &url);

        self.client.get(&url).send().await?.error_for_status()?;
        Ok(())
    }

    /// Request `POST /api/v4/users/login` and keep the returned session token.
    ///
    /// The token is read from the `Token` response header.
    pub async fn login(&mut self, login_id: &str, password: &str) -> Result<User, Error> {
        let url = format!("{}/api/v4/users/login", &self.url);
        info!("login as {}", login_id);

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "login_id": login_id, "password": password }))
            .send()
            .await?
            .error_for_status()?;

        self.token = response
            .headers()
            .get("Token")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let user: User = response.json().await?;
        debug!("logged in as {:?}", &user);

        Ok(user)
    }

    /// Request `PUT /api/v4/users/{id}/patch` to update the profile.
    pub async fn patch_user(&self, user_id: &str, patch: &UserPatch) -> Result<User, Error> {
        let url = format!("{}/api/v4/users/{}/patch", &self.url, user_id);
        debug!("request {} -> {:?}", &url, patch);

        self.client
            .put(&url)
            .bearer_auth(&self.token)
            .json(patch)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Request `GET /api/v4/teams/name/{name}`.
    pub async fn get_team_by_name(&self, name: &str) -> Result<Team, Error> {
        let url = format!("{}/api/v4/teams/name/{}", &self.url, name);
        debug!("request {}", &url);

        self.client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Request `GET /api/v4/teams/{team_id}/channels/name/{name}`.
    pub async fn get_channel_by_name(&self, team_id: &str, name: &str) -> Result<Channel, Error> {
        let url = format!(
            "{}/api/v4/teams/{}/channels/name/{}",
            &self.url, team_id, name
        );
        debug!("request {}", &url);

        self.client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Request `POST /api/v4/channels`.
    pub async fn create_channel(&self, channel: &NewChannel) -> Result<Channel, Error> {
        let url = format!("{}/api/v4/channels", &self.url);
        debug!("request {} -> {:?}", &url, channel);

        self.client
            .post(&url)
            .bearer_auth(&self.token)
            .json(channel)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// Request `POST /api/v4/posts`.
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, Error> {
        let url = format!("{}/api/v4/posts", &self.url);
        debug!("request {} -> {:?}", &url, post);

        self.client
            .post(&url)
            .bearer_auth(&self.token)
            .json(post)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_BODY: &str =
        r#"{"id": "bot1", "username": "mr_kofi", "first_name": "Kofi", "last_name": "Bot"}"#;

    async fn logged_in_api(server: &mut mockito::Server) -> MattermostApi {
        server
            .mock("POST", "/api/v4/users/login")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("Token", "session-token")
            .with_body(USER_BODY)
            .create_async()
            .await;

        let mut api = MattermostApi::new(&server.url());
        api.login("bot@example.com", "secret").await.unwrap();
        api
    }

    #[test]
    fn test_websocket_url() {
        assert_eq!(
            MattermostApi::new("https://chat.example.com/").websocket_url(),
            "wss://chat.example.com/api/v4/websocket"
        );
        assert_eq!(
            MattermostApi::new("http://localhost:8065").websocket_url(),
            "ws://localhost:8065/api/v4/websocket"
        );
    }

    #[tokio::test]
    async fn test_ping() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v4/system/ping")
            .with_status(200)
            .with_body(r#"{"status": "OK"}"#)
            .create_async()
            .await;

        let api = MattermostApi::new(&server.url());
        assert!(api.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_ping_server_down() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/v4/system/ping")
            .with_status(503)
            .create_async()
            .await;

        let api = MattermostApi::new(&server.url());
        assert!(api.ping().await.is_err());
    }

    #[tokio::test]
    async fn test_login_keeps_token() {
        let mut server = mockito::Server::new_async().await;
        let login_mock = server
            .mock("POST", "/api/v4/users/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "login_id": "bot@example.com",
                "password": "secret"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("Token", "session-token")
            .with_body(USER_BODY)
            .create_async()
            .await;

        let mut api = MattermostApi::new(&server.url());
        let user = api.login("bot@example.com", "secret").await.unwrap();

        login_mock.assert_async().await;
        assert_eq!(user.id, "bot1");
        assert_eq!(user.username, "mr_kofi");
        assert_eq!(api.token(), "session-token");
    }

    #[tokio::test]
    async fn test_login_invalid_credentials() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/v4/users/login")
            .with_status(401)
            .create_async()
            .await;

        let mut api = MattermostApi::new(&server.url());
        assert!(api.login("bot@example.com", "wrong").await.is_err());
        assert!(api.token().is_empty());
    }

    #[tokio::test]
    async fn test_get_team_by_name_uses_token() {
        let mut server = mockito::Server::new_async().await;
        let api = logged_in_api(&mut server).await;
        server
            .mock("GET", "/api/v4/teams/name/geek-up")
            .match_header("authorization", "Bearer session-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": "team1", "name": "geek-up"}"#)
            .create_async()
            .await;

        let team = api.get_team_by_name("geek-up").await.unwrap();
        assert_eq!(team.id, "team1");
    }

    #[tokio::test]
    async fn test_create_post() {
        let mut server = mockito::Server::new_async().await;
        let api = logged_in_api(&mut server).await;
        let post_mock = server
            .mock("POST", "/api/v4/posts")
            .match_header("authorization", "Bearer session-token")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "channel_id": "channel1",
                "message": "hello",
                "root_id": "post0"
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"id": "post1", "channel_id": "channel1", "user_id": "bot1", "message": "hello", "root_id": "post0"}"#,
            )
            .create_async()
            .await;

        let post = api
            .create_post(&NewPost {
                channel_id: "channel1".to_string(),
                message: "hello".to_string(),
                root_id: "post0".to_string(),
            })
            .await
            .unwrap();

        post_mock.assert_async().await;
        assert_eq!(post.id, "post1");
        assert_eq!(post.root_id, "post0");
    }
}

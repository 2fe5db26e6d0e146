use crate::core::{ConfigProvider, GameBackend, GameId, PlayerProfile};
use crate::domain::model::{SetupRequest, SetupResponse};
use crate::utils::error::{LauncherError, Result};
use reqwest::Client;

/// `GameBackend` over HTTP: one `POST {http_endpoint}/setup` per game.
pub struct SetupClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> SetupClient<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn setup_url(&self) -> String {
        format!("{}/setup", self.config.http_endpoint().trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> GameBackend for SetupClient<C> {
    async fn setup_game(&self, profile: &PlayerProfile) -> Result<GameId> {
        let url = self.setup_url();
        let body = SetupRequest::from(profile);

        tracing::debug!("Making setup request to: {}", url);
        let mut request = self.client.post(&url).json(&body);
        if let Some(timeout) = self.config.request_timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Setup response status: {}", status);

        if !status.is_success() {
            return Err(LauncherError::SetupFailed {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let parsed: SetupResponse = serde_json::from_slice(&bytes)?;
        let game_id = parsed.into_game_id()?;

        tracing::info!("Game {} created for {}", game_id, profile.name);
        Ok(game_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    struct MockConfig {
        http_endpoint: String,
    }

    impl MockConfig {
        fn new(http_endpoint: String) -> Self {
            Self { http_endpoint }
        }
    }

    impl ConfigProvider for MockConfig {
        fn http_endpoint(&self) -> &str {
            &self.http_endpoint
        }

        fn ws_endpoint(&self) -> &str {
            "ws://localhost"
        }

        fn request_timeout(&self) -> Option<Duration> {
            Some(Duration::from_secs(5))
        }
    }

    #[test]
    fn test_setup_url_ignores_trailing_slash() {
        let client = SetupClient::new(MockConfig::new("http://localhost:8080/".to_string()));
        assert_eq!(client.setup_url(), "http://localhost:8080/setup");
    }

    #[tokio::test]
    async fn test_setup_posts_profile_and_reads_game_id() {
        let server = MockServer::start();

        let setup_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/setup")
                .json_body(serde_json::json!({"name": "Magnus", "elo": 2850}));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"gameId": "abc-123"}));
        });

        let client = SetupClient::new(MockConfig::new(server.base_url()));
        let game_id = client
            .setup_game(&PlayerProfile::new("Magnus", 2850))
            .await
            .unwrap();

        setup_mock.assert_hits(1);
        assert_eq!(game_id.as_str(), "abc-123");
    }

    #[tokio::test]
    async fn test_setup_server_error() {
        let server = MockServer::start();

        let setup_mock = server.mock(|when, then| {
            when.method(POST).path("/setup");
            then.status(500)
                .json_body(serde_json::json!({"error": "Internal server error."}));
        });

        let client = SetupClient::new(MockConfig::new(server.base_url()));
        let result = client.setup_game(&PlayerProfile::new("Magnus", 2850)).await;

        setup_mock.assert();
        match result {
            Err(LauncherError::SetupFailed { status, reason }) => {
                assert_eq!(status, 500);
                assert_eq!(reason, "Internal Server Error");
            }
            other => panic!("expected SetupFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_setup_response_without_game_id() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/setup");
            then.status(201)
                .json_body(serde_json::json!({"status": "ok"}));
        });

        let client = SetupClient::new(MockConfig::new(server.base_url()));
        let result = client.setup_game(&PlayerProfile::new("Magnus", 2850)).await;

        assert!(matches!(result, Err(LauncherError::MissingGameId)));
    }

    #[tokio::test]
    async fn test_setup_response_not_json() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(POST).path("/setup");
            then.status(200).body("<html>proxy error</html>");
        });

        let client = SetupClient::new(MockConfig::new(server.base_url()));
        let result = client.setup_game(&PlayerProfile::new("Magnus", 2850)).await;

        assert!(matches!(result, Err(LauncherError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_setup_unreachable_server() {
        // 沒有服務在監聽的埠
        let client = SetupClient::new(MockConfig::new("http://127.0.0.1:1".to_string()));
        let result = client.setup_game(&PlayerProfile::new("Magnus", 2850)).await;

        assert!(matches!(result, Err(LauncherError::Http(_))));
    }
}

use crate::domain::model::{GameId, PlayerProfile};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// String key/value store, same contract as a browser's `localStorage`.
pub trait Storage: Send + Sync {
    fn get_item(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set_item(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn http_endpoint(&self) -> &str;
    fn ws_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Option<Duration>;
}

/// The server side of a game session.
#[async_trait]
pub trait GameBackend: Send + Sync {
    /// Registers the player and returns the id of the new session.
    async fn setup_game(&self, profile: &PlayerProfile) -> Result<GameId>;
}

use crate::core::socket::{socket_url, GameEventHandler, GameSocket};
use crate::core::{GameBackend, LaunchedGame, PlayerProfile, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub const NAME_KEY: &str = "name";
pub const ELO_KEY: &str = "elo";
pub const SAVED_AT_KEY: &str = "saved_at";

/// Runs the start-game flow: validate, save locally, set up the session, connect.
pub struct GameLauncher<B: GameBackend, S: Storage> {
    backend: B,
    storage: S,
    ws_endpoint: String,
}

impl<B: GameBackend, S: Storage> GameLauncher<B, S> {
    pub fn new(backend: B, storage: S, ws_endpoint: impl Into<String>) -> Self {
        Self {
            backend,
            storage,
            ws_endpoint: ws_endpoint.into(),
        }
    }

    /// 讀取上次儲存的名稱與 ELO，用來預填未提供的欄位
    pub async fn saved_profile(&self) -> Result<(Option<String>, Option<i64>)> {
        let name = self.storage.get_item(NAME_KEY).await?;
        let elo = self
            .storage
            .get_item(ELO_KEY)
            .await?
            .and_then(|v| v.parse::<i64>().ok());
        Ok((name, elo))
    }

    /// Fills the fields the caller did not provide from the last saved profile.
    /// Unreadable storage counts as nothing saved.
    pub async fn resolve_profile(&self, name: Option<String>, elo: Option<i64>) -> PlayerProfile {
        let (saved_name, saved_elo) = match self.saved_profile().await {
            Ok(saved) => saved,
            Err(e) => {
                tracing::warn!("⚠️ Ignoring saved player details: {}", e);
                (None, None)
            }
        };

        PlayerProfile::new(
            name.or(saved_name).unwrap_or_default(),
            elo.or(saved_elo).unwrap_or_default(),
        )
    }

    /// Sets up a new game. Nothing is saved and no request is made if the profile
    /// is invalid.
    pub async fn start(&self, profile: &PlayerProfile) -> Result<LaunchedGame> {
        profile.validate()?;

        tracing::debug!("Saving player details for {}", profile.name);
        self.storage.set_item(NAME_KEY, &profile.name).await?;
        self.storage.set_item(ELO_KEY, &profile.elo.to_string()).await?;
        self.storage
            .set_item(SAVED_AT_KEY, &chrono::Utc::now().to_rfc3339())
            .await?;

        let game_id = self.backend.setup_game(profile).await?;
        let socket_url = socket_url(&self.ws_endpoint, &game_id)?;

        Ok(LaunchedGame {
            game_id,
            socket_url,
        })
    }

    /// `start`, then stay connected to the game until the server closes it.
    /// A failed setup never opens a socket.
    pub async fn start_and_play<H: GameEventHandler>(
        &self,
        profile: &PlayerProfile,
        handler: &mut H,
    ) -> Result<LaunchedGame> {
        let game = self.start(profile).await?;
        GameSocket::new(game.socket_url.clone()).run(handler).await?;
        Ok(game)
    }
}

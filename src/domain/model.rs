use crate::utils::error::{LauncherError, Result};
use crate::utils::validation::{validate_length, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 50;
pub const MIN_ELO: i64 = 100;
pub const MAX_ELO: i64 = 3200;

/// The two values a player fills in before starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub elo: i64,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, elo: i64) -> Self {
        Self {
            name: name.into(),
            elo,
        }
    }
}

impl Validate for PlayerProfile {
    fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LauncherError::MissingField {
                field: "name".to_string(),
            });
        }
        validate_length("name", &self.name, MIN_NAME_LEN, MAX_NAME_LEN)?;

        // 0 視為未填寫
        if self.elo == 0 {
            return Err(LauncherError::MissingField {
                field: "elo".to_string(),
            });
        }
        validate_range("elo", self.elo, MIN_ELO, MAX_ELO)?;

        Ok(())
    }
}

/// Body of `POST /setup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupRequest {
    pub name: String,
    pub elo: i64,
}

impl From<&PlayerProfile> for SetupRequest {
    fn from(profile: &PlayerProfile) -> Self {
        Self {
            name: profile.name.clone(),
            elo: profile.elo,
        }
    }
}

/// Body returned by `POST /setup`. Only `gameId` is read; everything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetupResponse {
    #[serde(rename = "gameId", default)]
    pub game_id: Option<serde_json::Value>,
}

impl SetupResponse {
    pub fn into_game_id(self) -> Result<GameId> {
        self.game_id
            .as_ref()
            .and_then(GameId::from_json)
            .ok_or(LauncherError::MissingGameId)
    }
}

/// Server-assigned session identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    /// 接受非空字串、非零數字與 `true`，其餘一律視為沒有 id
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(s) => Self::new(s.as_str()),
            serde_json::Value::Number(n) if n.as_f64() != Some(0.0) => Self::new(n.to_string()),
            serde_json::Value::Bool(true) => Self::new("true"),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a successful setup hands back: the session and where to connect for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchedGame {
    pub game_id: GameId,
    pub socket_url: url::Url,
}

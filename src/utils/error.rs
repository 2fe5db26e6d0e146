use thiserror::Error;

/// 啟動遊戲時的失敗訊息（顯示給使用者）
pub const START_GAME_FAILED: &str = "Something went wrong starting the game. Please try again.";

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Invalid configuration value for '{field}' ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Saved data at {path} is unreadable: {message}")]
    StorageCorrupt { path: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Setup request failed with status {status}: {reason}")]
    SetupFailed { status: u16, reason: String },

    #[error("Response did not provide a game id")]
    MissingGameId,

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Storage,
    Network,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LauncherError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingField { .. } | Self::InvalidField { .. } => ErrorCategory::Input,
            Self::InvalidConfigValue { .. } | Self::ConfigError { .. } => {
                ErrorCategory::Configuration
            }
            Self::Storage(_) | Self::StorageCorrupt { .. } => ErrorCategory::Storage,
            Self::Serialization(_)
            | Self::Http(_)
            | Self::SetupFailed { .. }
            | Self::MissingGameId
            | Self::WebSocket(_) => ErrorCategory::Network,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            // 伺服器端的失敗，重試可能成功
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 給使用者看的訊息（相當於瀏覽器的 alert）
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::MissingField { field } if field == "name" => "Please enter your name".to_string(),
            Self::MissingField { field } if field == "elo" => {
                "Please enter your elo (or just an estimate)".to_string()
            }
            Self::MissingField { field } => format!("Please enter your {}", field),
            Self::InvalidField { reason, .. } => reason.clone(),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::Storage(e) => format!("Could not save your details locally: {}", e),
            Self::StorageCorrupt { path, .. } => {
                format!("Your saved details in {} are damaged", path)
            }
            Self::Serialization(_) | Self::Http(_) | Self::SetupFailed { .. } | Self::MissingGameId => {
                START_GAME_FAILED.to_string()
            }
            Self::WebSocket(_) => "Lost connection to the game server.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::MissingField { .. } | Self::InvalidField { .. } => {
                "Check the --name and --elo arguments"
            }
            Self::InvalidConfigValue { .. } | Self::ConfigError { .. } => {
                "Check the command line flags and the TOML configuration file"
            }
            Self::Storage(_) => "Make sure the storage directory is writable",
            Self::StorageCorrupt { .. } => {
                "Pass --name and --elo; the next successful start rewrites the saved details"
            }
            Self::Serialization(_) | Self::MissingGameId => {
                "The server answered with an unexpected body; check that --server points at the game API"
            }
            Self::Http(_) | Self::SetupFailed { .. } => {
                "Make sure the game server is running and reachable, then try again"
            }
            Self::WebSocket(_) => "Check --ws-server and try starting a new game",
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;

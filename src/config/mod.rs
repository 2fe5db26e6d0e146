pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use std::time::Duration;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

pub const DEFAULT_HTTP_ENDPOINT: &str = "http://localhost";
pub const DEFAULT_WS_ENDPOINT: &str = "ws://localhost";
pub const DEFAULT_STORAGE_PATH: &str = "./.zugzwang";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "zugzwang")]
#[command(about = "Set up a game against the engine and connect to it")]
pub struct CliConfig {
    /// Player name (3-50 characters). Falls back to the last saved name.
    #[arg(long)]
    pub name: Option<String>,

    /// Estimated ELO (100-3200). Falls back to the last saved rating.
    #[arg(long)]
    pub elo: Option<i64>,

    /// Base URL of the game API
    #[arg(long, env = "ZUGZWANG_SERVER")]
    pub server: Option<String>,

    /// Base URL of the game WebSocket endpoint
    #[arg(long, env = "ZUGZWANG_WS_SERVER")]
    pub ws_server: Option<String>,

    /// Directory holding the saved player details
    #[arg(long)]
    pub storage_path: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Timeout for the setup request
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Stop after the game has been set up, without opening the socket
    #[arg(long)]
    pub setup_only: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列與 TOML 設定：命令列 > TOML > 預設值
    pub fn resolve(&self, file: Option<TomlConfig>) -> Settings {
        let file = file.unwrap_or_default();
        Settings {
            http_endpoint: self
                .server
                .clone()
                .or(file.server.http_endpoint)
                .unwrap_or_else(|| DEFAULT_HTTP_ENDPOINT.to_string()),
            ws_endpoint: self
                .ws_server
                .clone()
                .or(file.server.ws_endpoint)
                .unwrap_or_else(|| DEFAULT_WS_ENDPOINT.to_string()),
            storage_path: self
                .storage_path
                .clone()
                .or(file.storage.path)
                .unwrap_or_else(|| DEFAULT_STORAGE_PATH.to_string()),
            timeout_seconds: self
                .timeout_seconds
                .or(file.server.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            name: self.name.clone().or(file.player.name),
            elo: self.elo.or(file.player.elo),
        }
    }
}

/// Fully resolved settings the launcher runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub http_endpoint: String,
    pub ws_endpoint: String,
    pub storage_path: String,
    pub timeout_seconds: u64,
    pub name: Option<String>,
    pub elo: Option<i64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_endpoint: DEFAULT_HTTP_ENDPOINT.to_string(),
            ws_endpoint: DEFAULT_WS_ENDPOINT.to_string(),
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            name: None,
            elo: None,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("server", &self.http_endpoint, &["http", "https"])?;
        validate_url("ws_server", &self.ws_endpoint, &["ws", "wss"])?;
        validate_path("storage_path", &self.storage_path)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn http_endpoint(&self) -> &str {
        &self.http_endpoint
    }

    fn ws_endpoint(&self) -> &str {
        &self.ws_endpoint
    }

    fn request_timeout(&self) -> Option<Duration> {
        Some(Duration::from_secs(self.timeout_seconds))
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags_or_file() {
        let cli = CliConfig::parse_from(["zugzwang"]);
        let settings = cli.resolve(None);

        assert_eq!(settings.http_endpoint, DEFAULT_HTTP_ENDPOINT);
        assert_eq!(settings.ws_endpoint, DEFAULT_WS_ENDPOINT);
        assert_eq!(settings.storage_path, DEFAULT_STORAGE_PATH);
        assert_eq!(settings.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(settings.name, None);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_flags_override_file() {
        let file = TomlConfig::from_toml_str(
            r#"
[server]
http_endpoint = "http://file-host:8080"
timeout_seconds = 5

[player]
name = "FromFile"
elo = 1200
"#,
        )
        .unwrap();

        let cli = CliConfig::parse_from([
            "zugzwang",
            "--name",
            "FromFlag",
            "--server",
            "http://flag-host:9000",
        ]);
        let settings = cli.resolve(Some(file));

        assert_eq!(settings.http_endpoint, "http://flag-host:9000");
        assert_eq!(settings.timeout_seconds, 5);
        assert_eq!(settings.name.as_deref(), Some("FromFlag"));
        assert_eq!(settings.elo, Some(1200));
    }

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = Settings {
            ws_endpoint: "https://localhost".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            timeout_seconds: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}

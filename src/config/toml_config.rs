use crate::utils::error::{LauncherError, Result};
use crate::utils::validation::{validate_path, validate_positive_number, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional file-based settings. Every field may be omitted; command line flags win.
///
/// ```toml
/// [server]
/// http_endpoint = "http://localhost:8080"
/// ws_endpoint = "ws://localhost:8080"
/// timeout_seconds = 10
///
/// [player]
/// name = "${ZUGZWANG_NAME}"
/// elo = 1500
///
/// [storage]
/// path = "./.zugzwang"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    pub http_endpoint: Option<String>,
    pub ws_endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: Option<String>,
    pub elo: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| LauncherError::ConfigError {
                message: format!("Cannot read config file {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LauncherError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ZUGZWANG_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LauncherError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.server.http_endpoint {
            validate_url("server.http_endpoint", endpoint, &["http", "https"])?;
        }
        if let Some(endpoint) = &self.server.ws_endpoint {
            validate_url("server.ws_endpoint", endpoint, &["ws", "wss"])?;
        }
        if let Some(timeout) = self.server.timeout_seconds {
            validate_positive_number("server.timeout_seconds", timeout, 1)?;
        }
        if let Some(path) = &self.storage.path {
            validate_path("storage.path", path)?;
        }
        Ok(())
    }
}

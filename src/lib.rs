pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, Settings};

pub use crate::core::{
    launcher::GameLauncher,
    setup::SetupClient,
    socket::{GameEventHandler, GameSocket, LoggingHandler},
};
pub use crate::domain::model::{GameId, LaunchedGame, PlayerProfile};
pub use crate::utils::error::{LauncherError, Result};

pub mod launcher;
pub mod setup;
pub mod socket;

pub use crate::domain::model::{GameId, LaunchedGame, PlayerProfile};
pub use crate::domain::ports::{ConfigProvider, GameBackend, Storage};
pub use crate::utils::error::Result;

use crate::core::GameId;
use crate::utils::error::{LauncherError, Result};
use crate::utils::validation::validate_url;
use futures_util::StreamExt;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

/// A data frame received from the game server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameFrame {
    Text(String),
    Binary(Vec<u8>),
}

/// Close code and reason sent by the server, if it sent any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseInfo {
    pub code: u16,
    pub reason: String,
}

/// Callbacks for the lifecycle of a game connection. No game protocol is defined
/// yet, so every callback defaults to doing nothing.
pub trait GameEventHandler: Send {
    fn on_open(&mut self, _url: &Url) {}

    fn on_message(&mut self, _frame: &GameFrame) {}

    fn on_error(&mut self, _error: &LauncherError) {}

    fn on_close(&mut self, _close: Option<&CloseInfo>) {}
}

/// Logs every connection event.
#[derive(Debug, Default)]
pub struct LoggingHandler {
    url: Option<Url>,
    messages: usize,
}

impl LoggingHandler {
    pub fn messages(&self) -> usize {
        self.messages
    }
}

impl GameEventHandler for LoggingHandler {
    fn on_open(&mut self, url: &Url) {
        tracing::info!("🔌 Connected to {}", url);
        self.url = Some(url.clone());
    }

    fn on_message(&mut self, frame: &GameFrame) {
        self.messages += 1;
        match frame {
            GameFrame::Text(text) => tracing::debug!("⬇️ #{} {}", self.messages, text),
            GameFrame::Binary(data) => {
                tracing::debug!("⬇️ #{} {} bytes", self.messages, data.len())
            }
        }
    }

    fn on_error(&mut self, error: &LauncherError) {
        tracing::error!("❌ Game connection error: {}", error);
    }

    fn on_close(&mut self, close: Option<&CloseInfo>) {
        let url = self.url.as_ref().map(Url::as_str).unwrap_or("game socket");
        match close {
            Some(info) => tracing::info!(
                "{} closed ({}: {}) after {} messages",
                url,
                info.code,
                info.reason,
                self.messages
            ),
            None => tracing::info!("{} closed after {} messages", url, self.messages),
        }
    }
}

/// `{ws_endpoint}/start/{game_id}`, with the id encoded as a single path segment.
pub fn socket_url(ws_endpoint: &str, game_id: &GameId) -> Result<Url> {
    let mut url = validate_url("ws_server", ws_endpoint, &["ws", "wss"])?;

    url.path_segments_mut()
        .map_err(|_| LauncherError::InvalidConfigValue {
            field: "ws_server".to_string(),
            value: ws_endpoint.to_string(),
            reason: "URL cannot have a path".to_string(),
        })?
        .pop_if_empty()
        .push("start")
        .push(game_id.as_str());

    Ok(url)
}

pub struct GameSocket {
    url: Url,
}

impl GameSocket {
    pub fn new(url: Url) -> Self {
        Self { url }
    }

    /// Connects and drives `handler` until the connection ends.
    ///
    /// A failed connect is returned as an error and no callback runs. Once
    /// connected, `on_open` is called first and `on_close` exactly once at the
    /// end; a transport error in between goes to `on_error` and ends the session.
    pub async fn run<H: GameEventHandler>(&self, handler: &mut H) -> Result<()> {
        tracing::debug!("Opening game socket: {}", self.url);
        let (mut stream, _) = connect_async(self.url.as_str()).await?;
        handler.on_open(&self.url);

        let mut close_info = None;
        while let Some(message) = stream.next().await {
            match message {
                Ok(Message::Text(text)) => handler.on_message(&GameFrame::Text(text)),
                Ok(Message::Binary(data)) => handler.on_message(&GameFrame::Binary(data)),
                Ok(Message::Close(frame)) => {
                    // 繼續讀取，讓 tungstenite 完成關閉交握
                    close_info = frame.map(|f| CloseInfo {
                        code: u16::from(f.code),
                        reason: f.reason.to_string(),
                    });
                }
                Ok(_) => {}
                Err(e) => {
                    handler.on_error(&LauncherError::from(e));
                    break;
                }
            }
        }

        handler.on_close(close_info.as_ref());
        Ok(())
    }
}

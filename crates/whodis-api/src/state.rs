//! Application state wiring the game service and transport together.
//!
//! AppState is the composition root: built once at startup and passed
//! (never globally reached) into every command handler and route.

use std::path::Path;
use std::sync::Arc;

use whodis_core::game::service::GameService;
use whodis_infra::config;
use whodis_infra::oracle::ollama::OllamaOracle;
use whodis_infra::roster;
use whodis_types::config::BotConfig;

use crate::telegram::client::TelegramClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub game: Arc<GameService<OllamaOracle>>,
    pub telegram: Arc<TelegramClient>,
    pub config: Arc<BotConfig>,
}

impl AppState {
    /// Initialize the application: load configuration and the roster,
    /// wire the oracle, game service, and Telegram client.
    ///
    /// A missing token, unreadable config, or empty roster fails here and
    /// halts startup; everything after this point is non-fatal.
    pub async fn init(config_path: &Path) -> anyhow::Result<Self> {
        let config = config::load_config(config_path).await?;
        let token = config::bot_token()?;

        let corpus = roster::load_corpus(&config.roster_path).await?;

        let oracle = OllamaOracle::new(&config.ollama);
        tracing::info!(model = oracle.model(), base_url = %config.ollama.base_url, "oracle configured");

        let game = GameService::new(oracle, corpus, config.game.clone());
        let telegram = TelegramClient::new(token);

        Ok(Self {
            game: Arc::new(game),
            telegram: Arc::new(telegram),
            config: Arc::new(config),
        })
    }
}

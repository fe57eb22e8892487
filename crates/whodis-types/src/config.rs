//! Configuration types for the Whodis bot.
//!
//! `BotConfig` represents the top-level `config.toml`. Every field has a
//! default so a missing file yields a fully usable configuration; the bot
//! token is deliberately absent (it comes from the environment and never
//! touches disk).

use serde::{Deserialize, Serialize};

use crate::game::GameRules;

/// Top-level configuration, loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Transport settings (webhook vs polling, listen address).
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Inference backend settings.
    #[serde(default)]
    pub ollama: OllamaConfig,

    /// Game budgets and sizing.
    #[serde(default)]
    pub game: GameRules,

    /// Roster file: one display name per line, UTF-8.
    #[serde(default = "default_roster_path")]
    pub roster_path: String,
}

fn default_roster_path() -> String {
    "people.txt".to_string()
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            telegram: TelegramConfig::default(),
            ollama: OllamaConfig::default(),
            game: GameRules::default(),
            roster_path: default_roster_path(),
        }
    }
}

/// Telegram transport settings.
///
/// When `webhook_url` is set the bot registers it and serves updates over
/// HTTP on `host:port`; otherwise it long-polls `getUpdates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    /// Public HTTPS URL Telegram should deliver updates to.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Listen address for webhook mode.
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port for webhook mode.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Long-poll window for getUpdates, in seconds.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_poll_timeout_secs() -> u64 {
    30
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            host: default_host(),
            port: default_port(),
            poll_timeout_secs: default_poll_timeout_secs(),
        }
    }
}

/// Ollama inference backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier to generate with.
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout, in seconds. Generations on small local models
    /// can take a while; a hung call only delays the one question.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "qwen3:4b".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

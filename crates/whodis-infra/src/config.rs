//! Configuration loading for the whodis binary.
//!
//! `config.toml` is optional and every field has a default, so a missing
//! file yields a usable configuration. A file that exists but fails to
//! parse is a startup error rather than a silent fallback: the model name
//! and transport mode are load-bearing, and a silently defaulted bot
//! would answer with the wrong model. The bot token never lives in the
//! file; it comes from the `TELEGRAM_BOT_TOKEN` environment variable and
//! is wrapped in [`SecretString`] so it cannot leak through Debug output
//! or logs.

use std::path::Path;

use secrecy::SecretString;
use thiserror::Error;
use whodis_types::config::BotConfig;

/// Environment variable holding the Telegram bot token.
pub const TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Errors resolving the bot's configuration at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    Parse { path: String, message: String },

    #[error("TELEGRAM_BOT_TOKEN environment variable not set")]
    MissingToken,
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist.
pub async fn load_config(path: impl AsRef<Path>) -> Result<BotConfig, ConfigError> {
    let path = path.as_ref();

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config file at {}, using defaults", path.display());
            return Ok(BotConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source: err,
            });
        }
    };

    toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.display().to_string(),
        message: err.to_string(),
    })
}

/// Read the bot token from the environment.
pub fn bot_token() -> Result<SecretString, ConfigError> {
    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => Ok(token.into()),
        _ => Err(ConfigError::MissingToken),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_returns_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path().join("config.toml")).await.unwrap();
        assert_eq!(config.ollama.model, "qwen3:4b");
        assert!(config.telegram.webhook_url.is_none());
    }

    #[tokio::test]
    async fn test_valid_file_parses() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
roster_path = "custom.txt"

[ollama]
model = "mistral:7b"
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await.unwrap();
        assert_eq!(config.roster_path, "custom.txt");
        assert_eq!(config.ollama.model, "mistral:7b");
        assert_eq!(config.telegram.port, 8080);
    }

    #[tokio::test]
    async fn test_malformed_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!").await.unwrap();

        let err = load_config(&path).await.unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}

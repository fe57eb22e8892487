//! Minimal Telegram Bot API client.
//!
//! Only the handful of methods the bot needs: sending messages, long
//! polling, command registration, and webhook management. The token is a
//! [`SecretString`]; it appears in request URLs only and never in logs.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use super::types::{ApiResponse, BotCommand, Update};

const BASE_URL: &str = "https://api.telegram.org";

/// Errors talking to the Bot API.
#[derive(Debug, Error)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("Bot API error: {0}")]
    Api(String),

    #[error("failed to parse response: {0}")]
    Deserialization(String),
}

/// Telegram Bot API client.
pub struct TelegramClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

// TelegramClient intentionally does NOT derive Debug so the bot token can
// never leak through debug formatting.

impl TelegramClient {
    /// Create a new client for the given bot token.
    pub fn new(token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            // Above the long-poll window so getUpdates can idle out server-side.
            .timeout(Duration::from_secs(65))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token.expose_secret(), method)
    }

    async fn call<T: serde::de::DeserializeOwned + Default>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T, TelegramError> {
        let response = self
            .client
            .post(self.url(method))
            .json(&body)
            .send()
            .await
            .map_err(|e| TelegramError::Request(e.to_string()))?;

        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TelegramError::Deserialization(e.to_string()))?;

        if !envelope.ok {
            return Err(TelegramError::Api(
                envelope
                    .description
                    .unwrap_or_else(|| "unknown error".to_string()),
            ));
        }
        envelope
            .result
            .ok_or_else(|| TelegramError::Deserialization("missing result".to_string()))
    }

    /// Send a text block to a chat, optionally as Markdown.
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        markdown: bool,
    ) -> Result<(), TelegramError> {
        let mut body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });
        if markdown {
            body["parse_mode"] = serde_json::Value::String("Markdown".to_string());
        }
        let _: serde_json::Value = self.call("sendMessage", body).await?;
        Ok(())
    }

    /// Long-poll for updates after `offset`.
    pub async fn get_updates(&self, offset: i64, timeout_secs: u64) -> Result<Vec<Update>, TelegramError> {
        self.call(
            "getUpdates",
            serde_json::json!({
                "offset": offset,
                "timeout": timeout_secs,
                "allowed_updates": ["message"],
            }),
        )
        .await
    }

    /// Register the command menu shown by Telegram clients.
    pub async fn set_my_commands(&self, commands: &[BotCommand]) -> Result<(), TelegramError> {
        let _: bool = self
            .call("setMyCommands", serde_json::json!({ "commands": commands }))
            .await?;
        Ok(())
    }

    /// Point Telegram at a public webhook URL.
    pub async fn set_webhook(&self, url: &str) -> Result<(), TelegramError> {
        let _: bool = self
            .call("setWebhook", serde_json::json!({ "url": url }))
            .await?;
        Ok(())
    }

    /// Remove any registered webhook so long polling can take over.
    pub async fn delete_webhook(&self) -> Result<(), TelegramError> {
        let _: bool = self.call("deleteWebhook", serde_json::json!({})).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_embeds_token_and_method() {
        let client = TelegramClient::new(SecretString::from("123:abc"));
        assert_eq!(
            client.url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_with_base_url_override() {
        let client = TelegramClient::new(SecretString::from("t"))
            .with_base_url("http://localhost:9000".to_string());
        assert_eq!(client.url("getMe"), "http://localhost:9000/bott/getMe");
    }
}

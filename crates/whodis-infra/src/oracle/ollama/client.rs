//! OllamaOracle -- concrete [`Oracle`] implementation for a local Ollama
//! server.
//!
//! Sends non-streaming generate requests and returns the raw response
//! text; label extraction stays in whodis-core where it is unit-testable.

use std::time::Duration;

use whodis_core::oracle::Oracle;
use whodis_types::config::OllamaConfig;
use whodis_types::error::OracleError;
use whodis_types::person::Person;

use super::prompt::build_prompt;
use super::types::{GenerateRequest, GenerateResponse};

/// Ollama inference backend.
#[derive(Debug, Clone)]
pub struct OllamaOracle {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaOracle {
    /// Create a new Ollama oracle from configuration.
    pub fn new(config: &OllamaConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    /// The model this oracle generates with.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the full API URL for a given path.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Oracle for OllamaOracle {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn interrogate(&self, question: &str, secret: &Person) -> Result<String, OracleError> {
        let prompt = build_prompt(secret, question);
        let body = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::Request {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let generate: GenerateResponse = response.json().await.map_err(|e| {
            OracleError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        Ok(generate.response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = OllamaConfig {
            base_url: "http://localhost:11434/".to_string(),
            ..OllamaConfig::default()
        };
        let oracle = OllamaOracle::new(&config);
        assert_eq!(oracle.url("/api/generate"), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_oracle_name_and_model() {
        let oracle = OllamaOracle::new(&OllamaConfig::default());
        assert_eq!(oracle.name(), "ollama");
        assert_eq!(oracle.model(), "qwen3:4b");
    }
}

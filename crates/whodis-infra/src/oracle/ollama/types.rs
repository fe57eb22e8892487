//! Wire types for the Ollama generate API.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/generate`.
#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
}

/// Response body for a non-streaming generate call.
///
/// Ollama returns a pile of bookkeeping fields (timings, context vector);
/// only the generated text matters here, and serde ignores the rest.
#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_serializes() {
        let req = GenerateRequest {
            model: "qwen3:4b",
            prompt: "hello",
            stream: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "qwen3:4b");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_generate_response_ignores_extra_fields() {
        let json = r#"{
            "model": "qwen3:4b",
            "created_at": "2026-08-06T12:00:00Z",
            "response": "Yes",
            "done": true,
            "total_duration": 123456789
        }"#;
        let resp: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.response, "Yes");
    }
}

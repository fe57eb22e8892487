//! Ollama oracle backend.
//!
//! Talks to a local Ollama server's native `/api/generate` endpoint,
//! non-streaming: one question, one request, one JSON response.

pub mod client;
pub mod prompt;
pub mod types;

pub use client::OllamaOracle;

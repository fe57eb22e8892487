//! Oracle trait definition.

use whodis_types::error::OracleError;
use whodis_types::person::Person;

/// Inference backend that answers questions about the secret person.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The raw
/// response text comes back untouched; reducing it to an answer label is
/// [`crate::oracle::parse_answer`]'s job.
///
/// Implementations live in whodis-infra (e.g., `OllamaOracle`).
pub trait Oracle: Send + Sync {
    /// Human-readable backend name (e.g., "ollama").
    fn name(&self) -> &str;

    /// Answer `question` about `secret`, returning the raw response text.
    ///
    /// This is the only call in the engine's control flow that blocks for
    /// non-trivial latency; the service keeps the session lock released
    /// while it runs.
    fn interrogate(
        &self,
        question: &str,
        secret: &Person,
    ) -> impl std::future::Future<Output = Result<String, OracleError>> + Send;
}

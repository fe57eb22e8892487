//! Infrastructure implementations for Whodis: the Ollama oracle client,
//! roster file loading, and configuration.

pub mod config;
pub mod oracle;
pub mod roster;

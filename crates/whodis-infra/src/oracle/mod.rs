//! Oracle backends.

pub mod ollama;

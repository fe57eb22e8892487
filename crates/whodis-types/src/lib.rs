//! Shared domain types for the Whodis guessing-game bot.
//!
//! This crate has no behavior beyond the data shapes themselves: people,
//! answer labels, game log entries, configuration, and the error taxonomy
//! shared across the engine, the infrastructure, and the transport.

pub mod config;
pub mod error;
pub mod game;
pub mod person;

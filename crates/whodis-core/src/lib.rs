//! Session engine for the Whodis guessing game.
//!
//! Everything with real invariants lives here: the per-player game state
//! machine and its budgets, the name-matching pipeline that reconciles
//! free-text guesses against a roster despite accents and typos, the
//! process-wide session registry with per-key mutual exclusion, and the
//! rendering helpers (scorecard, roster pagination, message chunking).
//!
//! The inference backend is abstracted behind [`oracle::Oracle`];
//! implementations live in `whodis-infra`.

pub mod game;
pub mod name;
pub mod oracle;
pub mod text;

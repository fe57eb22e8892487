//! Game-facing data shapes: answer labels, log entries, session keys,
//! and the per-game rule set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::person::Person;

/// Short answer label reduced from the oracle's free-text response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    NotSure,
    Unclear,
}

impl Answer {
    /// Whether this answer spends a question from the budget.
    ///
    /// Only a clean "I'm not sure" is free; an `Unclear` (unparseable)
    /// response still costs one.
    pub fn counts_question(self) -> bool {
        !matches!(self, Answer::NotSure)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Yes => write!(f, "Yes"),
            Answer::No => write!(f, "No"),
            Answer::NotSure => write!(f, "I'm not sure"),
            Answer::Unclear => write!(f, "Unclear"),
        }
    }
}

/// One interaction in a game's chronological, append-only log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEntry {
    /// A question the player asked, the oracle's full reasoning, and the
    /// label it was reduced to.
    Question {
        question: String,
        rationale: String,
        answer: Answer,
    },
    /// A roster-matched guess and whether it named the secret person.
    Guess { person: Person, correct: bool },
}

/// Key a game session is stored under: the player in one-to-one chats,
/// the group conversation otherwise, so private games are per-player and
/// group games are shared by all participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionKey(pub i64);

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Budgets and sizing knobs for a single game.
///
/// Part of `config.toml` under `[game]`. All fields default to the
/// standard game: 10 questions, 3 guesses, a 100-name roster, 50 names
/// per list page, 4000-character message chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRules {
    /// Questions a player may spend per game ("I'm not sure" answers are free).
    #[serde(default = "default_max_questions")]
    pub max_questions: u32,

    /// Name guesses a player may spend per game.
    #[serde(default = "default_max_guesses")]
    pub max_guesses: u32,

    /// Maximum roster size sampled per game.
    #[serde(default = "default_roster_cap")]
    pub roster_cap: usize,

    /// Names per /namelist page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Maximum characters per outgoing message before chunking.
    #[serde(default = "default_chunk_chars")]
    pub chunk_chars: usize,
}

fn default_max_questions() -> u32 {
    10
}

fn default_max_guesses() -> u32 {
    3
}

fn default_roster_cap() -> usize {
    100
}

fn default_page_size() -> usize {
    50
}

fn default_chunk_chars() -> usize {
    4000
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
            max_guesses: default_max_guesses(),
            roster_cap: default_roster_cap(),
            page_size: default_page_size(),
            chunk_chars: default_chunk_chars(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_display() {
        assert_eq!(Answer::Yes.to_string(), "Yes");
        assert_eq!(Answer::No.to_string(), "No");
        assert_eq!(Answer::NotSure.to_string(), "I'm not sure");
        assert_eq!(Answer::Unclear.to_string(), "Unclear");
    }

    #[test]
    fn test_only_not_sure_is_free() {
        assert!(Answer::Yes.counts_question());
        assert!(Answer::No.counts_question());
        assert!(Answer::Unclear.counts_question());
        assert!(!Answer::NotSure.counts_question());
    }

    #[test]
    fn test_log_entry_serde_tagged() {
        let entry = LogEntry::Guess {
            person: Person::new("Alice"),
            correct: true,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"guess\""));
        let parsed: LogEntry = serde_json::from_str(&json).unwrap();
        assert!(matches!(parsed, LogEntry::Guess { correct: true, .. }));
    }

    #[test]
    fn test_game_rules_defaults() {
        let rules = GameRules::default();
        assert_eq!(rules.max_questions, 10);
        assert_eq!(rules.max_guesses, 3);
        assert_eq!(rules.roster_cap, 100);
        assert_eq!(rules.page_size, 50);
        assert_eq!(rules.chunk_chars, 4000);
    }

    #[test]
    fn test_game_rules_deserialize_partial_toml() {
        let rules: GameRules = toml::from_str("max_questions = 20").unwrap();
        assert_eq!(rules.max_questions, 20);
        assert_eq!(rules.max_guesses, 3);
        assert_eq!(rules.chunk_chars, 4000);
    }
}

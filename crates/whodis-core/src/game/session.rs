//! Game session state machine.
//!
//! A session is `Active` until a correct guess, the last wrong guess, or
//! an explicit end; after that it is `Over` forever. Budget checks for
//! /ask run in two phases so the oracle HTTP call happens outside the
//! per-key lock: [`GameSession::prepare_question`] validates under the
//! lock before the call, [`GameSession::commit_answer`] re-validates
//! before mutating once the lock is reacquired.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use whodis_types::error::GameError;
use whodis_types::game::{Answer, GameRules, LogEntry};
use whodis_types::person::Person;

use crate::name::normalizer::normalize;

/// One game: the secret identity, the roster snapshot, the budgets, and
/// the chronological interaction log.
///
/// The roster is snapshotted at game start, so guess validity and
/// pagination stay stable for the life of the game even if the corpus
/// changes underneath.
#[derive(Debug)]
pub struct GameSession {
    id: Uuid,
    secret_person: Person,
    roster: Vec<Person>,
    rules: GameRules,
    questions_used: u32,
    guesses_left: u32,
    log: Vec<LogEntry>,
    game_over: bool,
    started_at: DateTime<Utc>,
}

/// What a resolved guess did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum GuessOutcome {
    /// Right person; the game is over.
    Correct { person: Person },
    /// Wrong person; the game continues.
    Wrong { person: Person, guesses_left: u32 },
    /// Wrong person and that was the last guess; the game is over.
    WrongFinal { person: Person, secret: Person },
}

impl GameSession {
    /// Start a game. `secret_person` must be drawn from `roster`.
    pub fn new(secret_person: Person, roster: Vec<Person>, rules: GameRules) -> Self {
        let guesses_left = rules.max_guesses;
        Self {
            id: Uuid::now_v7(),
            secret_person,
            roster,
            rules,
            questions_used: 0,
            guesses_left,
            log: Vec::new(),
            game_over: false,
            started_at: Utc::now(),
        }
    }

    /// Instance identity, used to detect that a session was replaced while
    /// an oracle call was in flight.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn secret_person(&self) -> &Person {
        &self.secret_person
    }

    pub fn roster(&self) -> &[Person] {
        &self.roster
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn questions_used(&self) -> u32 {
        self.questions_used
    }

    pub fn questions_left(&self) -> u32 {
        self.rules.max_questions.saturating_sub(self.questions_used)
    }

    pub fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Validate that a question may be asked right now.
    ///
    /// Phase one of /ask; runs under the session lock before the oracle
    /// call. No mutation.
    pub fn prepare_question(&self, text: &str) -> Result<(), GameError> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        if self.questions_used >= self.rules.max_questions {
            return Err(GameError::QuestionsExhausted);
        }
        if text.trim().is_empty() {
            return Err(GameError::EmptyInput);
        }
        Ok(())
    }

    /// Record an answered question.
    ///
    /// Phase two of /ask. Re-runs the budget validation because the lock
    /// was released during the oracle call; a concurrent command may have
    /// spent the budget or ended the game in the meantime, in which case
    /// the answer is discarded and nothing mutates.
    pub fn commit_answer(
        &mut self,
        question: String,
        rationale: String,
        answer: Answer,
    ) -> Result<(), GameError> {
        self.prepare_question(&question)?;

        let counts = answer.counts_question();
        self.log.push(LogEntry::Question {
            question,
            rationale,
            answer,
        });
        if counts {
            self.questions_used += 1;
        }
        Ok(())
    }

    /// Score a roster-matched guess.
    ///
    /// Only exact matches reach here; suggestions and misses never mutate
    /// the session. Correctness is decided on normalized forms, matching
    /// how the guess was resolved in the first place.
    pub fn submit_guess(&mut self, matched: Person) -> Result<GuessOutcome, GameError> {
        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }
        if self.guesses_left == 0 {
            return Err(GameError::GuessesExhausted);
        }

        let correct = normalize(matched.as_str()) == normalize(self.secret_person.as_str());
        self.log.push(LogEntry::Guess {
            person: matched.clone(),
            correct,
        });

        if correct {
            self.game_over = true;
            return Ok(GuessOutcome::Correct { person: matched });
        }

        self.guesses_left -= 1;
        if self.guesses_left == 0 {
            self.game_over = true;
            Ok(GuessOutcome::WrongFinal {
                person: matched,
                secret: self.secret_person.clone(),
            })
        } else {
            Ok(GuessOutcome::Wrong {
                person: matched,
                guesses_left: self.guesses_left,
            })
        }
    }

    /// Force the session into the terminal state. Idempotent.
    pub fn end(&mut self) {
        self.game_over = true;
    }
}

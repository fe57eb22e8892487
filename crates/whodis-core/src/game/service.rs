//! Command handlers for the guessing game.
//!
//! One method per chat command. Each takes a session key plus argument
//! text and returns the ordered text blocks the transport should send.
//! Every rejection (no game, spent budget, empty input) is a direct
//! player-facing message, never an error; the only fallible collaborator
//! is the oracle, and a failed call aborts the single /ask it served with
//! no state change.
//!
//! Locking discipline: each handler locks the key's slot for the duration
//! of its state access, except /ask, which snapshots under the lock,
//! releases it for the oracle call, then reacquires and re-validates
//! before committing (see [`GameSession::commit_answer`]).

use tracing::{info, warn};
use whodis_types::error::GameError;
use whodis_types::game::{Answer, GameRules, LogEntry, SessionKey};
use whodis_types::person::Person;

use crate::game::pager;
use crate::game::registry::SessionRegistry;
use crate::game::scorecard;
use crate::game::session::{GameSession, GuessOutcome};
use crate::name::{matcher, sampler};
use crate::oracle::{Oracle, parse_answer};
use crate::text::chunker;

const NO_ACTIVE_GAME: &str = "Start a new game using /start.";
const QUESTIONS_SPENT: &str = "❌ You've used all questions. Try guessing or end the game with /end.";
const ASK_USAGE: &str = "Usage: /ask <your question>";
const GUESS_USAGE: &str = "Usage: /guess <full or partial name>";

/// Convert a rejected action into its player-facing reply.
///
/// Every [`GameError`] ends here; none propagates past the handler that
/// hit it. An ended or missing game reads the same to the player: start a
/// new one.
fn rejection(err: GameError) -> Vec<Reply> {
    let text = match err {
        GameError::NoActiveSession | GameError::GameAlreadyOver => NO_ACTIVE_GAME,
        GameError::SessionAlreadyRunning => {
            "⚠️ A game is already running. Use /end to stop it before starting a new one."
        }
        GameError::QuestionsExhausted => QUESTIONS_SPENT,
        GameError::GuessesExhausted => "❌ No guesses left. Use /summary to see the results.",
        GameError::EmptyInput => ASK_USAGE,
        GameError::InferenceUnavailable(_) => {
            "⚠️ The oracle is unavailable right now. Your question was not counted; try again in a moment."
        }
    };
    vec![Reply::plain(text)]
}

/// One outgoing text block.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    /// Render with Telegram Markdown (scorecard and history use bold).
    pub markdown: bool,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: false,
        }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markdown: true,
        }
    }
}

/// The game engine behind every chat command.
///
/// Generic over the [`Oracle`] backend so the whole command surface can be
/// driven in tests with a scripted oracle and no network.
pub struct GameService<O: Oracle> {
    registry: SessionRegistry,
    oracle: O,
    corpus: Vec<String>,
    default_roster: Vec<Person>,
    rules: GameRules,
}

impl<O: Oracle> GameService<O> {
    /// Wire the service. `corpus` is the full deduplicated name corpus;
    /// a default roster is sampled from it up front for pre-game
    /// /namelist browsing.
    pub fn new(oracle: O, corpus: Vec<String>, rules: GameRules) -> Self {
        let default_roster = sampler::sample_roster(&corpus, rules.roster_cap, &mut rand::rng());
        Self {
            registry: SessionRegistry::new(),
            oracle,
            corpus,
            default_roster,
            rules,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// /start - begin a new game for this key.
    ///
    /// Rejected while an Active game exists; a finished game is replaced
    /// in place, under the same per-key lock as any in-flight action.
    pub async fn start(&self, key: SessionKey) -> Vec<Reply> {
        let slot = self.registry.slot(key);
        let mut slot = slot.lock().await;

        if slot.game.as_ref().is_some_and(|game| !game.is_over()) {
            return rejection(GameError::SessionAlreadyRunning);
        }

        let mut rng = rand::rng();
        let roster = sampler::sample_roster(&self.corpus, self.rules.roster_cap, &mut rng);
        let Some(secret) = sampler::pick_secret(&roster, &mut rng) else {
            // The roster loader rejects an empty corpus at startup.
            return vec![Reply::plain("⚠️ The roster is empty; the game cannot start.")];
        };

        info!(session_key = %key, roster_len = roster.len(), "new game started");
        slot.game = Some(GameSession::new(secret, roster, self.rules.clone()));
        slot.name_page = 0;

        vec![Reply::plain(format!(
            "👋 Hi! I've picked a famous person from the /namelist. Use /ask to ask a yes/no question, or /guess to make a guess.\nYou have {} questions and {} guesses.\n\n💡 You don't need to worry about accents or special characters — simplified English spellings are perfectly fine when guessing names!",
            self.rules.max_questions, self.rules.max_guesses
        ))]
    }

    /// /ask - put a yes/no question to the oracle.
    pub async fn ask(&self, key: SessionKey, text: &str) -> Vec<Reply> {
        let Some(slot) = self.registry.get(key) else {
            return rejection(GameError::NoActiveSession);
        };

        let question = text.trim().to_string();

        // Phase one: validate and snapshot under the lock.
        let (game_id, secret) = {
            let guard = slot.lock().await;
            let Some(game) = guard.game.as_ref().filter(|game| !game.is_over()) else {
                return rejection(GameError::NoActiveSession);
            };
            match game.prepare_question(&question) {
                Ok(()) => (game.id(), game.secret_person().clone()),
                Err(err) => return rejection(err),
            }
        };

        // The oracle call runs with the lock released; a hung backend
        // delays this one action only.
        let raw = match self.oracle.interrogate(&question, &secret).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(session_key = %key, oracle = self.oracle.name(), error = %err, "oracle call failed");
                return rejection(GameError::InferenceUnavailable(err.to_string()));
            }
        };
        let answer = parse_answer(&raw);

        // Phase two: reacquire, re-validate, commit. The game may have
        // been ended, replaced, or exhausted while the call was in
        // flight; the answer is discarded in that case.
        let mut guard = slot.lock().await;
        let Some(game) = guard
            .game
            .as_mut()
            .filter(|game| game.id() == game_id && !game.is_over())
        else {
            return rejection(GameError::NoActiveSession);
        };
        if let Err(err) = game.commit_answer(question, raw, answer) {
            return rejection(err);
        }

        let mut replies = vec![
            Reply::plain(format!("🤖 {answer}")),
            Reply::markdown(scorecard::render(
                game.questions_used(),
                game.guesses_left(),
                self.rules.max_questions,
            )),
        ];
        if game.questions_left() == 0 {
            replies.push(Reply::plain("❗ You've used all your questions. Use /guess or /end."));
        }
        replies
    }

    /// /guess - try to name the secret person.
    pub async fn guess(&self, key: SessionKey, text: &str) -> Vec<Reply> {
        let Some(slot) = self.registry.get(key) else {
            return rejection(GameError::NoActiveSession);
        };
        let mut guard = slot.lock().await;
        let Some(game) = guard.game.as_mut().filter(|game| !game.is_over()) else {
            return rejection(GameError::NoActiveSession);
        };

        if game.guesses_left() == 0 {
            return rejection(GameError::GuessesExhausted);
        }

        let guess = text.trim();
        if guess.is_empty() {
            return vec![Reply::plain(GUESS_USAGE)];
        }

        match matcher::resolve(guess, game.roster()) {
            matcher::Resolution::Matched(person) => match game.submit_guess(person) {
                Ok(GuessOutcome::Correct { person }) => {
                    info!(session_key = %key, "game won");
                    vec![Reply::plain(format!(
                        "🎉 Correct! It was {person}.\nUse /summary to view the game log."
                    ))]
                }
                Ok(GuessOutcome::WrongFinal { secret, .. }) => {
                    info!(session_key = %key, "game lost");
                    vec![Reply::plain(format!(
                        "❌ Wrong. You've used all guesses.\nThe correct answer was: {secret}.\nUse /summary to view the log."
                    ))]
                }
                Ok(GuessOutcome::Wrong { person, .. }) => vec![
                    Reply::plain(format!("❌ Wrong guess: {person}.")),
                    Reply::markdown(scorecard::render(
                        game.questions_used(),
                        game.guesses_left(),
                        self.rules.max_questions,
                    )),
                ],
                Err(err) => rejection(err),
            },
            matcher::Resolution::Suggested(person) => vec![Reply::plain(format!(
                "❓ Name not found. Did you mean: '{person}'?\nUse /namelist to see all valid options."
            ))],
            matcher::Resolution::NoMatch => vec![Reply::plain(
                "❓ Name not found. Please use /namelist to see valid choices.",
            )],
        }
    }

    /// /namelist - first page of the roster; resets the cursor.
    ///
    /// Works without a game: it pages the default roster then.
    pub async fn namelist(&self, key: SessionKey) -> Vec<Reply> {
        let slot = self.registry.slot(key);
        let mut guard = slot.lock().await;
        guard.name_page = 0;

        let roster: &[Person] = match &guard.game {
            Some(game) => game.roster(),
            None => &self.default_roster,
        };
        let (window, has_more) = pager::page(roster, 0, self.rules.page_size);

        let names: String = window
            .iter()
            .map(|person| format!("- {person}"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut text = format!("🧾 Names (1–{}):\n{names}", window.len());
        if has_more {
            let remaining = roster.len() - window.len();
            text.push_str(&format!(
                "\n\nTo see the next {} names, type /next.",
                remaining.min(self.rules.page_size)
            ));
        }
        vec![Reply::plain(text)]
    }

    /// /next - advance the cursor and show the next page.
    pub async fn next_page(&self, key: SessionKey) -> Vec<Reply> {
        let Some(slot) = self.registry.get(key) else {
            return vec![Reply::plain("Use /namelist to start viewing names.")];
        };
        let mut guard = slot.lock().await;
        guard.name_page += 1;
        let page_index = guard.name_page;

        let roster: &[Person] = match &guard.game {
            Some(game) => game.roster(),
            None => &self.default_roster,
        };
        let (window, _) = pager::page(roster, page_index, self.rules.page_size);
        if window.is_empty() {
            return vec![Reply::plain("🚫 No more names. Use /namelist to restart.")];
        }

        let start = page_index * self.rules.page_size;
        let names: String = window
            .iter()
            .map(|person| format!("- {person}"))
            .collect::<Vec<_>>()
            .join("\n");
        vec![Reply::plain(format!(
            "🧾 Names ({}-{}):\n{names}",
            start + 1,
            start + window.len()
        ))]
    }

    /// /history - questions and guesses so far, without rationale.
    pub async fn history(&self, key: SessionKey) -> Vec<Reply> {
        let Some(slot) = self.registry.get(key) else {
            return vec![Reply::plain("No game history found.")];
        };
        let guard = slot.lock().await;
        let Some(game) = guard.game.as_ref() else {
            return vec![Reply::plain("No Q&A or guesses yet.")];
        };

        let mut sections = Vec::new();

        let questions: Vec<(&str, Answer)> = game
            .log()
            .iter()
            .filter_map(|entry| match entry {
                LogEntry::Question { question, answer, .. } => Some((question.as_str(), *answer)),
                LogEntry::Guess { .. } => None,
            })
            .collect();
        if !questions.is_empty() {
            sections.push("*📜 Q&A History:*".to_string());
            for (i, (question, answer)) in questions.iter().enumerate() {
                sections.push(format!("{}. ❓ {question}\n   ✉️ {answer}", i + 1));
            }
        }

        let guesses: Vec<(&Person, bool)> = game
            .log()
            .iter()
            .filter_map(|entry| match entry {
                LogEntry::Guess { person, correct } => Some((person, *correct)),
                LogEntry::Question { .. } => None,
            })
            .collect();
        if !guesses.is_empty() {
            sections.push("\n*🎯 Guesses:*".to_string());
            for (person, correct) in guesses {
                let marker = if correct { "✅" } else { "❌" };
                sections.push(format!("{marker} {person}"));
            }
        }

        if sections.is_empty() {
            vec![Reply::plain("No Q&A or guesses yet.")]
        } else {
            vec![Reply::markdown(sections.join("\n\n"))]
        }
    }

    /// /scorecard - current budgets.
    pub async fn scorecard(&self, key: SessionKey) -> Vec<Reply> {
        let Some(slot) = self.registry.get(key) else {
            return vec![Reply::plain("No game in progress. Use /start to begin.")];
        };
        let guard = slot.lock().await;
        let Some(game) = guard.game.as_ref() else {
            return vec![Reply::plain("No game in progress. Use /start to begin.")];
        };

        vec![Reply::markdown(scorecard::render(
            game.questions_used(),
            game.guesses_left(),
            self.rules.max_questions,
        ))]
    }

    /// /end - force the game over and reveal the secret. Idempotent.
    pub async fn end(&self, key: SessionKey) -> Vec<Reply> {
        let Some(slot) = self.registry.get(key) else {
            return vec![Reply::plain("No game session found.")];
        };
        let mut guard = slot.lock().await;
        let Some(game) = guard.game.as_mut() else {
            return vec![Reply::plain("No game session found.")];
        };

        game.end();
        info!(
            session_key = %key,
            elapsed_secs = (chrono::Utc::now() - game.started_at()).num_seconds(),
            "game ended"
        );
        vec![Reply::plain(format!(
            "🛑 Game ended. The correct answer was: {}.\nYou can now use /summary.",
            game.secret_person()
        ))]
    }

    /// /summary - full transcript with rationale, chunked for transport.
    ///
    /// Only available once the game is over; the rationale would give the
    /// secret away otherwise.
    pub async fn summary(&self, key: SessionKey) -> Vec<Reply> {
        let Some(slot) = self.registry.get(key) else {
            return vec![Reply::plain("No game session found.")];
        };
        let guard = slot.lock().await;
        let Some(game) = guard.game.as_ref() else {
            return vec![Reply::plain("No game session found.")];
        };
        if !game.is_over() {
            return vec![Reply::plain("🛑 You can only use /summary after the game ends.")];
        }

        let blocks: Vec<String> = game
            .log()
            .iter()
            .map(|entry| match entry {
                LogEntry::Question {
                    question,
                    rationale,
                    answer,
                } => format!(
                    "\nUser question: {question}\nAI thought: {rationale}\nAI answer: {answer}\n"
                ),
                LogEntry::Guess { person, correct } => {
                    let status = if *correct { "✅ Correct" } else { "❌ Wrong" };
                    format!("\n🤔 Guess: {person} — {status}\n")
                }
            })
            .collect();

        let full = format!(
            "📜 Game Summary (Answer: {})\n{}",
            game.secret_person(),
            blocks.join("\n")
        );
        chunker::chunk(&full, self.rules.chunk_chars)
            .into_iter()
            .map(Reply::plain)
            .collect()
    }

    /// /help - the command list.
    pub fn help(&self) -> Vec<Reply> {
        vec![Reply::markdown(
            "🧠 *Guess The Person Bot Commands*\n\n\
             /start - Start a new game\n\
             /ask <question> - Ask a yes/no/relevant question\n\
             /guess <name> - Guess the person (must match a valid name)\n\
             /namelist - Show the list of famous people\n\
             /next - Show the next page of the name list\n\
             /history - Show all your previous questions and answers\n\
             /scorecard - Show the game scorecard\n\
             /end - Manually end the game early\n\
             /summary - View AI thoughts and full log after game ends\n\
             /help - Show this command list",
        )]
    }
}

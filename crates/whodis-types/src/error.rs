use thiserror::Error;

/// Conditions that reject a game action.
///
/// Every variant is expected, player-visible, and non-fatal: the service
/// layer converts each into a direct chat reply. None of these ever
/// terminates the session or the process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no active game")]
    NoActiveSession,

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("question budget exhausted")]
    QuestionsExhausted,

    #[error("guess budget exhausted")]
    GuessesExhausted,

    #[error("empty input")]
    EmptyInput,

    #[error("a game is already running")]
    SessionAlreadyRunning,

    #[error("inference unavailable: {0}")]
    InferenceUnavailable(String),
}

/// Errors from the inference collaborator.
///
/// A failed oracle call aborts the single question it served with no
/// partial log or counter mutation.
#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle request failed: {message}")]
    Request { message: String },

    #[error("oracle returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("oracle response malformed: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_error_display() {
        assert_eq!(GameError::NoActiveSession.to_string(), "no active game");
        assert_eq!(
            GameError::InferenceUnavailable("timed out".to_string()).to_string(),
            "inference unavailable: timed out"
        );
    }

    #[test]
    fn test_oracle_error_display() {
        let err = OracleError::Status {
            status: 503,
            body: "model loading".to_string(),
        };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("model loading"));
    }
}

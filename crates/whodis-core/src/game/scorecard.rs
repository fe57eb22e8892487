//! Scorecard rendering.

/// Remaining-budget display text.
///
/// Pure function of the session counters. Once the question budget is
/// spent the questions line flips to a closed marker; the guess counter
/// is always shown.
pub fn render(questions_used: u32, guesses_left: u32, max_questions: u32) -> String {
    let questions_left = max_questions.saturating_sub(questions_used);

    if questions_left == 0 {
        format!("📊 *Scoreboard:*\n❌ Questions closed.\nGuesses left: *{guesses_left}*")
    } else {
        format!("📊 *Scoreboard:*\nQuestions left: *{questions_left}*\nGuesses left: *{guesses_left}*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_scoreboard_shows_both_counters() {
        let text = render(4, 2, 10);
        assert!(text.contains("Questions left: *6*"));
        assert!(text.contains("Guesses left: *2*"));
        assert!(!text.contains("closed"));
    }

    #[test]
    fn test_exhausted_questions_show_closed_marker() {
        let text = render(10, 3, 10);
        assert!(text.contains("Questions closed."));
        assert!(text.contains("Guesses left: *3*"));
        assert!(!text.contains("Questions left"));
    }

    #[test]
    fn test_overspent_counter_clamps_to_zero() {
        let text = render(12, 0, 10);
        assert!(text.contains("Questions closed."));
        assert!(text.contains("Guesses left: *0*"));
    }
}

//! Prompt construction for the guessing game.

use whodis_types::person::Person;

/// Build the game-rules prompt for one question.
///
/// The model is told to answer with exactly "Yes", "No", or "I'm not
/// sure" and to deflect questions unrelated to the secret identity. The
/// parser in whodis-core reads the verdict off the final line, so the
/// prompt forbids trailing commentary.
pub fn build_prompt(secret: &Person, question: &str) -> String {
    format!(
        r#"
You are playing a guessing game.

You have secretly picked a famous person: {secret}.
The user will ask yes/no questions to try to guess who it is.

Rules:
- Do not explain your reasoning or include internal thoughts.
- Do not use tags like <think>.
- Only respond with: "Yes", "No", or "I'm not sure".
- If the question cannot be answered with "Yes", "No", or "I'm not sure", simply respond with "I'm not sure".
- Ignore questions unrelated to the identity of the person (e.g., general trivia like 'What is the capital of X?', How to solve this equation) and respond with "I'm not sure".

User: {question}
AI:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_secret_and_question() {
        let prompt = build_prompt(&Person::new("Frida Kahlo"), "Is it a painter?");
        assert!(prompt.contains("famous person: Frida Kahlo."));
        assert!(prompt.contains("User: Is it a painter?"));
        assert!(prompt.ends_with("AI:"));
    }

    #[test]
    fn test_prompt_states_the_allowed_answers() {
        let prompt = build_prompt(&Person::new("X"), "q");
        assert!(prompt.contains(r#""Yes", "No", or "I'm not sure""#));
    }
}

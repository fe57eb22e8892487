//! Guess resolution against a game roster.
//!
//! Two passes: an exact pass over normalized forms, which absorbs accent
//! and case variance, then a similarity pass that surfaces the single
//! closest roster entry as a did-you-mean suggestion. A suggestion is
//! advisory only and is never scored as a guess.

use strsim::normalized_levenshtein;
use whodis_types::person::Person;

use crate::name::normalizer::normalize;

/// Minimum similarity score for a suggestion (0.0-1.0).
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// Outcome of resolving a free-text guess against the roster.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The guess names a roster entry exactly (after normalization).
    Matched(Person),
    /// No exact hit, but one entry is close enough to offer back.
    Suggested(Person),
    /// Nothing on the roster comes close.
    NoMatch,
}

/// Resolve a guess to a roster entry, exact then approximate.
///
/// Ties at the same similarity score resolve to the earliest roster entry.
pub fn resolve(guess: &str, roster: &[Person]) -> Resolution {
    let key = normalize(guess);

    for person in roster {
        if normalize(person.as_str()) == key {
            return Resolution::Matched(person.clone());
        }
    }

    let mut best: Option<(&Person, f64)> = None;
    for person in roster {
        let score = normalized_levenshtein(&key, &normalize(person.as_str()));
        if score >= SUGGESTION_THRESHOLD && best.is_none_or(|(_, s)| score > s) {
            best = Some((person, score));
        }
    }

    match best {
        Some((person, _)) => Resolution::Suggested(person.clone()),
        None => Resolution::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<Person> {
        names.iter().map(|n| Person::new(*n)).collect()
    }

    #[test]
    fn test_every_roster_entry_matches_itself() {
        let r = roster(&["Alice Walker", "José Mourinho", "Björk"]);
        for person in &r {
            assert_eq!(resolve(person.as_str(), &r), Resolution::Matched(person.clone()));
        }
    }

    #[test]
    fn test_exact_match_ignores_accents_and_case() {
        let r = roster(&["José Mourinho", "Ariana Grande"]);
        assert_eq!(
            resolve("jose mourinho", &r),
            Resolution::Matched(Person::new("José Mourinho"))
        );
        assert_eq!(
            resolve("JOSÉ MOURINHO", &r),
            Resolution::Matched(Person::new("José Mourinho"))
        );
    }

    #[test]
    fn test_typo_yields_suggestion_not_match() {
        let r = roster(&["Leonardo DiCaprio", "Lionel Messi"]);
        match resolve("leonardo dicapro", &r) {
            Resolution::Suggested(p) => assert_eq!(p.as_str(), "Leonardo DiCaprio"),
            other => panic!("expected suggestion, got {other:?}"),
        }
    }

    #[test]
    fn test_gibberish_yields_no_match() {
        let r = roster(&["Alice", "Bob", "Carol"]);
        assert_eq!(resolve("xzqwvjkp", &r), Resolution::NoMatch);
    }

    #[test]
    fn test_exact_tie_breaks_by_roster_order() {
        // Two entries normalizing identically: the first wins.
        let r = roster(&["José", "Jose"]);
        assert_eq!(resolve("jose", &r), Resolution::Matched(Person::new("José")));
    }

    #[test]
    fn test_suggestion_keeps_single_best() {
        let r = roster(&["Serena Williams", "Venus Williams"]);
        match resolve("serena wiliams", &r) {
            Resolution::Suggested(p) => assert_eq!(p.as_str(), "Serena Williams"),
            other => panic!("expected suggestion, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_roster() {
        assert_eq!(resolve("anyone", &[]), Resolution::NoMatch);
    }
}

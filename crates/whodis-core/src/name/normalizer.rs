//! Display-name canonicalization.
//!
//! A comparison key is accent- and case-insensitive: the name is
//! NFD-decomposed, combining marks are dropped, and the result is
//! lowercased. Keys are used for roster membership tests and guess
//! resolution, never for display.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonical comparison key for a display name.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(normalize("JOSE"), "jose");
        assert_eq!(normalize("jose"), "jose");
        assert_eq!(normalize("JoSe"), "jose");
    }

    #[test]
    fn test_diacritics_stripped() {
        assert_eq!(normalize("José"), "jose");
        assert_eq!(normalize("Beyoncé"), "beyonce");
        assert_eq!(normalize("Björk Guðmundsdóttir"), normalize("Bjork Guðmundsdottir"));
    }

    #[test]
    fn test_spec_equivalence_triple() {
        assert_eq!(normalize("José"), normalize("jose"));
        assert_eq!(normalize("jose"), normalize("JOSE"));
    }

    #[test]
    fn test_idempotent() {
        for name in ["José Mourinho", "Dvořák", "ALICE", "東京"] {
            let once = normalize(name);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_empty_and_whitespace_preserved() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("Mary Jane"), "mary jane");
    }

    #[test]
    fn test_base_letters_untouched() {
        // Only combining marks are dropped; base characters survive.
        assert_eq!(normalize("naïve"), "naive");
        assert_eq!(normalize("東京"), "東京");
    }
}

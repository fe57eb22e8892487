//! Person display names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A person's display name exactly as it appears in the roster.
///
/// The raw string is never mutated. Identity comparisons go through the
/// normalizer in `whodis-core`, never through raw byte equality, so two
/// spellings that differ only in accents or case are the same person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person(String);

impl Person {
    /// Wrap a display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The display string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Person {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_display_is_raw() {
        let p = Person::new("José Mourinho");
        assert_eq!(p.to_string(), "José Mourinho");
        assert_eq!(p.as_str(), "José Mourinho");
    }

    #[test]
    fn test_person_serde_transparent() {
        let p = Person::new("Alice");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "\"Alice\"");
        let parsed: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn test_person_ordering_is_raw_string_order() {
        let mut people = vec![Person::new("Carol"), Person::new("Alice"), Person::new("Bob")];
        people.sort();
        let names: Vec<&str> = people.iter().map(Person::as_str).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }
}

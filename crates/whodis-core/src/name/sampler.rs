//! Per-game roster sampling.
//!
//! Each game gets its own roster snapshot: the whole corpus when it fits
//! under the cap, otherwise a uniform sample of `cap` distinct names.
//! Either way the result is sorted ascending by raw display string, so
//! listing order never leaks selection order and the secret person cannot
//! be inferred from position.

use rand::Rng;
use rand::seq::IndexedRandom;
use whodis_types::person::Person;

/// Derive the per-game roster from the deduplicated corpus.
pub fn sample_roster<R: Rng + ?Sized>(corpus: &[String], cap: usize, rng: &mut R) -> Vec<Person> {
    let mut names: Vec<&String> = if corpus.len() <= cap {
        corpus.iter().collect()
    } else {
        corpus.choose_multiple(rng, cap).collect()
    };
    names.sort();
    names.iter().map(|n| Person::new(n.as_str())).collect()
}

/// Pick the secret person for a game, uniformly from its roster.
///
/// `None` only for an empty roster, which the startup roster validation
/// already rules out.
pub fn pick_secret<R: Rng + ?Sized>(roster: &[Person], rng: &mut R) -> Option<Person> {
    roster.choose(rng).cloned()
}

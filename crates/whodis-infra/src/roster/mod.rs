//! Roster loading.
//!
//! The corpus of candidate names lives in a UTF-8 text file, one display
//! name per line. Lines are trimmed, blanks dropped, duplicates removed.
//! Duplicate detection uses the normalized comparison key, so "José" and
//! "Jose" are one person and the first spelling wins. An unreadable or
//! empty roster is fatal at startup: the game cannot run without one.
//! This is the single error path that halts the process instead of
//! becoming a chat reply.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use whodis_core::name::normalizer::normalize;

/// Errors loading the roster file.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("roster file '{path}' contains no names")]
    Empty { path: String },
}

/// Load and deduplicate the full corpus of candidate names.
///
/// Order of the returned names is irrelevant to callers; the per-game
/// sampler sorts its own snapshot.
pub async fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<String>, RosterError> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RosterError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::new();
    for line in content.lines() {
        let name = line.trim();
        if name.is_empty() {
            continue;
        }
        if seen.insert(normalize(name)) {
            names.push(name.to_string());
        }
    }

    if names.is_empty() {
        return Err(RosterError::Empty {
            path: path.display().to_string(),
        });
    }

    tracing::info!(count = names.len(), path = %path.display(), "roster loaded");
    Ok(names)
}

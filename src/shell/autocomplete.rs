//! Prefix autocompletion over the command vocabulary
//!
//! Matching is case-sensitive: it runs on the raw buffer before submission,
//! where no lower-casing has happened yet.

use super::command::VOCABULARY;

/// Result of completing a partial input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one command matches; the caller replaces the buffer with it.
    Unique(&'static str),
    /// Zero or several matches; the buffer stays as typed and the caller
    /// lists the candidates.
    Ambiguous(Vec<&'static str>),
}

/// Every command name starting with `partial`, in vocabulary order.
pub fn matches(partial: &str) -> Vec<&'static str> {
    VOCABULARY
        .iter()
        .copied()
        .filter(|name| name.starts_with(partial))
        .collect()
}

/// Complete a partial input against the vocabulary.
pub fn complete(partial: &str) -> Completion {
    let candidates = matches(partial);
    if candidates.len() == 1 {
        Completion::Unique(candidates[0])
    } else {
        Completion::Ambiguous(candidates)
    }
}

//! Rejection reasons and loading errors.
//!
//! A [`Rejection`] is not a failure of the engine: it is the ordinary outcome of
//! a guess that cannot be submitted, and its `Display` output is the exact text
//! shown to the player.

use crate::locale::ordinal;

/// Why a guess was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Not in word list")]
    NotInWordList,

    #[error("Not enough letters")]
    NotEnoughLetters,

    /// The guess tree has not been handed to the validator yet.
    #[error("Wait a sec, loading words...")]
    NotReady,

    /// A "right place" letter from an earlier row is missing. `position` is 0-indexed.
    #[error("{} letter must be {letter}", ordinal(.position + 1))]
    MustBe { position: usize, letter: String },

    /// "Wrong place" letters from earlier rows that the guess does not use.
    #[error("Guess must contain {}", .letters.join(", "))]
    MustContain { letters: Vec<String> },
}

/// Errors raised while configuring or loading a lexicon.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("Unknown locale: \"{0}\"")]
    UnknownLocale(String),

    #[error("Could not read word list {path}: {source}")]
    WordList {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Word list for {0} is empty")]
    EmptyWordList(String),
}

//! # Wordle Lexicon
//!
//! A locale-aware dictionary for a five-letter word game.
//!
//! It answers two questions about a guess: is it a real word in the active
//! language, and does it respect the hints revealed by earlier guesses (hard
//! mode)? Words live in a prefix tree per locale whose nodes compare
//! characters after case folding. A single board tile may accept several
//! characters (`S` or `Š`), and lookups walk every acceptable branch while
//! checking the hard-mode hints, reporting the most relevant reason when
//! nothing matches.

pub mod character;
pub mod constraints;
pub mod error;
pub mod feedback;
pub mod lexicon;
pub mod locale;
pub mod logging;
pub mod multi_character;
pub mod tree;
pub mod validator;
pub mod word;

pub use character::CharacterModel;
pub use constraints::{Constraints, DeepestReason};
pub use error::{LexiconError, Rejection};
pub use feedback::{RevealState, RowHistory, RowModel};
pub use lexicon::Lexicon;
pub use locale::Locale;
pub use multi_character::MultiCharacterModel;
pub use tree::WordTree;
pub use validator::WordValidator;
pub use word::WordModel;

/// Word length for every supported locale
pub const WORD_LENGTH: usize = 5;

/// Rows on a board
pub const MAX_ROWS: usize = 6;

/// Parse a newline-delimited word list.
///
/// Lines are trimmed; empty lines and lines that are not [`WORD_LENGTH`]
/// letters long are skipped.
pub fn parse_word_list(text: &str, locale: Locale) -> Vec<WordModel> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let word = WordModel::new(line, locale);
            if word.len() == WORD_LENGTH {
                Some(word)
            } else {
                log::warn!("Skipping \"{}\" in {} word list: {} letters", line, locale, word.len());
                None
            }
        })
        .collect()
}

/// Read and parse a word list file.
pub fn load_word_list(path: &std::path::Path, locale: Locale) -> Result<Vec<WordModel>, LexiconError> {
    let text = std::fs::read_to_string(path).map_err(|source| LexiconError::WordList {
        path: path.display().to_string(),
        source,
    })?;

    let words = parse_word_list(&text, locale);
    if words.is_empty() {
        return Err(LexiconError::EmptyWordList(path.display().to_string()));
    }

    log::info!("Read {} words from {}", words.len(), path.display());
    Ok(words)
}

//! Deciding whether a typed row can be submitted.

use std::sync::Arc;

use log::debug;

use crate::error::Rejection;
use crate::feedback::RowModel;
use crate::locale::Locale;
use crate::tree::WordTree;
use crate::word::WordModel;
use crate::WORD_LENGTH;

/// Gatekeeper between the board and the guess tree of one locale.
///
/// The tree is usually built on a background thread; until
/// [`WordValidator::initialize`] hands it over, every submission is refused
/// with [`Rejection::NotReady`].
#[derive(Debug, Clone)]
pub struct WordValidator {
    locale: Locale,
    answers: Vec<WordModel>,
    guess_tree: Option<Arc<WordTree>>,
}

impl WordValidator {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            answers: Vec::new(),
            guess_tree: None,
        }
    }

    /// A ready validator whose answers and guesses are both `words`.
    pub fn with_words(words: &[&str], locale: Locale) -> Self {
        let models: Vec<WordModel> = words.iter().map(|w| WordModel::new(w, locale)).collect();
        let tree = WordTree::from_words(models.iter().cloned(), locale);
        let mut validator = Self::new(locale);
        validator.initialize(models, Arc::new(tree));
        validator
    }

    pub fn initialize(&mut self, answers: Vec<WordModel>, guess_tree: Arc<WordTree>) {
        debug!(
            "{} validator ready: {} answers, {} guesses",
            self.locale,
            answers.len(),
            guess_tree.count()
        );
        self.answers = answers;
        self.guess_tree = Some(guess_tree);
    }

    pub fn is_ready(&self) -> bool {
        self.guess_tree.is_some()
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn answers(&self) -> &[WordModel] {
        &self.answers
    }

    /// Decide whether `word` may be submitted as a guess for `expected`.
    ///
    /// On success returns the word to place on the board: the answer itself
    /// when the guess matches it (so an ambiguous guess resolves to the
    /// answer's spelling), otherwise the stored spelling from the guess tree.
    /// With `must_match_known` (hard mode) the hints of `rows` are enforced.
    pub fn can_submit(
        &self,
        word: &WordModel,
        expected: &WordModel,
        rows: &[RowModel],
        must_match_known: bool,
    ) -> Result<WordModel, Rejection> {
        if word == expected {
            return Ok(expected.clone());
        }

        self.lookup(word, must_match_known.then_some(rows))
    }

    /// Submit the typed word of `row` against the earlier `history`.
    ///
    /// On success the row takes the spelling returned by
    /// [`WordValidator::can_submit`] and is marked submitted. On rejection the
    /// row keeps its typed word and its `attempt_count` goes up by one.
    pub fn submit(&self, row: &mut RowModel, history: &[RowModel], must_match_known: bool) -> Result<(), Rejection> {
        match self.can_submit(&row.word, &row.expected, history, must_match_known) {
            Ok(word) => {
                row.word = word;
                row.is_submitted = true;
                Ok(())
            }
            Err(reason) => {
                row.attempt_count += 1;
                debug!("{:?} rejected (attempt {}): {}", row.word, row.attempt_count, reason);
                Err(reason)
            }
        }
    }

    /// Whether `word` is in the guess list, ignoring any hints.
    pub fn validate(&self, word: &WordModel) -> Result<WordModel, Rejection> {
        self.lookup(word, None)
    }

    fn lookup(&self, word: &WordModel, rows: Option<&[RowModel]>) -> Result<WordModel, Rejection> {
        let Some(guess_tree) = &self.guess_tree else {
            return Err(Rejection::NotReady);
        };

        // checked here so a stray short line in a word list can never match
        if word.len() != WORD_LENGTH {
            return Err(Rejection::NotEnoughLetters);
        }

        guess_tree.lookup(word, rows)
    }
}

//! Reveal states for submitted rows.
//!
//! This module diffs a guessed word against the expected answer and produces
//! the per-tile feedback (green/yellow/gray) that hard-mode constraints are
//! built from.

use crate::multi_character::MultiCharacterModel;
use crate::word::WordModel;
use crate::{MAX_ROWS, WORD_LENGTH};

/// Feedback shown on a single tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealState {
    /// Row not submitted, tile empty
    MaskedEmpty,
    /// Row not submitted, tile typed
    MaskedFilled,
    /// Letter not in the answer, or all its occurrences accounted for (gray)
    WrongLetter,
    /// Letter in the answer but elsewhere (yellow)
    WrongPlace,
    /// Letter in the correct position (green)
    RightPlace,
}

impl RevealState {
    pub fn is_masked(self) -> bool {
        matches!(self, RevealState::MaskedEmpty | RevealState::MaskedFilled)
    }

    /// Convert to a character for display
    pub fn to_char(self) -> char {
        match self {
            RevealState::RightPlace => '🟩',
            RevealState::WrongPlace => '🟨',
            RevealState::WrongLetter => '⬛',
            RevealState::MaskedEmpty | RevealState::MaskedFilled => '⬜',
        }
    }
}

/// One row of the board: what was typed, what the answer is, and whether the
/// row has been submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub word: WordModel,
    pub expected: WordModel,
    pub is_submitted: bool,
    /// Rejected submission attempts of this row.
    pub attempt_count: usize,
}

impl RowModel {
    /// An empty, unsubmitted row.
    pub fn new(expected: WordModel) -> Self {
        Self {
            word: WordModel::default(),
            expected,
            is_submitted: false,
            attempt_count: 0,
        }
    }

    pub fn with_word(word: WordModel, expected: WordModel, is_submitted: bool) -> Self {
        Self {
            word,
            expected,
            is_submitted,
            attempt_count: 0,
        }
    }

    pub fn submitted(word: WordModel, expected: WordModel) -> Self {
        Self::with_word(word, expected, true)
    }

    /// How many more times the letter at `at` may still be revealed as
    /// "wrong place": occurrences in the answer, minus those already matched
    /// in place, minus earlier misplaced uses of the same letter.
    pub fn yellow_budget(&self, at: usize) -> i32 {
        let Some(tile) = self.word.get(at) else {
            return 0;
        };

        let mut total = 0;
        let mut known = 0;
        let mut known_until = 0;

        for (ix, expected) in self.expected.iter().enumerate() {
            let guessed_here = self.word.get(ix).is_some_and(|t| t == tile);
            if expected == tile {
                total += 1;
                if guessed_here {
                    known += 1;
                }
            } else if ix < at && guessed_here {
                known_until += 1;
            }
        }

        total - known - known_until
    }

    /// Feedback for the tile at `ix`.
    ///
    /// Panics if the row is submitted but `ix` is outside the guess or the answer.
    pub fn reveal_state(&self, ix: usize) -> RevealState {
        if !self.is_submitted {
            return if self.word.get(ix).is_some() {
                RevealState::MaskedFilled
            } else {
                RevealState::MaskedEmpty
            };
        }

        assert!(
            ix < self.word.len() && ix < self.expected.len(),
            "tile {} is outside a submitted row",
            ix
        );

        // Greens always win; a correct letter never shows as yellow.
        if self.word[ix] == self.expected[ix] {
            return RevealState::RightPlace;
        }

        if self.expected.contains(&self.word[ix]) && self.yellow_budget(ix) > 0 {
            return RevealState::WrongPlace;
        }

        RevealState::WrongLetter
    }

    pub fn reveal_states(&self) -> [RevealState; WORD_LENGTH] {
        let mut states = [RevealState::MaskedEmpty; WORD_LENGTH];
        for (ix, state) in states.iter_mut().enumerate() {
            if !self.is_submitted || ix < self.word.len() {
                *state = self.reveal_state(ix);
            }
        }
        states
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.reveal_states().iter().map(|s| s.to_char()).collect()
    }
}

/// Queries over the ordered rows of one game.
pub trait RowHistory {
    fn submitted_count(&self) -> usize;
    fn is_won(&self, expected: &WordModel) -> bool;
    /// Won, or every row used up.
    fn is_finished(&self, expected: &WordModel) -> bool;
    /// Whether every submitted row respected the hints revealed before it.
    fn check_hard_mode(&self, expected: &WordModel) -> bool;
}

impl RowHistory for [RowModel] {
    fn submitted_count(&self) -> usize {
        self.iter().filter(|r| r.is_submitted).count()
    }

    fn is_won(&self, expected: &WordModel) -> bool {
        self.iter().any(|r| r.is_submitted && r.word == *expected)
    }

    fn is_finished(&self, expected: &WordModel) -> bool {
        self.is_won(expected) || self.submitted_count() >= MAX_ROWS
    }

    fn check_hard_mode(&self, expected: &WordModel) -> bool {
        let mut wrong_places: Vec<MultiCharacterModel> = Vec::new();
        let mut right_places = [false; WORD_LENGTH];

        for row in self {
            if !row.is_submitted {
                break;
            }

            // hints from earlier rows first
            if !wrong_places.iter().all(|tile| row.word.contains(tile)) {
                return false;
            }

            for ix in 0..row.word.len().min(WORD_LENGTH) {
                match row.reveal_state(ix) {
                    RevealState::WrongPlace => {
                        wrong_places.push(MultiCharacterModel::single(row.word[ix].first().clone()))
                    },
                    RevealState::RightPlace => right_places[ix] = true,
                    _ => {}
                }

                if right_places[ix] && expected.get(ix) != Some(&row.word[ix]) {
                    return false;
                }
            }
        }

        true
    }
}

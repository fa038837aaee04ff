//! Hard-mode constraints derived from previously submitted rows.

use crate::character::CharacterModel;
use crate::error::Rejection;
use crate::feedback::{RevealState, RowModel};
use crate::WORD_LENGTH;

/// Obligations every new guess must meet in hard mode.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    /// Letters that must be in specific positions (green)
    exact_matches_pending: [Option<CharacterModel>; WORD_LENGTH],
    /// Letters that must appear somewhere in the word (yellow), first-seen order
    unaccounted_for: Vec<CharacterModel>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the hints of every submitted row. Unsubmitted rows are ignored.
    ///
    /// Panics if a submitted row has an ambiguous tile where it revealed a
    /// green or yellow: such rows must be disambiguated before submission.
    pub fn from_rows(rows: &[RowModel]) -> Self {
        let mut constraints = Self::new();

        for row in rows.iter().filter(|r| r.is_submitted) {
            for ix in 0..row.word.len().min(WORD_LENGTH) {
                let state = row.reveal_state(ix);
                if !matches!(state, RevealState::WrongPlace | RevealState::RightPlace) {
                    continue;
                }

                let tile = &row.word[ix];
                assert!(
                    tile.is_single(),
                    "submitted rows must have exactly one character per tile, got {:?}",
                    tile
                );
                let character = tile.first().clone();

                if state == RevealState::RightPlace {
                    constraints.exact_matches_pending[ix] = Some(character);
                } else if !constraints.unaccounted_for.contains(&character) {
                    constraints.unaccounted_for.push(character);
                }
            }
        }

        constraints
    }

    pub fn exact_match(&self, position: usize) -> Option<&CharacterModel> {
        self.exact_matches_pending.get(position).and_then(Option::as_ref)
    }

    pub fn unaccounted_for(&self) -> &[CharacterModel] {
        &self.unaccounted_for
    }

    pub fn is_empty(&self) -> bool {
        self.exact_matches_pending.iter().all(Option::is_none) && self.unaccounted_for.is_empty()
    }

    /// Whether `candidate` may sit at `position`. A refusal is offered to
    /// `reason`, which keeps it only if it is the deepest so far.
    pub fn can_proceed(&self, candidate: &CharacterModel, position: usize, reason: &mut DeepestReason) -> bool {
        match self.exact_match(position) {
            None => true,
            Some(expected) if expected == candidate => true,
            Some(expected) => {
                reason.record_position(position, expected);
                false
            }
        }
    }

    /// Whether a complete path uses every "wrong place" letter.
    pub fn can_accept(&self, path: &[&CharacterModel], reason: &mut DeepestReason) -> bool {
        let missing: Vec<&CharacterModel> = self
            .unaccounted_for
            .iter()
            .filter(|c| !path.iter().any(|p| p == c))
            .collect();

        if missing.is_empty() {
            return true;
        }

        reason.record_missing(&missing);
        false
    }
}

/// The rejection reason accumulated over one lookup.
///
/// Several branches of an ambiguous guess can fail for different reasons.
/// Positional failures only replace the current reason when they happen
/// deeper in the tree. A missing-letter failure is recorded only if nothing
/// was recorded before, and then outranks every positional failure.
#[derive(Debug, Default)]
pub struct DeepestReason {
    depth: Option<usize>,
    reason: Option<Rejection>,
}

impl DeepestReason {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> Option<usize> {
        self.depth
    }

    pub fn reason(&self) -> Option<&Rejection> {
        self.reason.as_ref()
    }

    fn record_position(&mut self, position: usize, expected: &CharacterModel) {
        if self.depth.is_some_and(|d| position <= d) {
            return;
        }
        self.depth = Some(position);
        self.reason = Some(Rejection::MustBe {
            position,
            letter: expected.display_value(),
        });
    }

    fn record_missing(&mut self, missing: &[&CharacterModel]) {
        if self.reason.is_some() {
            return;
        }
        self.depth = Some(WORD_LENGTH);
        self.reason = Some(Rejection::MustContain {
            letters: missing.iter().map(|c| c.display_value()).collect(),
        });
    }

    /// The reason to show the player; "Not in word list" if nothing specific failed.
    pub fn into_rejection(self) -> Rejection {
        self.reason.unwrap_or(Rejection::NotInWordList)
    }
}

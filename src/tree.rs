//! Prefix tree of the five-letter words of one locale.
//!
//! The tree is an arena of nodes. Each node maps a child's character to the
//! child's index; the map key is the character exactly as it was inserted, and
//! it is found through the folded equality of [`CharacterModel`]. All words have
//! the same length, so every node at depth [`WORD_LENGTH`] ends a word and no
//! terminal flag is stored.
//!
//! The tree is built single-threaded and read-only afterwards. A lookup only
//! borrows it immutably, so a tree shared through an `Arc` can be queried from
//! any number of threads at once; it cannot be queried while an insert holds
//! the `&mut` borrow.

use std::collections::HashMap;

use log::{debug, trace};

use crate::character::CharacterModel;
use crate::constraints::{Constraints, DeepestReason};
use crate::error::Rejection;
use crate::feedback::RowModel;
use crate::locale::Locale;
use crate::word::WordModel;
use crate::WORD_LENGTH;

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<CharacterModel, usize>,
}

#[derive(Debug, Clone)]
pub struct WordTree {
    nodes: Vec<Node>,
    locale: Locale,
    count: usize,
}

impl WordTree {
    pub fn new(locale: Locale) -> Self {
        Self {
            nodes: vec![Node::default()],
            locale,
            count: 0,
        }
    }

    /// Build a tree from dictionary words. Words of the wrong length are skipped.
    ///
    /// Panics if any word is ambiguous.
    pub fn from_words<I>(words: I, locale: Locale) -> Self
    where
        I: IntoIterator<Item = WordModel>,
    {
        let mut tree = Self::new(locale);
        for word in words {
            tree.insert(&word);
        }
        debug!(
            "Built {} tree: {} words, {} nodes",
            locale,
            tree.count,
            tree.nodes.len()
        );
        tree
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Number of successful inserts. Inserting the same word twice counts twice.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a dictionary word spelled in this tree's locale.
    pub fn insert_str(&mut self, word: &str) -> bool {
        self.insert(&WordModel::new(word, self.locale))
    }

    /// Insert a word, sharing any prefix already in the tree.
    ///
    /// Returns `false` without touching the tree if the word is not
    /// [`WORD_LENGTH`] tiles long. Panics if the word is ambiguous: only
    /// concrete dictionary words can be stored.
    pub fn insert(&mut self, word: &WordModel) -> bool {
        if word.len() != WORD_LENGTH {
            return false;
        }
        assert!(
            word.is_unambiguous(),
            "only unambiguous words can be inserted, got {:?}",
            word
        );

        let mut node_idx = 0;
        for tile in word {
            let character = tile.first();
            node_idx = match self.nodes[node_idx].children.get(character) {
                Some(&idx) => idx,
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node_idx].children.insert(character.clone(), new_idx);
                    new_idx
                }
            };
        }

        self.count += 1;
        true
    }

    /// Plain membership check in this tree's locale.
    pub fn contains(&self, word: &str) -> Option<WordModel> {
        self.lookup(&WordModel::new(word, self.locale), None).ok()
    }

    /// Find a stored word matching `word`, optionally also satisfying the
    /// hard-mode hints of `rows`.
    ///
    /// Ambiguous tiles are tried in their given order, depth first, and the
    /// first complete match wins. The result is always the stored,
    /// unambiguous spelling. A word that is not [`WORD_LENGTH`] long is
    /// simply not found.
    pub fn lookup(&self, word: &WordModel, rows: Option<&[RowModel]>) -> Result<WordModel, Rejection> {
        if word.len() != WORD_LENGTH {
            trace!("{:?} has {} tiles, not in word list", word, word.len());
            return Err(Rejection::NotInWordList);
        }

        let constraints = rows.map(Constraints::from_rows);
        let mut reason = DeepestReason::new();
        let mut path = Vec::with_capacity(WORD_LENGTH);

        match self.search(word, constraints.as_ref(), 0, &mut path, &mut reason) {
            Some(found) => Ok(found),
            None => {
                let rejection = reason.into_rejection();
                trace!("{:?} rejected: {}", word, rejection);
                Err(rejection)
            }
        }
    }

    fn search<'a>(
        &'a self,
        word: &WordModel,
        constraints: Option<&Constraints>,
        node_idx: usize,
        path: &mut Vec<&'a CharacterModel>,
        reason: &mut DeepestReason,
    ) -> Option<WordModel> {
        let depth = path.len();
        if depth == WORD_LENGTH {
            if let Some(constraints) = constraints {
                if !constraints.can_accept(path, reason) {
                    return None;
                }
            }
            return Some(WordModel::from_characters(path.iter().map(|c| (*c).clone()).collect()));
        }

        let node = &self.nodes[node_idx];
        for candidate in word[depth].values() {
            let Some((stored, &child_idx)) = node.children.get_key_value(candidate) else {
                continue;
            };

            if let Some(constraints) = constraints {
                if !constraints.can_proceed(candidate, depth, reason) {
                    continue;
                }
            }

            path.push(stored);
            if let Some(found) = self.search(word, constraints, child_idx, path, reason) {
                return Some(found);
            }
            path.pop();
        }

        None
    }
}

//! Word trees for every loaded locale.

use std::collections::HashMap;
use std::sync::Arc;

use log::info;
use rayon::prelude::*;

use crate::error::Rejection;
use crate::feedback::RowModel;
use crate::locale::Locale;
use crate::tree::WordTree;
use crate::word::WordModel;

/// One [`WordTree`] per locale.
///
/// Trees are behind `Arc` so they can be handed to validators and queried
/// from other threads once loading is done.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    trees: HashMap<Locale, Arc<WordTree>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the trees of several locales in parallel.
    pub fn build(lists: Vec<(Locale, Vec<WordModel>)>) -> Self {
        let trees: HashMap<Locale, Arc<WordTree>> = lists
            .into_par_iter()
            .map(|(locale, words)| {
                let tree = WordTree::from_words(words, locale);
                info!("Loaded {} words for {}", tree.count(), locale);
                (locale, Arc::new(tree))
            })
            .collect();
        Self { trees }
    }

    /// Add a dictionary word to the tree of `locale`, creating the tree if needed.
    ///
    /// Returns `false` for words that are not five letters long. If the tree
    /// has already been handed out, the lexicon gets its own copy first.
    pub fn insert(&mut self, word: &str, locale: Locale) -> bool {
        let tree = self
            .trees
            .entry(locale)
            .or_insert_with(|| Arc::new(WordTree::new(locale)));
        Arc::make_mut(tree).insert_str(word)
    }

    /// Look a word up in the tree of `locale`, enforcing the hints of
    /// `history` when given. Locales without a tree contain no words.
    pub fn lookup(
        &self,
        word: &WordModel,
        locale: Locale,
        history: Option<&[RowModel]>,
    ) -> Result<WordModel, Rejection> {
        match self.trees.get(&locale) {
            Some(tree) => tree.lookup(word, history),
            None => Err(Rejection::NotInWordList),
        }
    }

    pub fn contains(&self, word: &str, locale: Locale) -> bool {
        self.lookup(&WordModel::new(word, locale), locale, None).is_ok()
    }

    pub fn tree(&self, locale: Locale) -> Option<Arc<WordTree>> {
        self.trees.get(&locale).cloned()
    }

    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.trees.keys().copied().collect();
        locales.sort();
        locales
    }

    /// Total successful inserts over all locales.
    pub fn word_count(&self) -> usize {
        self.trees.values().map(|t| t.count()).sum()
    }
}

//! A tile that may stand for several characters.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::character::CharacterModel;
use crate::locale::Locale;

/// A non-empty, ordered set of characters one tile accepts, e.g. `S` or `Š`.
///
/// Two tiles are equal when their sets share at least one character. This is
/// **not** an equivalence relation: `{s, š}` equals `{s}` and `{š}`, but `{s}`
/// does not equal `{š}`. Never assume transitivity, and never replace the
/// pairwise check with a lookup through some canonical key.
#[derive(Clone)]
pub struct MultiCharacterModel {
    values: Vec<CharacterModel>,
}

impl MultiCharacterModel {
    /// Panics if `values` is empty or mixes locales.
    pub fn new(values: Vec<CharacterModel>) -> Self {
        assert!(!values.is_empty(), "a tile must have at least one character");
        let locale = values[0].locale();
        assert!(
            values.iter().all(|c| c.locale() == locale),
            "all characters of a tile must share a locale, got {:?}",
            values.iter().map(|c| c.locale().identifier()).collect::<Vec<_>>()
        );

        let mut unique: Vec<CharacterModel> = Vec::with_capacity(values.len());
        for value in values {
            if !unique.contains(&value) {
                unique.push(value);
            }
        }
        Self { values: unique }
    }

    pub fn single(value: CharacterModel) -> Self {
        Self { values: vec![value] }
    }

    pub fn from_char(value: char, locale: Locale) -> Self {
        Self::single(CharacterModel::from_char(value, locale))
    }

    /// Every grapheme of `values` becomes one member: `"sš"` is the tile `{s, š}`.
    pub fn from_letters(values: &str, locale: Locale) -> Self {
        Self::new(
            values
                .graphemes(true)
                .map(|g| CharacterModel::new(g, locale))
                .collect(),
        )
    }

    /// The tile for `letter` together with its diacritic complement, if the
    /// locale defines one.
    pub fn with_complements(letter: &str, locale: Locale) -> Self {
        let mut values = vec![CharacterModel::new(letter, locale)];
        if let Some(other) = locale.complement(letter) {
            values.push(CharacterModel::new(other, locale));
        }
        Self::new(values)
    }

    pub fn values(&self) -> &[CharacterModel] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: tiles are never empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_single(&self) -> bool {
        self.values.len() == 1
    }

    pub fn first(&self) -> &CharacterModel {
        &self.values[0]
    }

    pub fn contains(&self, value: &CharacterModel) -> bool {
        self.values.contains(value)
    }

    pub fn locale(&self) -> Locale {
        self.values[0].locale()
    }

    pub fn display_value(&self) -> String {
        self.first().display_value()
    }
}

impl PartialEq for MultiCharacterModel {
    fn eq(&self, other: &Self) -> bool {
        self.values.iter().any(|value| other.contains(value))
    }
}

impl From<CharacterModel> for MultiCharacterModel {
    fn from(value: CharacterModel) -> Self {
        Self::single(value)
    }
}

impl fmt::Debug for MultiCharacterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner: Vec<String> = self.values.iter().map(|c| format!("{:?}", c)).collect();
        write!(f, "[{}]", inner.join("|"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_are_deduplicated_by_fold() {
        let tile = MultiCharacterModel::from_letters("sS", Locale::LvLv);
        assert!(tile.is_single());
    }

    #[test]
    fn test_decomposed_diacritic_is_one_member() {
        // "s" followed by a combining caron
        let tile = MultiCharacterModel::from_letters("s\u{030C}", Locale::LvLv);
        assert_eq!(tile.len(), 1);
    }

    #[test]
    #[should_panic]
    fn test_empty_tile_panics() {
        MultiCharacterModel::new(vec![]);
    }
}

//! Words as sequences of tiles.

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

use crate::character::CharacterModel;
use crate::locale::Locale;
use crate::multi_character::MultiCharacterModel;
use crate::WORD_LENGTH;

/// An ordered sequence of tiles.
///
/// A dictionary word or a typed guess has one character per tile. A word is
/// "unambiguous" when that holds for every tile; only unambiguous words can be
/// stored in a [`WordTree`](crate::tree::WordTree). Length is not enforced
/// here: consumers reject anything that is not [`WORD_LENGTH`] long.
#[derive(Clone, Default)]
pub struct WordModel {
    tiles: Vec<MultiCharacterModel>,
}

impl WordModel {
    /// One single-character tile per grapheme of `text`.
    pub fn new(text: &str, locale: Locale) -> Self {
        Self {
            tiles: text
                .graphemes(true)
                .map(|g| MultiCharacterModel::single(CharacterModel::new(g, locale)))
                .collect(),
        }
    }

    /// Like [`WordModel::new`], but every letter with a diacritic complement
    /// accepts both forms. This is how diacritic-insensitive input is typed.
    pub fn simplified(text: &str, locale: Locale) -> Self {
        Self {
            tiles: text
                .graphemes(true)
                .map(|g| MultiCharacterModel::with_complements(g, locale))
                .collect(),
        }
    }

    pub fn from_tiles(tiles: Vec<MultiCharacterModel>) -> Self {
        Self { tiles }
    }

    pub fn from_characters(characters: Vec<CharacterModel>) -> Self {
        Self {
            tiles: characters.into_iter().map(MultiCharacterModel::single).collect(),
        }
    }

    pub fn tiles(&self) -> &[MultiCharacterModel] {
        &self.tiles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MultiCharacterModel> {
        self.tiles.iter()
    }

    pub fn get(&self, ix: usize) -> Option<&MultiCharacterModel> {
        self.tiles.get(ix)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn is_unambiguous(&self) -> bool {
        self.tiles.iter().all(MultiCharacterModel::is_single)
    }

    /// `None` for an empty word.
    pub fn locale(&self) -> Option<Locale> {
        self.tiles.first().map(MultiCharacterModel::locale)
    }

    /// The word spelled with the first member of every tile, in its raw casing.
    pub fn display_value(&self) -> String {
        self.tiles.iter().map(|t| t.first().value()).collect()
    }

    pub fn contains(&self, tile: &MultiCharacterModel) -> bool {
        self.tiles.iter().any(|t| t == tile)
    }

    /// Appends a tile unless the word is already full. Returns whether it was added.
    pub fn push(&mut self, tile: MultiCharacterModel) -> bool {
        if self.tiles.len() >= WORD_LENGTH {
            return false;
        }
        self.tiles.push(tile);
        true
    }

    pub fn pop(&mut self) -> Option<MultiCharacterModel> {
        self.tiles.pop()
    }
}

impl std::ops::Index<usize> for WordModel {
    type Output = MultiCharacterModel;

    fn index(&self, ix: usize) -> &Self::Output {
        &self.tiles[ix]
    }
}

impl<'a> IntoIterator for &'a WordModel {
    type Item = &'a MultiCharacterModel;
    type IntoIter = std::slice::Iter<'a, MultiCharacterModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Tile-wise ambiguous equality, so `[s|š]aurs` equals `saurs`.
impl PartialEq for WordModel {
    fn eq(&self, other: &Self) -> bool {
        self.tiles.len() == other.tiles.len()
            && self.tiles.iter().zip(&other.tiles).all(|(a, b)| a == b)
    }
}

impl fmt::Debug for WordModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.tiles {
            write!(f, "{:?}", tile)?;
        }
        Ok(())
    }
}

impl fmt::Display for WordModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_value())
    }
}

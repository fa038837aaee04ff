//! A single character under locale-aware case folding.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::locale::Locale;

/// One character (or grapheme cluster) of a word.
///
/// Equality and hashing only look at the folded value, so `A` and `a` are the
/// same dictionary key, while `s` and `š` stay distinct. The locale takes part
/// in folding but not in comparison: an `A` typed in Latvian equals an `a`
/// loaded from an English list.
#[derive(Clone)]
pub struct CharacterModel {
    value: String,
    locale: Locale,
    folded: String,
}

impl CharacterModel {
    pub fn new(value: impl Into<String>, locale: Locale) -> Self {
        let value = value.into();
        let folded = locale.fold(&value);
        Self { value, locale, folded }
    }

    pub fn from_char(value: char, locale: Locale) -> Self {
        Self::new(value.to_string(), locale)
    }

    /// The raw value as typed or loaded.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn folded_value(&self) -> &str {
        &self.folded
    }

    /// Uppercase form for messages and tiles.
    pub fn display_value(&self) -> String {
        self.locale.uppercase(&self.value)
    }
}

impl PartialEq for CharacterModel {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for CharacterModel {}

impl Hash for CharacterModel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.folded.hash(state);
    }
}

impl fmt::Debug for CharacterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]{{{}}}", self.value, self.locale, self.folded)
    }
}

impl fmt::Display for CharacterModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

//! Supported game locales.
//!
//! A locale decides how characters are case-folded for comparison, which
//! letters belong to its alphabet, and (for Latvian) which letters are
//! diacritic complements of each other.

use std::fmt;
use std::str::FromStr;

use crate::error::LexiconError;

const EN_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
// ÏËÜ never appear in the French word lists
const FR_ALPHABET: &str = "AÁÀÂBCÇDEÉÈÊFGHIÎJKLMNOÔPQRSTUÙÛVWXYZ";
const LV_ALPHABET: &str = "AĀBCČDEĒFGĢHIĪJKĶLĻMNŅOPRSŠTUŪVZŽ";
const EE_ALPHABET: &str = "ABDEFGHIJKLMNOPRSŠZŽTUVÕÄÖÜ";

/// Latvian letters with a diacritic, paired with their plain form.
const LV_COMPLEMENTS: [(char, char); 11] = [
    ('Ā', 'A'),
    ('Č', 'C'),
    ('Ē', 'E'),
    ('Ģ', 'G'),
    ('Ī', 'I'),
    ('Ķ', 'K'),
    ('Ļ', 'L'),
    ('Ņ', 'N'),
    ('Š', 'S'),
    ('Ū', 'U'),
    ('Ž', 'Z'),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    EnUs,
    EnGb,
    FrFr,
    LvLv,
    EeEe,
}

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::EnUs, Locale::EnGb, Locale::FrFr, Locale::LvLv, Locale::EeEe];

    pub fn identifier(self) -> &'static str {
        match self {
            Locale::EnUs => "en_US",
            Locale::EnGb => "en_GB",
            Locale::FrFr => "fr_FR",
            Locale::LvLv => "lv_LV",
            Locale::EeEe => "ee_EE",
        }
    }

    /// Base name of the `<name>_A.txt` / `<name>_G.txt` word lists.
    fn file_base_name(self) -> &'static str {
        match self {
            Locale::EnUs => "en",
            Locale::EnGb => "en-GB",
            Locale::FrFr => "fr",
            Locale::LvLv => "lv",
            Locale::EeEe => "ee_EE",
        }
    }

    /// File name of the answer list, e.g. `lv_A.txt`.
    pub fn answer_list_file(self) -> String {
        format!("{}_A.txt", self.file_base_name())
    }

    /// File name of the accepted-guess list, e.g. `lv_G.txt`.
    pub fn guess_list_file(self) -> String {
        format!("{}_G.txt", self.file_base_name())
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Locale::EnUs => "American",
            Locale::EnGb => "British",
            Locale::FrFr => "Français",
            Locale::LvLv => "Latviski",
            Locale::EeEe => "Eesti",
        }
    }

    /// Case-fold `value` for comparison. Diacritics are preserved: `Š` folds
    /// to `š`, never to `s`.
    ///
    /// None of the supported locales tailor their case mappings, so the fold
    /// is the default Unicode lowercase mapping.
    pub fn fold(self, value: &str) -> String {
        value.to_lowercase()
    }

    /// Uppercase form used when a letter is shown to the player.
    pub fn uppercase(self, value: &str) -> String {
        value.to_uppercase()
    }

    /// Uppercase letters that can be typed in this locale.
    pub fn alphabet(self) -> Vec<char> {
        let letters = match self {
            Locale::EnUs | Locale::EnGb => EN_ALPHABET,
            Locale::FrFr => FR_ALPHABET,
            Locale::LvLv => LV_ALPHABET,
            Locale::EeEe => EE_ALPHABET,
        };
        letters.chars().collect()
    }

    pub fn accepts_letter(self, letter: &str) -> bool {
        let upper = self.uppercase(letter);
        let mut chars = upper.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.alphabet().contains(&c),
            _ => false,
        }
    }

    /// The diacritic complement of `letter` (`S` ↔ `Š`), keeping its casing.
    /// Only Latvian defines complements.
    pub fn complement(self, letter: &str) -> Option<String> {
        if self != Locale::LvLv {
            return None;
        }

        let upper = self.uppercase(letter);
        let mut chars = upper.chars();
        let c = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => return None,
        };

        let other = LV_COMPLEMENTS.iter().find_map(|&(marked, plain)| {
            if c == marked {
                Some(plain)
            } else if c == plain {
                Some(marked)
            } else {
                None
            }
        })?;

        let other = other.to_string();
        if letter == self.fold(letter) {
            Some(self.fold(&other))
        } else {
            Some(other)
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for Locale {
    type Err = LexiconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").to_lowercase().as_str() {
            "en" | "en_us" => Ok(Locale::EnUs),
            "en_gb" => Ok(Locale::EnGb),
            "fr" | "fr_fr" => Ok(Locale::FrFr),
            "lv" | "lv_lv" => Ok(Locale::LvLv),
            "ee" | "ee_ee" => Ok(Locale::EeEe),
            _ => Err(LexiconError::UnknownLocale(s.to_string())),
        }
    }
}

/// English ordinal for a 1-indexed number: `1st`, `2nd`, `3rd`, `4th`, `11th`, `22nd`.
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

use wordle_lexicon::{CharacterModel, Locale, MultiCharacterModel, WordModel};

fn ch(value: &str, locale: Locale) -> CharacterModel {
    CharacterModel::new(value, locale)
}

fn tile(letters: &str) -> MultiCharacterModel {
    MultiCharacterModel::from_letters(letters, Locale::LvLv)
}

#[test]
fn test_character_equality() {
    assert_eq!(ch("A", Locale::LvLv), ch("A", Locale::LvLv));
    assert_ne!(ch("A", Locale::LvLv), ch("b", Locale::LvLv));
    assert_eq!(ch("A", Locale::LvLv), ch("a", Locale::LvLv));
    assert_ne!(ch("c", Locale::LvLv), ch("č", Locale::LvLv));
    assert_eq!(ch("A", Locale::LvLv), ch("a", Locale::EnUs));
}

#[test]
fn test_character_hash_uses_fold() {
    use std::collections::HashSet;

    let set: HashSet<CharacterModel> = ["Š", "š", "s", "S"].iter().map(|c| ch(c, Locale::LvLv)).collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_character_values() {
    let c = ch("Ā", Locale::LvLv);
    assert_eq!(c.value(), "Ā");
    assert_eq!(c.folded_value(), "ā");
    assert_eq!(ch("ā", Locale::LvLv).display_value(), "Ā");
    assert_eq!(format!("{:?}", c), "Ā[lv_LV]{ā}");
}

#[test]
fn test_multi_character_equality_is_intersection() {
    assert!(tile("sš") == tile("s"));
    assert!(tile("s") == tile("sš"));
    assert!(tile("sš") == tile("š"));
    assert!(tile("ABCD") == tile("xyzd"));
    assert!(tile("s") != tile("š"));
}

#[test]
fn test_multi_character_equality_is_not_transitive() {
    let a = tile("s");
    let b = tile("sš");
    let c = tile("š");

    assert!(a == b);
    assert!(b == c);
    assert!(a != c);
}

#[test]
fn test_multi_character_display_is_first_member() {
    assert_eq!(tile("SŠ").display_value(), "S");
    assert_eq!(tile("šs").display_value(), "Š");
    assert_eq!(format!("{:?}", tile("aā")), "[a[lv_LV]{a}|ā[lv_LV]{ā}]");
}

#[test]
fn test_with_complements() {
    let s = MultiCharacterModel::with_complements("S", Locale::LvLv);
    assert_eq!(s.len(), 2);
    assert!(s.contains(&ch("š", Locale::LvLv)));

    let b = MultiCharacterModel::with_complements("B", Locale::LvLv);
    assert!(b.is_single());

    let en = MultiCharacterModel::with_complements("S", Locale::EnUs);
    assert!(en.is_single());
}

#[test]
#[should_panic]
fn test_mixed_locales_panic() {
    MultiCharacterModel::new(vec![ch("s", Locale::LvLv), ch("š", Locale::EnUs)]);
}

#[test]
fn test_word_equality() {
    assert_eq!(WordModel::new("acorn", Locale::EnUs), WordModel::new("ACORN", Locale::EnUs));
    assert_ne!(WordModel::new("acorn", Locale::EnUs), WordModel::new("blues", Locale::EnUs));
    assert_ne!(WordModel::new("šaurs", Locale::EnUs), WordModel::new("saurs", Locale::EnUs));
    assert_ne!(WordModel::new("saur", Locale::EnUs), WordModel::new("saurs", Locale::EnUs));

    let ambiguous = WordModel::from_tiles(vec![tile("šs"), tile("a"), tile("u"), tile("r"), tile("s")]);
    assert_eq!(ambiguous, WordModel::new("saurs", Locale::LvLv));
    assert!(!ambiguous.is_unambiguous());
}

#[test]
fn test_word_from_text() {
    let word = WordModel::new("ziņās", Locale::LvLv);
    assert_eq!(word.len(), 5);
    assert!(word.is_unambiguous());
    assert_eq!(word.display_value(), "ziņās");
    assert_eq!(word.locale(), Some(Locale::LvLv));
    assert_eq!(WordModel::default().locale(), None);
}

#[test]
fn test_decomposed_letters_are_one_tile() {
    // "z" "i" "n" + combining cedilla, "a" + combining macron, "s"
    let word = WordModel::new("zin\u{0327}a\u{0304}s", Locale::LvLv);
    assert_eq!(word.len(), 5);
}

#[test]
fn test_simplified_word() {
    let word = WordModel::simplified("ZINAS", Locale::LvLv);
    assert_eq!(word.len(), 5);
    assert!(!word.is_unambiguous());
    assert_eq!(word, WordModel::new("ziņās", Locale::LvLv));
    assert_eq!(word.display_value(), "ZINAS");
}

#[test]
fn test_push_is_capped() {
    let mut word = WordModel::new("cran", Locale::EnUs);
    assert!(word.push(MultiCharacterModel::from_char('e', Locale::EnUs)));
    assert!(!word.push(MultiCharacterModel::from_char('s', Locale::EnUs)));
    assert_eq!(word.display_value(), "crane");

    assert!(word.pop().is_some());
    assert_eq!(word.display_value(), "cran");
}

#[test]
fn test_word_contains() {
    let word = WordModel::new("crane", Locale::EnUs);
    assert!(word.contains(&MultiCharacterModel::from_char('N', Locale::EnUs)));
    assert!(!word.contains(&MultiCharacterModel::from_char('s', Locale::EnUs)));
}

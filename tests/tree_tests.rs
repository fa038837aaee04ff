use std::time::{Duration, Instant};

use wordle_lexicon::{Locale, MultiCharacterModel, Rejection, RowModel, WordModel, WordTree};

fn tiles(letters: &[&str], locale: Locale) -> WordModel {
    WordModel::from_tiles(
        letters
            .iter()
            .map(|l| MultiCharacterModel::from_letters(l, locale))
            .collect(),
    )
}

/// Deterministic dictionary of `n` distinct words over ten letters.
fn synthetic_words(n: usize) -> Vec<String> {
    let letters: Vec<char> = "abcdefghij".chars().collect();
    (0..n)
        .map(|i| {
            let mut k = i * 13 + 7;
            let mut word = String::new();
            for _ in 0..5 {
                word.push(letters[k % 10]);
                k /= 10;
            }
            word
        })
        .collect()
}

#[test]
fn test_insert_requires_five_letters() {
    let mut tree = WordTree::new(Locale::EnUs);

    assert!(!tree.insert_str("fuel"));
    assert!(!tree.insert_str("fuelss"));
    assert_eq!(tree.count(), 0);
    assert_eq!(tree.node_count(), 1);

    assert!(tree.insert_str("fuels"));
    assert_eq!(tree.count(), 1);
}

#[test]
fn test_simple_lookup() {
    let mut tree = WordTree::new(Locale::EnUs);
    tree.insert_str("fuels");

    let found = tree.contains("fuels").unwrap();
    assert!(found.is_unambiguous());
    assert_eq!(found.display_value(), "fuels");

    assert_eq!(
        tree.lookup(&WordModel::new("fuel", Locale::EnUs), None),
        Err(Rejection::NotInWordList)
    );
    assert!(tree.contains("fuelss").is_none());
}

#[test]
fn test_lookup_fails_in_empty_tree() {
    let tree = WordTree::new(Locale::EnUs);
    assert!(tree.is_empty());
    assert!(tree.contains("fuels").is_none());
}

#[test]
fn test_lookup_is_case_insensitive() {
    for locale in Locale::ALL {
        let mut tree = WordTree::new(locale);
        tree.insert_str("fuels");
        assert!(tree.contains("FUELS").is_some(), "failed for {}", locale);
        assert!(tree.contains("FuElS").is_some(), "failed for {}", locale);
    }
}

#[test]
fn test_lookup_returns_stored_spelling() {
    let mut tree = WordTree::new(Locale::LvLv);
    tree.insert_str("žagas");

    let found = tree.contains("ŽAGAS").unwrap();
    assert_eq!(found.display_value(), "žagas");
}

#[test]
fn test_diacritics_are_distinct() {
    let mut tree = WordTree::new(Locale::LvLv);
    tree.insert_str("švīka");

    assert!(tree.contains("švīka").is_some());
    assert!(tree.contains("svīka").is_none());
    assert!(tree.contains("švika").is_none());
}

#[test]
fn test_duplicate_inserts_are_counted_but_share_nodes() {
    let mut tree = WordTree::new(Locale::EnUs);
    assert!(tree.insert_str("fuels"));
    let nodes = tree.node_count();

    assert!(tree.insert_str("FUELS"));
    assert_eq!(tree.count(), 2);
    assert_eq!(tree.node_count(), nodes);
}

#[test]
fn test_common_prefixes_are_shared() {
    let mut tree = WordTree::new(Locale::EnUs);
    tree.insert_str("crane");
    tree.insert_str("crate");
    tree.insert_str("craze");

    // root + c, r, a + (n, t, z) + three final e's
    assert_eq!(tree.node_count(), 1 + 3 + 3 + 3);
    assert!(tree.contains("crate").is_some());
    assert!(tree.contains("crant").is_none());
}

#[test]
fn test_ambiguous_lookup_finds_either_spelling() {
    let mut tree = WordTree::new(Locale::LvLv);
    tree.insert_str("švīka");

    let query = tiles(&["sš", "v", "ī", "k", "a"], Locale::LvLv);
    let found = tree.lookup(&query, None).unwrap();
    assert!(found.is_unambiguous());
    assert_eq!(found.display_value(), "švīka");

    let mut tree = WordTree::new(Locale::LvLv);
    tree.insert_str("svīka");
    let found = tree.lookup(&query, None).unwrap();
    assert_eq!(found.display_value(), "svīka");
}

#[test]
fn test_ambiguous_lookup_follows_candidate_order() {
    let mut tree = WordTree::new(Locale::LvLv);
    tree.insert_str("pluka");
    tree.insert_str("plūka");

    let plain_first = tiles(&["p", "l", "uū", "k", "a"], Locale::LvLv);
    assert_eq!(tree.lookup(&plain_first, None).unwrap().display_value(), "pluka");

    let marked_first = tiles(&["p", "l", "ūu", "k", "a"], Locale::LvLv);
    assert_eq!(tree.lookup(&marked_first, None).unwrap().display_value(), "plūka");
}

#[test]
fn test_simplified_input_matches_marked_word() {
    let mut tree = WordTree::new(Locale::LvLv);
    tree.insert_str("ziņās");

    let found = tree.lookup(&WordModel::simplified("ZINAS", Locale::LvLv), None).unwrap();
    assert_eq!(found.display_value(), "ziņās");
}

#[test]
#[should_panic]
fn test_inserting_ambiguous_word_panics() {
    let mut tree = WordTree::new(Locale::LvLv);
    tree.insert(&tiles(&["sš", "a", "u", "r", "s"], Locale::LvLv));
}

#[test]
fn test_from_words_skips_wrong_lengths() {
    let words = ["crane", "slate", "ox", "trace"]
        .iter()
        .map(|w| WordModel::new(w, Locale::EnUs));
    let tree = WordTree::from_words(words, Locale::EnUs);

    assert_eq!(tree.count(), 3);
    assert!(tree.contains("slate").is_some());
}

#[test]
fn test_lookup_speed() {
    let words = synthetic_words(6000);
    let tree = WordTree::from_words(words.iter().map(|w| WordModel::new(w, Locale::EnUs)), Locale::EnUs);
    assert!(tree.count() >= 5000);

    let query = WordModel::new(&words[4321], Locale::EnUs);
    let mut best = Duration::MAX;
    for _ in 0..20 {
        let start = Instant::now();
        let found = tree.lookup(&query, None);
        best = best.min(start.elapsed());
        assert!(found.is_ok());
    }

    assert!(best < Duration::from_micros(250), "lookup took {:?}", best);
}

#[test]
fn test_answer_found_with_hints_in_large_tree() {
    let words = synthetic_words(6000);
    let tree = WordTree::from_words(words.iter().map(|w| WordModel::new(w, Locale::EnUs)), Locale::EnUs);

    let expected = WordModel::new(&words[4321], Locale::EnUs);
    let rows: Vec<RowModel> = [17, 2048, 5001]
        .iter()
        .map(|&i| RowModel::submitted(WordModel::new(&words[i], Locale::EnUs), expected.clone()))
        .collect();

    assert!(tree.lookup(&expected, None).is_ok());
    assert_eq!(
        tree.lookup(&expected, Some(&rows)).map(|w| w.display_value()),
        Ok(words[4321].clone())
    );
}

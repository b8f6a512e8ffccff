use std::collections::BTreeSet;

use gallows::{GameError, Word};

fn set(chars: &str) -> BTreeSet<char> {
    chars.chars().collect()
}

fn full_alphabet() -> BTreeSet<char> {
    ('a'..='z').collect()
}

#[test]
fn test_rejects_non_positive_frequency() {
    assert_eq!(
        Word::new("cat", 0.0).unwrap_err(),
        GameError::InvalidFrequency(0.0)
    );
    assert_eq!(
        Word::new("cat", -3.5).unwrap_err(),
        GameError::InvalidFrequency(-3.5)
    );
    assert!(matches!(
        Word::new("cat", f64::NAN),
        Err(GameError::InvalidFrequency(_))
    ));
    assert!(matches!(
        Word::new("cat", f64::INFINITY),
        Err(GameError::InvalidFrequency(_))
    ));
}

#[test]
fn test_rejects_words_without_guessable_letters() {
    assert!(matches!(
        Word::new("123-?", 2.0),
        Err(GameError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_derived_lengths_exclude_punctuation() {
    let word = Word::new("x-ray", 2.0).unwrap();
    assert_eq!(word.len(), 5);
    assert_eq!(word.letter_len(), 4);

    let word = Word::new("don't", 5.0).unwrap();
    assert_eq!(word.len(), 5);
    assert_eq!(word.letter_len(), 4);
}

#[test]
fn test_occurrences_and_presence() {
    let word = Word::new("banana", 3.0).unwrap();
    assert_eq!(word.occurrences_of('a'), 3);
    assert_eq!(word.occurrences_of('n'), 2);
    assert_eq!(word.occurrences_of('z'), 0);
    assert!(word.has_char('b'));
    assert!(!word.has_char('x'));
}

#[test]
fn test_masked_shows_non_letters_verbatim() {
    let word = Word::new("x-ray", 2.0).unwrap();
    assert_eq!(word.masked(&set("")), "_ - _ _ _");
    assert_eq!(word.masked(&set("xa")), "x - _ a _");
    assert_eq!(word.masked(&set("xray")), "x - r a y");
}

#[test]
fn test_masked_is_idempotent() {
    let word = Word::new("meadow", 2.5).unwrap();
    let guessed = set("meo");
    let first = word.masked(&guessed);
    assert_eq!(first, word.masked(&guessed));
    assert_eq!(first, "m e _ _ o _");
}

#[test]
fn test_masked_full_alphabet_reveals_word() {
    let word = Word::new("cat", 10.0).unwrap();
    assert_eq!(word.masked(&full_alphabet()), "c a t");
}

#[test]
fn test_letters_remaining_counts_only_letters() {
    let word = Word::new("don't", 5.0).unwrap();
    assert_eq!(word.letters_remaining(&set("")), 4);
    // A guessed non-letter is never part of the letter-only total.
    assert_eq!(word.letters_remaining(&set("'")), 4);
    assert_eq!(word.letters_remaining(&set("dn")), 2);
    assert_eq!(word.letters_remaining(&set("dont")), 0);
}

#[test]
fn test_letters_remaining_zero_under_full_alphabet() {
    for text in ["cat", "banana", "whisper"] {
        let word = Word::new(text, 1.0).unwrap();
        assert_eq!(word.letters_remaining(&full_alphabet()), 0);
    }
}

#[test]
fn test_ordering_by_frequency_then_text() {
    let rare = Word::new("zebra", 1.0).unwrap();
    let common = Word::new("apple", 4.0).unwrap();
    assert!(rare < common);

    let a = Word::new("apple", 2.0).unwrap();
    let b = Word::new("banana", 2.0).unwrap();
    assert!(a < b);
    assert_eq!(a, Word::new("apple", 2.0).unwrap());
}

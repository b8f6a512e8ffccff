//! Immutable secret-word value type and its letter-presence helpers.

use core::cmp::Ordering;
use core::fmt;
use std::collections::BTreeSet;

use crate::common::GameError;

/// True for characters that have to be guessed. Word lists are lowercase
/// ASCII; digits and punctuation inside a word are always displayed.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// A secret word together with its corpus frequency. All derived fields are
/// computed once at construction and never change.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    frequency: f64,
    chars: Vec<char>,
    letter_len: usize,
}

impl Word {
    /// Build a word from its text and frequency. The frequency must be
    /// positive and finite (scoring divides by it), and the text must
    /// contain at least one guessable letter.
    pub fn new(text: impl Into<String>, frequency: f64) -> Result<Self, GameError> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(GameError::InvalidFrequency(frequency));
        }
        let text = text.into();
        let chars: Vec<char> = text.chars().collect();
        let letter_len = chars.iter().filter(|&&c| is_letter(c)).count();
        if letter_len == 0 {
            return Err(GameError::InvalidConfiguration(
                "a word needs at least one guessable letter",
            ));
        }
        Ok(Word {
            text,
            frequency,
            chars,
            letter_len,
        })
    }

    /// The word's text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Corpus frequency; lower means rarer and higher-scoring.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Total character count, punctuation and digits included.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Count of guessable letters (excludes punctuation and digits).
    pub fn letter_len(&self) -> usize {
        self.letter_len
    }

    /// Number of occurrences of `c` across all positions, exact match.
    pub fn occurrences_of(&self, c: char) -> usize {
        self.chars.iter().filter(|&&wc| wc == c).count()
    }

    /// True iff `c` occurs anywhere in the word.
    pub fn has_char(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Guessable letters not yet revealed by `guessed`. Guessed characters
    /// that are not letters never count against the letter-only total, so
    /// only letter occurrences are subtracted.
    pub fn letters_remaining(&self, guessed: &BTreeSet<char>) -> usize {
        let mut remaining = self.letter_len;
        for &c in guessed.iter().filter(|&&c| is_letter(c)) {
            remaining = remaining.saturating_sub(self.occurrences_of(c));
        }
        remaining
    }

    /// Render the word as space-separated tokens: non-letters verbatim,
    /// guessed letters verbatim, everything else as `_`.
    pub fn masked(&self, guessed: &BTreeSet<char>) -> String {
        let tokens: Vec<String> = self
            .chars
            .iter()
            .map(|&c| {
                if !is_letter(c) || guessed.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        tokens.join(" ")
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (frequency {})", self.text, self.frequency)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Word {}

// Frequency first, text as tie-break. Used for deterministic ordering when
// dealing words out, never for guess evaluation.
impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .total_cmp(&other.frequency)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

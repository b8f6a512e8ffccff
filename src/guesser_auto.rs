//! Automated guesser for simulations and headless tests.

use crate::guesser::{Guesser, TurnView};

/// English letters ordered by approximate corpus frequency.
const LETTER_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Guesser that works through the alphabet in letter-frequency order,
/// skipping characters already tried on the current word. Stateless across
/// turns; everything it needs is in the view.
pub struct AutoGuesser;

impl AutoGuesser {
    pub fn new() -> Self {
        AutoGuesser
    }
}

impl Default for AutoGuesser {
    fn default() -> Self {
        Self::new()
    }
}

impl Guesser for AutoGuesser {
    fn next_guess(&mut self, view: &TurnView) -> char {
        LETTER_ORDER
            .chars()
            .find(|c| !view.guessed.contains(c))
            // Words are lowercase ASCII, so a word always resolves before
            // the alphabet runs out; the fallback keeps the signature total.
            .unwrap_or('z')
    }
}

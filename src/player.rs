//! Per-player progress: assigned words, guesses, lives, score.

use std::collections::BTreeSet;

use crate::common::GameError;
use crate::word::Word;

/// One player's mutable state across a game. The engine owns every
/// `PlayerState` exclusively and mutates it only during that player's turn.
#[derive(Debug, Clone)]
pub struct PlayerState {
    name: String,
    id: usize,
    words: Vec<Word>,
    guessed: BTreeSet<char>,
    letters_remaining: usize,
    incorrect_guesses: u32,
    score: u32,
    words_correct: usize,
    words_incorrect: usize,
    active: bool,
}

impl PlayerState {
    /// A player with a display name and a unique, stable id.
    pub fn new(name: impl Into<String>, id: usize) -> Self {
        PlayerState {
            name: name.into(),
            id,
            words: Vec::new(),
            guessed: BTreeSet::new(),
            letters_remaining: 0,
            incorrect_guesses: 0,
            score: 0,
            words_correct: 0,
            words_incorrect: 0,
            active: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Sorted, comma-separated rendering of every character guessed so far
    /// on the current word.
    pub fn guessed_summary(&self) -> String {
        let rendered: Vec<String> = self.guessed.iter().map(|c| c.to_string()).collect();
        rendered.join(", ")
    }

    pub fn letters_remaining(&self) -> usize {
        self.letters_remaining
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    pub fn words_correct(&self) -> usize {
        self.words_correct
    }

    pub fn words_incorrect(&self) -> usize {
        self.words_incorrect
    }

    /// Words attempted so far, correct and incorrect. Doubles as the index
    /// of the current word.
    pub fn words_attempted(&self) -> usize {
        self.words_correct + self.words_incorrect
    }

    pub fn words_assigned(&self) -> usize {
        self.words.len()
    }

    /// The words dealt to this player, in play order.
    pub fn assigned_words(&self) -> &[Word] {
        &self.words
    }

    /// False once every assigned word has been attempted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The word currently being guessed. Errors if every assigned word has
    /// already been attempted; the engine's sequencing keeps that from
    /// happening during play.
    pub fn current_word(&self) -> Result<&Word, GameError> {
        self.words
            .get(self.words_attempted())
            .ok_or(GameError::WordsExhausted { player_id: self.id })
    }

    /// Assign a fresh batch of words and reset all per-game state.
    pub fn setup_new_game(&mut self, words: Vec<Word>) -> Result<(), GameError> {
        if words.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "a player needs at least one word",
            ));
        }
        self.words = words;
        self.score = 0;
        self.words_correct = 0;
        self.words_incorrect = 0;
        self.active = true;
        self.setup_new_word()
    }

    /// Reset per-word state for the word at the current index.
    pub fn setup_new_word(&mut self) -> Result<(), GameError> {
        self.letters_remaining = self.current_word()?.letter_len();
        self.guessed.clear();
        self.incorrect_guesses = 0;
        Ok(())
    }

    /// Record a guessed character. Returns false without touching anything
    /// if the character was already guessed for this word; this is the sole
    /// duplicate-guess guard.
    pub fn record_guess(&mut self, c: char) -> bool {
        self.guessed.insert(c)
    }

    pub fn add_score(&mut self, delta: u32) {
        self.score += delta;
    }

    pub fn reduce_letters_remaining(&mut self, delta: usize) {
        self.letters_remaining = self.letters_remaining.saturating_sub(delta);
    }

    pub fn record_incorrect_guess(&mut self) {
        self.incorrect_guesses += 1;
    }

    /// Count a finished word toward the matching outcome counter.
    pub fn record_word_outcome(&mut self, correct: bool) {
        if correct {
            self.words_correct += 1;
        } else {
            self.words_incorrect += 1;
        }
    }

    pub fn eliminate(&mut self) {
        self.active = false;
    }
}

//! Trait seam between the round engine and whatever supplies guesses.
//!
//! The engine never reads input or prints; it hands a [`TurnView`] to a
//! [`Guesser`], takes back one character, and reports what happened through
//! [`TurnEvent`] values. Adapters (console, simulation, tests) render those
//! however they like.

use std::collections::BTreeSet;

/// What a guesser is allowed to see before choosing a character.
#[derive(Debug, Clone)]
pub struct TurnView<'a> {
    pub player_name: &'a str,
    pub player_id: usize,
    /// The secret word rendered with unguessed letters hidden.
    pub masked_word: String,
    /// The secret itself. Only debug/reveal adapters should display it.
    pub word_text: &'a str,
    pub guessed: &'a BTreeSet<char>,
    pub lives_remaining: u32,
    pub words_remaining: usize,
    pub score: u32,
}

/// One player's final line in the end-of-game standings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsRow {
    pub name: String,
    pub id: usize,
    pub score: u32,
    pub words_correct: usize,
    pub words_assigned: usize,
}

/// Everything the engine has to say about the progress of a game.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnEvent {
    /// An eliminated player was passed over this round.
    PlayerSkipped { name: String },
    /// The character had already been guessed; the turn is forfeit but
    /// nothing else changes.
    DuplicateGuess { name: String, guess: char },
    /// The character is in the word.
    CorrectGuess {
        name: String,
        guess: char,
        score_delta: u32,
        masked_word: String,
        guessed_summary: String,
        letters_remaining: usize,
    },
    /// The character is not in the word.
    IncorrectGuess {
        name: String,
        guess: char,
        lives_remaining: u32,
        guessed_summary: String,
    },
    /// Every letter of the current word has been revealed.
    WordSolved { name: String, word: String },
    /// The player ran out of lives on the current word.
    WordFailed { name: String, word: String },
    /// The player moves on to their next word with fresh lives.
    NextWord {
        name: String,
        words_remaining: usize,
        lives: u32,
        score: u32,
    },
    /// The player has attempted every assigned word and leaves the rotation.
    PlayerFinished {
        name: String,
        words_correct: usize,
        words_assigned: usize,
        score: u32,
    },
    /// A full pass over all players completed.
    RoundComplete { round: usize },
    /// All players are done; final standings, best score first.
    GameOver {
        rounds: usize,
        standings: Vec<StandingsRow>,
    },
}

/// Supplies one guessed character per turn and observes game events.
pub trait Guesser {
    /// Choose the next character for the player described by `view`.
    fn next_guess(&mut self, view: &TurnView) -> char;

    /// Notification of engine progress. Default is to ignore it.
    fn observe(&mut self, _event: &TurnEvent) {}
}

//! Common types for the word game: domain errors shared across modules.

use std::fmt;

/// Errors returned by game setup and play operations.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Difficulty tier outside the supported 0..=2 range.
    InvalidDifficulty(u8),
    /// Game parameters rejected at construction (zero words, zero lives, no players).
    InvalidConfiguration(&'static str),
    /// The word supplier returned fewer words than the game needs.
    InsufficientWords { requested: usize, available: usize },
    /// A word record carried a non-positive or non-finite frequency.
    InvalidFrequency(f64),
    /// Embedded word-list data could not be read or parsed.
    Dataset(String),
    /// Player index outside the roster.
    UnknownPlayer(usize),
    /// A turn was submitted for a player who has finished all words.
    InactivePlayer(usize),
    /// A player's current-word index ran past their assigned words.
    WordsExhausted { player_id: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidDifficulty(tier) => {
                write!(f, "difficulty tier {} is not in 0..=2", tier)
            }
            GameError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {}", msg),
            GameError::InsufficientWords {
                requested,
                available,
            } => write!(
                f,
                "word list too small: requested {} words, only {} available",
                requested, available
            ),
            GameError::InvalidFrequency(freq) => {
                write!(f, "word frequency must be positive and finite, got {}", freq)
            }
            GameError::Dataset(msg) => write!(f, "word dataset error: {}", msg),
            GameError::UnknownPlayer(id) => write!(f, "no player with index {}", id),
            GameError::InactivePlayer(id) => {
                write!(f, "player {} has already finished all words", id)
            }
            GameError::WordsExhausted { player_id } => {
                write!(f, "player {} has no current word left to guess", player_id)
            }
        }
    }
}

impl std::error::Error for GameError {}

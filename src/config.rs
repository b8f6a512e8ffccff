use crate::common::GameError;

/// Reward multiplier applied to a word's inverse frequency on each correct guess.
pub const SCORE_MULTIPLIER: u32 = 100;
/// Reward multiplier applied to the inverse of the letters still hidden.
pub const GUESS_MULTIPLIER: u32 = 10;
/// Number of word-list difficulty tiers shipped with the game.
pub const NUM_TIERS: usize = 3;

/// Word-list tier, ordered easiest (highest frequency) to hardest (lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Common,
    Uncommon,
    Rare,
}

impl Difficulty {
    pub const ALL: [Difficulty; NUM_TIERS] =
        [Difficulty::Common, Difficulty::Uncommon, Difficulty::Rare];

    /// Tier index in 0..NUM_TIERS.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Score multiplier for this tier (tier index + 1).
    pub fn multiplier(self) -> u32 {
        self as u32 + 1
    }

    /// Name of the embedded word-list file backing this tier.
    pub fn file_name(self) -> &'static str {
        match self {
            Difficulty::Common => "common.csv",
            Difficulty::Uncommon => "uncommon.csv",
            Difficulty::Rare => "rare.csv",
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = GameError;

    fn try_from(tier: u8) -> Result<Self, GameError> {
        match tier {
            0 => Ok(Difficulty::Common),
            1 => Ok(Difficulty::Uncommon),
            2 => Ok(Difficulty::Rare),
            other => Err(GameError::InvalidDifficulty(other)),
        }
    }
}

/// Parameters fixed for the duration of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub words_per_player: usize,
    pub lives_per_player: u32,
}

impl GameConfig {
    /// Reject unplayable parameter combinations before any player is set up.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.words_per_player == 0 {
            return Err(GameError::InvalidConfiguration(
                "words per player must be at least 1",
            ));
        }
        if self.lives_per_player == 0 {
            return Err(GameError::InvalidConfiguration(
                "lives per player must be at least 1",
            ));
        }
        Ok(())
    }
}

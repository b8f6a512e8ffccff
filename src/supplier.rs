//! Word supply: embedded, frequency-bucketed word lists and the trait the
//! engine draws from.
//!
//! Each difficulty tier is one CSV file of `text,frequency` rows, sorted
//! ascending by frequency and compiled into the binary.

use std::collections::BTreeSet;

use include_dir::{include_dir, Dir};
use log::debug;
use rand::rngs::SmallRng;
use rand::Rng;
use serde::Deserialize;

use crate::common::GameError;
use crate::config::{Difficulty, NUM_TIERS};
use crate::word::Word;

static DATA_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/data");

/// Source of secret words for a game. Implementations must return `count`
/// pairwise-distinct words or fail; the engine never compensates for a
/// short batch.
pub trait WordSupplier {
    fn random_words(
        &mut self,
        difficulty: Difficulty,
        count: usize,
    ) -> Result<Vec<Word>, GameError>;
}

#[derive(Debug, Deserialize)]
struct WordRecord {
    text: String,
    frequency: f64,
}

fn load_tier(difficulty: Difficulty) -> Result<Vec<Word>, GameError> {
    let name = difficulty.file_name();
    let file = DATA_DIR
        .get_file(name)
        .ok_or_else(|| GameError::Dataset(format!("missing embedded word list {}", name)))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(file.contents());
    let mut words = Vec::new();
    for record in reader.deserialize::<WordRecord>() {
        let record = record.map_err(|e| GameError::Dataset(format!("{}: {}", name, e)))?;
        words.push(Word::new(record.text, record.frequency)?);
    }
    debug!("loaded {} words from {}", words.len(), name);
    Ok(words)
}

/// Supplier backed by the compiled-in word lists. Randomness comes from an
/// injected RNG so games are reproducible under a fixed seed.
pub struct EmbeddedWordList {
    rng: SmallRng,
    tiers: [Vec<Word>; NUM_TIERS],
}

impl EmbeddedWordList {
    /// Parse all three tiers up front so a bad dataset fails at startup,
    /// not mid-game.
    pub fn new(rng: SmallRng) -> Result<Self, GameError> {
        let tiers = [
            load_tier(Difficulty::Common)?,
            load_tier(Difficulty::Uncommon)?,
            load_tier(Difficulty::Rare)?,
        ];
        Ok(EmbeddedWordList { rng, tiers })
    }

    /// Number of words available in a tier.
    pub fn tier_len(&self, difficulty: Difficulty) -> usize {
        self.tiers[difficulty.index()].len()
    }

    /// Every word in a tier, in file (frequency) order. Used to seed the
    /// hint provider.
    pub fn tier_words(&self, difficulty: Difficulty) -> &[Word] {
        &self.tiers[difficulty.index()]
    }
}

impl WordSupplier for EmbeddedWordList {
    fn random_words(
        &mut self,
        difficulty: Difficulty,
        count: usize,
    ) -> Result<Vec<Word>, GameError> {
        let tier = &self.tiers[difficulty.index()];
        if count > tier.len() {
            return Err(GameError::InsufficientWords {
                requested: count,
                available: tier.len(),
            });
        }
        // Distinct row indices, then read back in ascending order so the
        // batch keeps the file's frequency ordering.
        let mut picked = BTreeSet::new();
        while picked.len() < count {
            picked.insert(self.rng.random_range(0..tier.len()));
        }
        Ok(picked.into_iter().map(|i| tier[i].clone()).collect())
    }
}

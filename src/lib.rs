mod common;
mod config;
mod game;
mod guesser;
mod guesser_auto;
mod guesser_cli;
mod hints;
mod logging;
mod player;
mod supplier;
mod word;

pub use common::GameError;
pub use config::{Difficulty, GameConfig, GUESS_MULTIPLIER, NUM_TIERS, SCORE_MULTIPLIER};
pub use game::{guess_score, RoundEngine};
pub use guesser::{Guesser, StandingsRow, TurnEvent, TurnView};
pub use guesser_auto::AutoGuesser;
pub use guesser_cli::CliGuesser;
pub use hints::{HintProvider, ListHints, NoHints};
pub use logging::init_logging;
pub use player::PlayerState;
pub use supplier::{EmbeddedWordList, WordSupplier};
pub use word::{is_letter, Word};

//! Round-robin engine: word distribution, turn sequencing, scoring,
//! elimination, standings. Pure logic; all I/O lives behind [`Guesser`].

use log::{debug, info};

use crate::common::GameError;
use crate::config::{Difficulty, GameConfig, GUESS_MULTIPLIER, SCORE_MULTIPLIER};
use crate::guesser::{Guesser, StandingsRow, TurnEvent, TurnView};
use crate::player::PlayerState;
use crate::supplier::WordSupplier;
use crate::word::{is_letter, Word};

/// Points for one correct guess. `letters_remaining` is the count *before*
/// this guess's occurrences are revealed; guessing when few letters are left
/// earns a larger timing bonus. Integer division truncates at each stage.
pub fn guess_score(difficulty: Difficulty, frequency: f64, letters_remaining: usize) -> u32 {
    // Solved words are retired as soon as their count reaches zero, so a
    // zero here is an engine sequencing bug, not a recoverable condition.
    assert!(
        letters_remaining > 0,
        "scored a guess with no letters outstanding"
    );
    let rarity_bonus = (f64::from(SCORE_MULTIPLIER) / frequency) as u32;
    let timing_bonus = GUESS_MULTIPLIER / letters_remaining as u32;
    (rarity_bonus + timing_bonus) * difficulty.multiplier()
}

/// A single game session. Owns every player's state for the session's
/// duration; play is strictly sequential, one guess per active player per
/// round, until everyone has exhausted their assigned words.
#[derive(Debug)]
pub struct RoundEngine {
    config: GameConfig,
    players: Vec<PlayerState>,
    rounds: usize,
}

impl RoundEngine {
    /// Validate the configuration, draw one batch of words from `supplier`,
    /// and deal them out. Fails fast; no partially set-up game is returned.
    pub fn new(
        config: GameConfig,
        player_names: Vec<String>,
        supplier: &mut dyn WordSupplier,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if player_names.is_empty() {
            return Err(GameError::InvalidConfiguration(
                "at least one player is required",
            ));
        }

        let requested = player_names.len() * config.words_per_player;
        let words = supplier.random_words(config.difficulty, requested)?;
        if words.len() < requested {
            return Err(GameError::InsufficientWords {
                requested,
                available: words.len(),
            });
        }

        let mut players: Vec<PlayerState> = player_names
            .into_iter()
            .enumerate()
            .map(|(id, name)| PlayerState::new(name, id))
            .collect();
        Self::deal_words(&mut players, words)?;

        for player in &players {
            debug!(
                "dealt {} words to {} (id {})",
                player.words_assigned(),
                player.name(),
                player.id()
            );
        }

        Ok(RoundEngine {
            config,
            players,
            rounds: 0,
        })
    }

    /// Deal the flat word batch fairly. A lone player takes the batch
    /// unmodified. Otherwise the batch is sorted ascending by frequency and
    /// arranged as a words-per-player x players grid in row-major order;
    /// each player receives one column, so every player draws one word from
    /// each frequency band.
    fn deal_words(players: &mut [PlayerState], mut words: Vec<Word>) -> Result<(), GameError> {
        if players.len() == 1 {
            return players[0].setup_new_game(words);
        }

        words.sort();
        let per_player = words.len() / players.len();
        let mut hands: Vec<Vec<Word>> = (0..players.len())
            .map(|_| Vec::with_capacity(per_player))
            .collect();
        for (i, word) in words.into_iter().enumerate() {
            hands[i % players.len()].push(word);
        }
        for (player, hand) in players.iter_mut().zip(hands) {
            player.setup_new_game(hand)?;
        }
        Ok(())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    /// Completed full passes over the roster.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// True once every player has attempted all of their words.
    pub fn is_over(&self) -> bool {
        self.players.iter().all(|p| !p.is_active())
    }

    /// Snapshot handed to a guesser before the player at `idx` takes a turn.
    pub fn turn_view(&self, idx: usize) -> Result<TurnView<'_>, GameError> {
        let player = self.players.get(idx).ok_or(GameError::UnknownPlayer(idx))?;
        let word = player.current_word()?;
        Ok(TurnView {
            player_name: player.name(),
            player_id: player.id(),
            masked_word: word.masked(player.guessed()),
            word_text: word.text(),
            guessed: player.guessed(),
            lives_remaining: self.config.lives_per_player - player.incorrect_guesses(),
            words_remaining: player.words_assigned() - player.words_attempted(),
            score: player.score(),
        })
    }

    /// Apply one guessed character for the player at `idx` and report what
    /// happened. A repeated character forfeits the turn with no other state
    /// change; otherwise the guess is scored or costs a life, and finished
    /// words advance or eliminate the player.
    pub fn apply_guess(&mut self, idx: usize, guess: char) -> Result<Vec<TurnEvent>, GameError> {
        let lives = self.config.lives_per_player;
        let difficulty = self.config.difficulty;
        let player = self
            .players
            .get_mut(idx)
            .ok_or(GameError::UnknownPlayer(idx))?;
        if !player.is_active() {
            return Err(GameError::InactivePlayer(idx));
        }

        if !player.record_guess(guess) {
            return Ok(vec![TurnEvent::DuplicateGuess {
                name: player.name().to_string(),
                guess,
            }]);
        }

        let (present, occurrences, frequency, word_text) = {
            let word = player.current_word()?;
            (
                word.has_char(guess),
                word.occurrences_of(guess),
                word.frequency(),
                word.text().to_string(),
            )
        };

        let mut events = Vec::new();
        if present {
            // Score with the pre-guess letters-remaining count, then reveal.
            // Non-letter characters are visible from the start and were never
            // counted, so only letter occurrences shrink the remainder.
            let score_delta = guess_score(difficulty, frequency, player.letters_remaining());
            player.add_score(score_delta);
            if is_letter(guess) {
                player.reduce_letters_remaining(occurrences);
            }
            events.push(TurnEvent::CorrectGuess {
                name: player.name().to_string(),
                guess,
                score_delta,
                masked_word: player.current_word()?.masked(player.guessed()),
                guessed_summary: player.guessed_summary(),
                letters_remaining: player.letters_remaining(),
            });
            if player.letters_remaining() == 0 {
                events.push(TurnEvent::WordSolved {
                    name: player.name().to_string(),
                    word: word_text,
                });
                Self::finish_word(player, lives, true, &mut events)?;
            }
        } else {
            player.record_incorrect_guess();
            events.push(TurnEvent::IncorrectGuess {
                name: player.name().to_string(),
                guess,
                lives_remaining: lives - player.incorrect_guesses(),
                guessed_summary: player.guessed_summary(),
            });
            if player.incorrect_guesses() >= lives {
                events.push(TurnEvent::WordFailed {
                    name: player.name().to_string(),
                    word: word_text,
                });
                Self::finish_word(player, lives, false, &mut events)?;
            }
        }
        Ok(events)
    }

    /// Book-keeping shared by solved and failed words: count the outcome,
    /// then either reset for the next word or retire the player.
    fn finish_word(
        player: &mut PlayerState,
        lives: u32,
        correct: bool,
        events: &mut Vec<TurnEvent>,
    ) -> Result<(), GameError> {
        player.record_word_outcome(correct);
        if player.words_attempted() >= player.words_assigned() {
            player.eliminate();
            info!(
                "{} finished: {}/{} words, score {}",
                player.name(),
                player.words_correct(),
                player.words_assigned(),
                player.score()
            );
            events.push(TurnEvent::PlayerFinished {
                name: player.name().to_string(),
                words_correct: player.words_correct(),
                words_assigned: player.words_assigned(),
                score: player.score(),
            });
        } else {
            player.setup_new_word()?;
            events.push(TurnEvent::NextWord {
                name: player.name().to_string(),
                words_remaining: player.words_assigned() - player.words_attempted(),
                lives,
                score: player.score(),
            });
        }
        Ok(())
    }

    /// Drive the game to completion, pulling every guess from `guesser` and
    /// pushing every event back to it. Returns the final standings.
    pub fn run(&mut self, guesser: &mut dyn Guesser) -> Result<Vec<StandingsRow>, GameError> {
        while !self.is_over() {
            for idx in 0..self.players.len() {
                if !self.players[idx].is_active() {
                    guesser.observe(&TurnEvent::PlayerSkipped {
                        name: self.players[idx].name().to_string(),
                    });
                    continue;
                }
                let guess = {
                    let view = self.turn_view(idx)?;
                    guesser.next_guess(&view)
                };
                for event in self.apply_guess(idx, guess)? {
                    guesser.observe(&event);
                }
            }
            // One increment per full pass, even when some players were skipped.
            self.rounds += 1;
            guesser.observe(&TurnEvent::RoundComplete {
                round: self.rounds,
            });
        }

        let standings = self.standings();
        info!("game over after {} rounds", self.rounds);
        guesser.observe(&TurnEvent::GameOver {
            rounds: self.rounds,
            standings: standings.clone(),
        });
        Ok(standings)
    }

    /// Final standings: score descending, ties kept in original player
    /// order (the sort is stable).
    pub fn standings(&self) -> Vec<StandingsRow> {
        let mut rows: Vec<StandingsRow> = self
            .players
            .iter()
            .map(|p| StandingsRow {
                name: p.name().to_string(),
                id: p.id(),
                score: p.score(),
                words_correct: p.words_correct(),
                words_assigned: p.words_assigned(),
            })
            .collect();
        rows.sort_by(|a, b| b.score.cmp(&a.score));
        rows
    }
}

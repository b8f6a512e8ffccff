//! Interactive console guesser: prompts on stdout, reads one character per
//! turn from stdin, and renders engine events as gameplay messages.

use std::io::{self, Write};

use crate::guesser::{Guesser, TurnEvent, TurnView};
use crate::hints::HintProvider;

pub struct CliGuesser {
    /// Print the secret word before each prompt (debug aid).
    reveal: bool,
    hints: Box<dyn HintProvider>,
}

impl CliGuesser {
    pub fn new(reveal: bool, hints: Box<dyn HintProvider>) -> Self {
        CliGuesser { reveal, hints }
    }

    fn read_line(&self) -> String {
        let mut line = String::new();
        io::stdin().read_line(&mut line).unwrap_or(0);
        line.trim().to_string()
    }
}

impl Guesser for CliGuesser {
    fn next_guess(&mut self, view: &TurnView) -> char {
        loop {
            if self.reveal {
                println!("[secret: {}]", view.word_text);
            }
            println!(
                "{}, enter your guess ('?' for a hint) [lives {}, score {}]:",
                view.player_name, view.lives_remaining, view.score
            );
            println!("{}", view.masked_word);
            print!("> ");
            io::stdout().flush().unwrap();

            let line = self.read_line();
            if line == "?" {
                match self.hints.similar_word(view.word_text) {
                    Some(hint) => println!("Hint: your word is similar to \"{}\"", hint),
                    None => println!("No hint available for this word."),
                }
                continue;
            }
            match line.chars().next() {
                Some(c) => return c,
                None => println!("Please enter a character."),
            }
        }
    }

    fn observe(&mut self, event: &TurnEvent) {
        match event {
            TurnEvent::PlayerSkipped { name } => {
                println!("Skipping player {}", name);
            }
            TurnEvent::DuplicateGuess { name, guess } => {
                println!(
                    "Sorry {}, you had entered {} previously. Skipping your turn!",
                    name, guess
                );
            }
            TurnEvent::CorrectGuess {
                guess,
                score_delta,
                masked_word,
                guessed_summary,
                ..
            } => {
                println!(
                    "Great job! The letter {} is in your word! +{}",
                    guess, score_delta
                );
                println!("{}", masked_word);
                println!(
                    "P.S. You have guessed the following characters: {}",
                    guessed_summary
                );
            }
            TurnEvent::IncorrectGuess {
                name,
                guess,
                lives_remaining,
                guessed_summary,
            } => {
                println!("Sorry {}, the letter {} is not in the word", name, guess);
                println!("You have {} lives remaining", lives_remaining);
                println!(
                    "P.S. You have guessed the following characters: {}",
                    guessed_summary
                );
            }
            TurnEvent::WordSolved { word, .. } => {
                println!("Congrats on guessing {} correctly!", word);
            }
            TurnEvent::WordFailed { word, .. } => {
                println!("You have used up all of your guesses!");
                println!("The word was {}", word);
            }
            TurnEvent::NextWord {
                words_remaining,
                lives,
                score,
                ..
            } => {
                println!("You have to guess {} more words!", words_remaining);
                println!("Your lives have reset to {}", lives);
                println!("Your score is {}", score);
            }
            TurnEvent::PlayerFinished {
                words_correct,
                words_assigned,
                score,
                ..
            } => {
                println!(
                    "You guessed {} out of {} words correctly",
                    words_correct, words_assigned
                );
                println!("Your final score is {}", score);
            }
            TurnEvent::RoundComplete { round } => {
                println!("End of round {}\n", round);
            }
            TurnEvent::GameOver { rounds, standings } => {
                println!("This game has concluded after {} rounds.", rounds);
                println!("Final Scores:");
                for row in standings {
                    println!("    {}: {}", row.name, row.score);
                }
            }
        }
    }
}

use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use gallows::{
    CliGuesser, Difficulty, EmbeddedWordList, GameConfig, HintProvider, ListHints, NoHints,
    RoundEngine,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Tier {
    Common,
    Uncommon,
    Rare,
}

impl From<Tier> for Difficulty {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Common => Difficulty::Common,
            Tier::Uncommon => Difficulty::Uncommon,
            Tier::Rare => Difficulty::Rare,
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Play an interactive game on this console.
    Play {
        #[arg(long, value_enum, default_value_t = Tier::Common)]
        difficulty: Tier,
        #[arg(long, default_value_t = 2, help = "Words each player must guess")]
        words: usize,
        #[arg(long, default_value_t = 10, help = "Incorrect guesses allowed per word")]
        lives: u32,
        #[arg(
            long,
            help = "Comma-separated player names; prompted interactively when omitted"
        )]
        players: Option<String>,
        #[arg(long, help = "Fix RNG seed for reproducible word draws (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print each secret word before the prompt (debug aid)")]
        reveal: bool,
        #[arg(long, help = "Disable similar-word hints")]
        no_hints: bool,
    },
}

fn prompt(message: &str) -> anyhow::Result<String> {
    print!("{} ", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Ask for a player count and one display name per player, as the console
/// front-end has always done.
fn prompt_player_names() -> anyhow::Result<Vec<String>> {
    let count = loop {
        let answer = prompt("How many players (1-5)?")?;
        match answer.parse::<usize>() {
            Ok(n) if (1..=5).contains(&n) => break n,
            _ => println!("Please enter a number between 1 and 5."),
        }
    };
    let mut names = Vec::with_capacity(count);
    for i in 0..count {
        loop {
            let name = prompt(&format!("Enter display name for player {}:", i + 1))?;
            if name.is_empty() {
                println!("Names cannot be empty.");
            } else {
                names.push(name);
                break;
            }
        }
    }
    Ok(names)
}

fn main() -> anyhow::Result<()> {
    gallows::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            difficulty,
            words,
            lives,
            players,
            seed,
            reveal,
            no_hints,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (word draws will be reproducible)", s);
            }
            let rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let names = match players {
                Some(list) => {
                    let names: Vec<String> = list
                        .split(',')
                        .map(|n| n.trim().to_string())
                        .filter(|n| !n.is_empty())
                        .collect();
                    if names.is_empty() || names.len() > 5 {
                        anyhow::bail!("--players expects between 1 and 5 names");
                    }
                    names
                }
                None => prompt_player_names()?,
            };

            let difficulty = Difficulty::from(difficulty);
            let mut supplier = EmbeddedWordList::new(rng)?;
            let hints: Box<dyn HintProvider> = if no_hints {
                Box::new(NoHints)
            } else {
                Box::new(ListHints::new(supplier.tier_words(difficulty)))
            };

            let config = GameConfig {
                difficulty,
                words_per_player: words,
                lives_per_player: lives,
            };
            let mut engine = RoundEngine::new(config, names, &mut supplier)?;
            let mut guesser = CliGuesser::new(reveal, hints);
            engine.run(&mut guesser)?;
        }
    }
    Ok(())
}

use gallows::{AutoGuesser, Difficulty, EmbeddedWordList, GameConfig, RoundEngine};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if !(4..=6).contains(&args.len()) {
        eprintln!("Usage: {} <seed> <players> <words> [lives] [tier]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let num_players: usize = args[2].parse()?;
    let words: usize = args[3].parse()?;
    let lives: u32 = args.get(4).map(|a| a.parse()).transpose()?.unwrap_or(10);
    let tier: u8 = args.get(5).map(|a| a.parse()).transpose()?.unwrap_or(0);

    let rng = SmallRng::seed_from_u64(seed);
    let mut supplier = EmbeddedWordList::new(rng)?;
    let config = GameConfig {
        difficulty: Difficulty::try_from(tier)?,
        words_per_player: words,
        lives_per_player: lives,
    };
    let names = (1..=num_players).map(|i| format!("sim{}", i)).collect();

    let mut engine = RoundEngine::new(config, names, &mut supplier)?;
    let mut guesser = AutoGuesser::new();
    let standings = engine.run(&mut guesser)?;

    let result = json!({
        "rounds": engine.rounds(),
        "players": standings.iter().map(|row| json!({
            "name": row.name,
            "score": row.score,
            "words_correct": row.words_correct,
            "words_assigned": row.words_assigned,
        })).collect::<Vec<_>>(),
        "winner": standings.first().map(|row| row.name.clone()),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

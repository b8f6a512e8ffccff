use gallows::{GameError, PlayerState, Word};

fn words(texts: &[(&str, f64)]) -> Vec<Word> {
    texts
        .iter()
        .map(|(t, f)| Word::new(*t, *f).unwrap())
        .collect()
}

#[test]
fn test_setup_new_game_resets_all_state() {
    let mut player = PlayerState::new("alice", 0);
    assert!(!player.is_active());

    player
        .setup_new_game(words(&[("cat", 10.0), ("x-ray", 2.0)]))
        .unwrap();
    assert!(player.is_active());
    assert_eq!(player.score(), 0);
    assert_eq!(player.words_correct(), 0);
    assert_eq!(player.words_incorrect(), 0);
    assert_eq!(player.words_attempted(), 0);
    assert_eq!(player.words_assigned(), 2);
    assert!(player.guessed().is_empty());
    assert_eq!(player.incorrect_guesses(), 0);
    assert_eq!(player.letters_remaining(), 3);
    assert_eq!(player.current_word().unwrap().text(), "cat");
}

#[test]
fn test_setup_new_game_rejects_empty_batch() {
    let mut player = PlayerState::new("alice", 0);
    assert!(matches!(
        player.setup_new_game(Vec::new()),
        Err(GameError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_record_guess_is_the_duplicate_guard() {
    let mut player = PlayerState::new("bob", 1);
    player.setup_new_game(words(&[("cat", 10.0)])).unwrap();

    assert!(player.record_guess('a'));
    assert!(!player.record_guess('a'));
    assert!(player.guessed().contains(&'a'));
    assert_eq!(player.guessed().len(), 1);
}

#[test]
fn test_guessed_summary_is_sorted() {
    let mut player = PlayerState::new("bob", 1);
    player.setup_new_game(words(&[("cat", 10.0)])).unwrap();
    player.record_guess('c');
    player.record_guess('a');
    player.record_guess('b');
    assert_eq!(player.guessed_summary(), "a, b, c");
}

#[test]
fn test_word_outcomes_drive_current_index() {
    let mut player = PlayerState::new("cara", 2);
    player
        .setup_new_game(words(&[("cat", 10.0), ("meadow", 2.5)]))
        .unwrap();

    player.record_word_outcome(true);
    assert_eq!(player.words_attempted(), 1);
    assert_eq!(
        player.words_attempted(),
        player.words_correct() + player.words_incorrect()
    );
    assert_eq!(player.current_word().unwrap().text(), "meadow");

    player.setup_new_word().unwrap();
    assert!(player.guessed().is_empty());
    assert_eq!(player.incorrect_guesses(), 0);
    assert_eq!(player.letters_remaining(), 6);
}

#[test]
fn test_current_word_errors_once_exhausted() {
    let mut player = PlayerState::new("dan", 3);
    player.setup_new_game(words(&[("cat", 10.0)])).unwrap();
    player.record_word_outcome(false);

    assert_eq!(
        player.current_word().unwrap_err(),
        GameError::WordsExhausted { player_id: 3 }
    );
}

#[test]
fn test_eliminate_deactivates() {
    let mut player = PlayerState::new("eve", 4);
    player.setup_new_game(words(&[("cat", 10.0)])).unwrap();
    player.eliminate();
    assert!(!player.is_active());
}

#[test]
fn test_score_is_monotone_under_mutators() {
    let mut player = PlayerState::new("fay", 5);
    player.setup_new_game(words(&[("cat", 10.0)])).unwrap();
    player.add_score(13);
    player.add_score(0);
    player.add_score(7);
    assert_eq!(player.score(), 20);
}

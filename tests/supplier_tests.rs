use std::collections::BTreeSet;

use gallows::{Difficulty, EmbeddedWordList, GameError, WordSupplier};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn supplier(seed: u64) -> EmbeddedWordList {
    EmbeddedWordList::new(SmallRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn test_every_tier_has_a_usable_dataset() {
    let lists = supplier(1);
    for difficulty in Difficulty::ALL {
        assert!(lists.tier_len(difficulty) >= 50, "{:?} tier too small", difficulty);
    }
}

#[test]
fn test_returns_requested_count_of_distinct_words() {
    let mut lists = supplier(42);
    for difficulty in Difficulty::ALL {
        let words = lists.random_words(difficulty, 10).unwrap();
        assert_eq!(words.len(), 10);
        let texts: BTreeSet<&str> = words.iter().map(|w| w.text()).collect();
        assert_eq!(texts.len(), 10, "duplicate word in {:?} draw", difficulty);
    }
}

#[test]
fn test_batches_keep_frequency_order() {
    let mut lists = supplier(7);
    let words = lists.random_words(Difficulty::Uncommon, 15).unwrap();
    for pair in words.windows(2) {
        assert!(pair[0].frequency() <= pair[1].frequency());
    }
}

#[test]
fn test_same_seed_draws_the_same_batch() {
    let mut a = supplier(12345);
    let mut b = supplier(12345);
    let batch_a = a.random_words(Difficulty::Rare, 8).unwrap();
    let batch_b = b.random_words(Difficulty::Rare, 8).unwrap();
    let texts = |batch: &[gallows::Word]| -> Vec<String> {
        batch.iter().map(|w| w.text().to_string()).collect()
    };
    assert_eq!(texts(&batch_a), texts(&batch_b));
}

#[test]
fn test_oversized_request_is_rejected() {
    let mut lists = supplier(3);
    let available = lists.tier_len(Difficulty::Rare);
    let err = lists.random_words(Difficulty::Rare, available + 1).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientWords {
            requested: available + 1,
            available,
        }
    );
}

#[test]
fn test_draw_of_entire_tier_succeeds() {
    let mut lists = supplier(9);
    let available = lists.tier_len(Difficulty::Common);
    let words = lists.random_words(Difficulty::Common, available).unwrap();
    assert_eq!(words.len(), available);
}

//! Optional similar-word hints.
//!
//! The hint source is a collaborator outside the core game rules, so it
//! sits behind a trait: the console adapter asks for a hint when the player
//! requests one, and a provider is free to answer with nothing.

use crate::word::Word;

/// Looks up a word similar to the secret, for players who ask for help.
pub trait HintProvider {
    /// A word resembling `text`, or `None` when no hint is available.
    fn similar_word(&self, text: &str) -> Option<String>;
}

/// Provider that never offers hints.
pub struct NoHints;

impl HintProvider for NoHints {
    fn similar_word(&self, _text: &str) -> Option<String> {
        None
    }
}

/// Offline provider that answers with the closest neighbor from a word
/// list, judged by shared prefix length.
pub struct ListHints {
    words: Vec<String>,
}

impl ListHints {
    pub fn new(words: &[Word]) -> Self {
        ListHints {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }
}

fn shared_prefix_len(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).take_while(|(x, y)| x == y).count()
}

impl HintProvider for ListHints {
    fn similar_word(&self, text: &str) -> Option<String> {
        self.words
            .iter()
            .filter(|candidate| candidate.as_str() != text)
            .max_by_key(|candidate| shared_prefix_len(candidate, text))
            .filter(|best| shared_prefix_len(best, text) > 0)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts
            .iter()
            .map(|t| Word::new(*t, 1.0).unwrap())
            .collect()
    }

    #[test]
    fn picks_longest_shared_prefix() {
        let hints = ListHints::new(&words(&["lantern", "ladder", "lunar"]));
        assert_eq!(hints.similar_word("lanyard").as_deref(), Some("lantern"));
    }

    #[test]
    fn never_answers_with_the_secret_itself() {
        let hints = ListHints::new(&words(&["ember"]));
        assert_eq!(hints.similar_word("ember"), None);
    }

    #[test]
    fn no_hints_stays_silent() {
        assert_eq!(NoHints.similar_word("anything"), None);
    }
}

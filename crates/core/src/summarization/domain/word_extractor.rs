use std::collections::HashSet;

use regex::Regex;

/// Tokenizes a sentence into scoring words: lowercased, punctuation-stripped,
/// with empty tokens and stop words dropped.
pub struct WordExtractor {
    stop_words: HashSet<String>,
    non_word: Regex,
}

impl WordExtractor {
    pub fn new(stop_words: HashSet<String>) -> Self {
        Self {
            stop_words,
            non_word: Regex::new(r"[^\w]").unwrap(),
        }
    }

    pub fn split(&self, sentence: &str) -> Vec<String> {
        sentence
            .to_lowercase()
            .split_whitespace()
            .map(|token| self.non_word.replace_all(token, "").into_owned())
            .filter(|word| !word.is_empty() && !self.stop_words.contains(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::STOP_WORDS;

    fn extractor() -> WordExtractor {
        WordExtractor::new(STOP_WORDS.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_lowercases_tokens() {
        let e = extractor();
        assert_eq!(e.split("Soleil Brille"), vec!["soleil", "brille"]);
    }

    #[test]
    fn test_strips_punctuation() {
        let e = extractor();
        assert_eq!(e.split("brille."), vec!["brille"]);
    }

    #[test]
    fn test_drops_stop_words() {
        let e = extractor();
        assert_eq!(e.split("le soleil et la lune"), vec!["soleil", "lune"]);
    }

    #[test]
    fn test_drops_accented_stop_words() {
        let e = extractor();
        assert_eq!(e.split("à Paris où néanmoins"), vec!["paris"]);
    }

    #[test]
    fn test_drops_empty_tokens() {
        let e = extractor();
        assert!(e.split("... !! ..").is_empty());
    }

    #[test]
    fn test_keeps_duplicates() {
        let e = extractor();
        assert_eq!(e.split("soleil soleil soleil"), vec!["soleil"; 3]);
    }

    #[test]
    fn test_custom_stop_word_set() {
        let e = WordExtractor::new(["apple"].iter().map(|w| w.to_string()).collect());
        assert_eq!(e.split("apple pie"), vec!["pie"]);
    }
}

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use super::normalizer::TextNormalizer;
use super::sentence::IndexedSentence;
use super::sentence_splitter::SentenceSplitter;
use super::word_extractor::WordExtractor;
use crate::shared::constants::{ABBREVIATIONS, MIN_CONTENT_WORDS, MIN_TEXT_CHARS, STOP_WORDS};

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("text is too short to summarize")]
    InputTooShort,
    #[error("internal error: {0}")]
    Internal(String),
}

/// Tunable knobs for the summarizer. Defaults match the fixed French
/// configuration in `shared::constants`; tests can inject alternate
/// languages or thresholds.
pub struct SummarizerConfig {
    pub stop_words: HashSet<String>,
    pub abbreviations: Vec<String>,
    pub min_text_chars: usize,
    pub min_content_words: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            abbreviations: ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
            min_text_chars: MIN_TEXT_CHARS,
            min_content_words: MIN_CONTENT_WORDS,
        }
    }
}

/// Frequency-based extractive summarizer.
///
/// Scores each sentence by the sum of its words' normalized document
/// frequencies and re-emits the top-scoring sentences in source order.
/// Stateless across calls; every input yields a result, never a panic.
pub struct Summarizer {
    normalizer: TextNormalizer,
    splitter: SentenceSplitter,
    extractor: WordExtractor,
    min_text_chars: usize,
    min_content_words: usize,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    pub fn new() -> Self {
        Self::with_config(SummarizerConfig::default())
    }

    pub fn with_config(config: SummarizerConfig) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            splitter: SentenceSplitter::new(config.abbreviations),
            extractor: WordExtractor::new(config.stop_words),
            min_text_chars: config.min_text_chars,
            min_content_words: config.min_content_words,
        }
    }

    /// Reduce `text` to its `num_sentences` most informative sentences.
    ///
    /// Inputs under the minimum length are rejected; inputs with no more
    /// sentences than requested are returned unchanged, byte for byte.
    pub fn summarize(&self, text: &str, num_sentences: usize) -> Result<String, SummarizeError> {
        if text.trim().chars().count() < self.min_text_chars {
            return Err(SummarizeError::InputTooShort);
        }

        let cleaned = self.normalizer.normalize(text);
        let sentences: Vec<IndexedSentence> = self
            .splitter
            .split(&cleaned)
            .into_iter()
            .enumerate()
            .map(|(index, text)| IndexedSentence::new(index, text))
            .collect();

        // Nothing to cut: degenerate to identity on the original input
        if sentences.len() <= num_sentences {
            return Ok(text.to_string());
        }

        let words_per_sentence: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.extractor.split(&s.text))
            .collect();
        let weights = word_weights(&words_per_sentence);

        // Score only sentences with enough content words; duplicates of a
        // word within a sentence each contribute their weight
        let mut ranked: Vec<(usize, f64)> = sentences
            .iter()
            .zip(&words_per_sentence)
            .filter(|(_, words)| words.len() > self.min_content_words)
            .map(|(sentence, words)| {
                let score = words.iter().filter_map(|w| weights.get(w)).sum();
                (sentence.index, score)
            })
            .collect();

        // Stable sort: among equal scores, source order wins
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut selected: Vec<usize> = ranked
            .into_iter()
            .take(num_sentences)
            .map(|(index, _)| index)
            .collect();
        selected.sort_unstable();

        log::debug!(
            "Selected {} of {} sentences",
            selected.len(),
            sentences.len()
        );

        let summary = selected
            .into_iter()
            .map(|index| sentences[index].text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        Ok(summary)
    }
}

/// Raw word counts across the document, normalized by the maximum count.
/// Weights land in (0, 1] with the most frequent word at exactly 1.0;
/// an empty word set yields an empty table.
fn word_weights(words_per_sentence: &[Vec<String>]) -> HashMap<String, f64> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for words in words_per_sentence {
        for word in words {
            *counts.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    let max = match counts.values().copied().max() {
        Some(max) => max as f64,
        None => return HashMap::new(),
    };

    counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count as f64 / max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ENERGY_TEXT: &str = "La transition énergétique est devenue un enjeu majeur pour les pays du monde entier face au changement climatique. \
Les gouvernements multiplient les initiatives pour réduire leur dépendance aux énergies fossiles et développer les énergies renouvelables. \
L'énergie solaire connaît une croissance exponentielle, avec des coûts de production qui ont chuté de plus de 80% en dix ans. \
Les éoliennes se déploient sur terre et en mer, offrant une alternative de plus en plus compétitive aux centrales à charbon ou à gaz. \
La mobilité électrique progresse également, avec des ventes de véhicules électriques qui augmentent chaque année. \
Cependant, ces transitions posent de nombreux défis, notamment en termes d'infrastructures, de stockage d'énergie et d'acceptabilité sociale. \
Les réseaux électriques doivent être modernisés pour intégrer ces nouvelles sources d'énergie intermittentes. \
Des technologies de stockage, comme les batteries ou l'hydrogène, sont en développement pour pallier cette intermittence. \
Par ailleurs, certaines populations s'inquiètent de l'impact visuel des éoliennes ou du coût de ces transitions. \
Malgré ces défis, la nécessité de réduire les émissions de gaz à effet de serre pour limiter le réchauffement climatique rend ces transformations incontournables. \
Les experts s'accordent à dire que les prochaines années seront décisives pour réussir cette transition énergétique mondiale.";

    fn cleaned_sentences(text: &str) -> Vec<String> {
        let normalizer = TextNormalizer::new();
        let splitter = SentenceSplitter::new(ABBREVIATIONS.iter().map(|a| a.to_string()).collect());
        splitter.split(&normalizer.normalize(text))
    }

    #[test]
    fn test_short_input_rejected_for_any_count() {
        let s = Summarizer::new();
        for n in [1, 3, 10] {
            let result = s.summarize("Trop court pour un résumé.", n);
            assert!(matches!(result, Err(SummarizeError::InputTooShort)));
        }
    }

    #[test]
    fn test_ninety_nine_chars_rejected() {
        let s = Summarizer::new();
        let text = "a".repeat(99);
        assert!(matches!(
            s.summarize(&text, 3),
            Err(SummarizeError::InputTooShort)
        ));
    }

    #[test]
    fn test_hundred_chars_accepted() {
        let s = Summarizer::new();
        let text = "a".repeat(100);
        // One sentence <= 3 requested: identity
        assert_eq!(s.summarize(&text, 3).unwrap(), text);
    }

    #[test]
    fn test_length_check_counts_trimmed_chars() {
        let s = Summarizer::new();
        let text = format!("   {}   \n", "a".repeat(99));
        assert!(matches!(
            s.summarize(&text, 3),
            Err(SummarizeError::InputTooShort)
        ));
    }

    #[test]
    fn test_too_short_message() {
        assert_eq!(
            SummarizeError::InputTooShort.to_string(),
            "text is too short to summarize"
        );
    }

    #[test]
    fn test_internal_message_embeds_fault_detail() {
        let e = SummarizeError::Internal("speech could not be recognized".to_string());
        assert_eq!(e.to_string(), "internal error: speech could not be recognized");
    }

    #[test]
    fn test_fewer_sentences_than_requested_returns_input_verbatim() {
        let s = Summarizer::new();
        let text = "Les éoliennes  se déploient,  sur terre et en mer !\nElles offrent une alternative compétitive aux centrales à charbon.";
        // Original bytes back, not the cleaned/re-joined rendition
        assert_eq!(s.summarize(text, 3).unwrap(), text);
    }

    #[test]
    fn test_passthrough_is_idempotent() {
        let s = Summarizer::new();
        let text = "Les éoliennes se déploient sur terre et en mer. Elles offrent une alternative compétitive aux centrales à charbon.";
        let once = s.summarize(text, 3).unwrap();
        let twice = s.summarize(&once, 3).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_energy_text_three_sentence_summary() {
        let s = Summarizer::new();
        let summary = s.summarize(ENERGY_TEXT, 3).unwrap();

        let sentences = cleaned_sentences(ENERGY_TEXT);
        assert_eq!(sentences.len(), 11);

        // Exactly three of the eleven sentences, verbatim, in source order
        let picked: Vec<&String> = sentences
            .iter()
            .filter(|sentence| summary.contains(sentence.as_str()))
            .collect();
        assert_eq!(picked.len(), 3);
        let expected = picked
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(summary, expected);
        assert_eq!(summary.matches('.').count(), 3);
        assert!(summary.ends_with('.'));
    }

    #[test]
    fn test_requested_growth_keeps_selected_sentences() {
        let s = Summarizer::new();
        let three = s.summarize(ENERGY_TEXT, 3).unwrap();
        let four = s.summarize(ENERGY_TEXT, 4).unwrap();

        let sentences = cleaned_sentences(ENERGY_TEXT);
        for sentence in sentences.iter().filter(|x| three.contains(x.as_str())) {
            assert!(
                four.contains(sentence.as_str()),
                "sentence dropped when growing the summary: {sentence}"
            );
        }
    }

    #[test]
    fn test_sentences_with_few_content_words_never_selected() {
        let s = Summarizer::new();
        // Two of the six sentences carry three or fewer content words; they
        // can never be selected, so requesting four returns only the four
        // qualifying ones.
        let text = "Le vieux phare éclaire la côte rocheuse chaque nuit sombre. \
Il pleut fort. \
Un gardien solitaire entretient la lampe du phare avec grand soin. \
Le vent souffle. \
Les marins aperçoivent la lumière du phare depuis le large océan. \
Des oiseaux marins nichent sur les falaises abruptes autour du phare.";
        let summary = s.summarize(text, 4).unwrap();
        assert!(!summary.contains("Il pleut fort."));
        assert!(!summary.contains("Le vent souffle."));
        assert_eq!(summary.matches('.').count(), 4);
    }

    #[test]
    fn test_all_sentences_below_content_threshold_yields_empty() {
        let s = Summarizer::new();
        let text = "Le chat dort bien. Le chien court vite. La pluie tombe fort. \
Le vent souffle doucement. La lune brille clair. Le jour se lève.";
        assert!(text.trim().chars().count() >= 100);
        assert_eq!(s.summarize(text, 3).unwrap(), "");
    }

    #[test]
    fn test_duplicate_sentences_kept_distinct() {
        let s = Summarizer::new();
        let repeated = "Le soleil brille fort sur la montagne magnifique.";
        let text = format!(
            "{repeated} Un berger promène ses moutons dans la vallée verte. \
{repeated} Une rivière calme traverse les champs fleuris."
        );
        // The repeated sentence scores highest (its words all reach weight
        // 1.0), so both occurrences land in a three-sentence summary.
        let summary = s.summarize(&text, 3).unwrap();
        assert_eq!(
            summary,
            format!("{repeated} Un berger promène ses moutons dans la vallée verte. {repeated}")
        );
    }

    #[test]
    fn test_custom_config_thresholds_and_language() {
        let config = SummarizerConfig {
            stop_words: ["the", "a", "of", "on"].iter().map(|w| w.to_string()).collect(),
            abbreviations: vec!["Mr.".to_string()],
            min_text_chars: 10,
            min_content_words: 1,
        };
        let s = Summarizer::with_config(config);
        let text = "Bright stars shine above the quiet harbor tonight. Boats rest. \
Bright stars guide the sailors home across dark water.";
        let summary = s.summarize(text, 1).unwrap();
        assert_eq!(summary.matches('.').count(), 1);
        assert!(summary.contains("stars"));
    }

    #[test]
    fn test_word_weights_normalized_to_max() {
        let words = vec![
            vec!["soleil".to_string(), "brille".to_string(), "soleil".to_string()],
            vec!["soleil".to_string(), "lune".to_string()],
        ];
        let weights = word_weights(&words);
        assert_relative_eq!(weights["soleil"], 1.0);
        assert_relative_eq!(weights["brille"], 1.0 / 3.0);
        assert_relative_eq!(weights["lune"], 1.0 / 3.0);
        assert!(weights.values().all(|w| *w > 0.0 && *w <= 1.0));
    }

    #[test]
    fn test_word_weights_empty_input() {
        assert!(word_weights(&[]).is_empty());
        assert!(word_weights(&[vec![]]).is_empty());
    }
}

//! Feature normalization.
//!
//! Converts raw counters into the eight ratio/average features the
//! readability formulae consume. Every feature is one count divided by
//! another, with a single shared convention: a zero *denominator* yields
//! 0.0 rather than an error or NaN. A zero numerator over a nonzero
//! denominator legitimately yields 0.0 through ordinary division. This
//! favors availability over precision for degenerate inputs (a one-word,
//! zero-punctuation document still scores).

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::Counts;

/// Divide two counts; a zero denominator is defined to be 0.0.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Mean sentence length in words.
pub fn mean_sentence_length_in_words(words: usize, sentences: usize) -> f64 {
    ratio(words, sentences)
}

/// Mean word length in syllables.
pub fn mean_word_length_in_syllables(syllables: usize, words: usize) -> f64 {
    ratio(syllables, words)
}

/// Mean word length in characters.
pub fn mean_word_length_in_characters(characters: usize, words: usize) -> f64 {
    ratio(characters, words)
}

/// Ratio of one-syllable words to all words.
pub fn one_syllable_word_ratio(one_syllable_words: usize, words: usize) -> f64 {
    ratio(one_syllable_words, words)
}

/// Ratio of words with three or more syllables to all words.
pub fn three_or_more_syllable_word_ratio(long_words: usize, words: usize) -> f64 {
    ratio(long_words, words)
}

/// Ratio of words with six or more characters to all words.
pub fn six_or_more_character_word_ratio(long_words: usize, words: usize) -> f64 {
    ratio(long_words, words)
}

/// Ratio of sentences to all tokens (punctuation included).
pub fn sentence_word_ratio(sentences: usize, tokens: usize) -> f64 {
    ratio(sentences, tokens)
}

/// Ratio of words to period/colon tokens.
pub fn word_period_colon_ratio(words: usize, periods_and_colons: usize) -> f64 {
    ratio(words, periods_and_colons)
}

/// The normalized features for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Features {
    /// Mean sentence length in words.
    pub mean_sentence_length_in_words: f64,
    /// Mean word length in syllables.
    pub mean_word_length_in_syllables: f64,
    /// Mean word length in characters.
    pub mean_word_length_in_characters: f64,
    /// Ratio of one-syllable words to all words.
    pub one_syllable_word_ratio: f64,
    /// Ratio of ≥3-syllable words to all words.
    pub three_or_more_syllable_word_ratio: f64,
    /// Ratio of ≥6-character words to all words.
    pub six_or_more_character_word_ratio: f64,
    /// Ratio of sentences to all tokens.
    pub sentence_word_ratio: f64,
    /// Ratio of words to period/colon tokens.
    pub word_period_colon_ratio: f64,
}

impl Features {
    /// Derive all eight features from a populated counts record.
    ///
    /// Pure: reads the counts, mutates nothing.
    #[tracing::instrument(skip_all)]
    pub fn from_counts(counts: &Counts) -> Self {
        let words = counts.tokens_no_punct;
        Self {
            mean_sentence_length_in_words: mean_sentence_length_in_words(words, counts.sentences),
            mean_word_length_in_syllables: mean_word_length_in_syllables(counts.syllables, words),
            mean_word_length_in_characters: mean_word_length_in_characters(
                counts.characters,
                words,
            ),
            one_syllable_word_ratio: one_syllable_word_ratio(counts.words_1_syllable, words),
            three_or_more_syllable_word_ratio: three_or_more_syllable_word_ratio(
                counts.words_3_or_more_syllables,
                words,
            ),
            six_or_more_character_word_ratio: six_or_more_character_word_ratio(
                counts.words_6_or_more_characters,
                words,
            ),
            sentence_word_ratio: sentence_word_ratio(counts.sentences, counts.tokens),
            word_period_colon_ratio: word_period_colon_ratio(words, counts.periods_and_colons),
        }
    }

    /// Map the features to their prefixed string keys for serialization.
    ///
    /// Key names match the original corpus tooling so downstream CSV
    /// consumers stay compatible.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            (
                "FEAT_mean_sentence_length_in_words".to_string(),
                self.mean_sentence_length_in_words,
            ),
            (
                "FEAT_mean_word_length_in_syllables".to_string(),
                self.mean_word_length_in_syllables,
            ),
            (
                "FEAT_mean_word_length_in_characters".to_string(),
                self.mean_word_length_in_characters,
            ),
            (
                "FEAT_avg_num_1_syllable_words".to_string(),
                self.one_syllable_word_ratio,
            ),
            (
                "FEAT_avg_num_3_or_more_syllable_words".to_string(),
                self.three_or_more_syllable_word_ratio,
            ),
            (
                "FEAT_avg_num_6_or_more_character_words".to_string(),
                self.six_or_more_character_word_ratio,
            ),
            (
                "FEAT_sentence_word_ratio".to_string(),
                self.sentence_word_ratio,
            ),
            (
                "FEAT_word_dot_ratio".to_string(),
                self.word_period_colon_ratio,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_yields_zero_for_every_feature() {
        assert_eq!(mean_sentence_length_in_words(5, 0), 0.0);
        assert_eq!(mean_word_length_in_syllables(5, 0), 0.0);
        assert_eq!(mean_word_length_in_characters(5, 0), 0.0);
        assert_eq!(one_syllable_word_ratio(5, 0), 0.0);
        assert_eq!(three_or_more_syllable_word_ratio(5, 0), 0.0);
        assert_eq!(six_or_more_character_word_ratio(5, 0), 0.0);
        assert_eq!(sentence_word_ratio(5, 0), 0.0);
        assert_eq!(word_period_colon_ratio(5, 0), 0.0);
    }

    #[test]
    fn zero_numerator_divides_normally() {
        assert_eq!(three_or_more_syllable_word_ratio(0, 4), 0.0);
        assert_eq!(word_period_colon_ratio(0, 2), 0.0);
    }

    #[test]
    fn from_counts_on_empty_document_is_all_zero() {
        let features = Features::from_counts(&Counts::default());
        assert_eq!(features, Features::default());
        // Explicitly finite, never NaN
        assert!(features.mean_sentence_length_in_words.is_finite());
    }

    #[test]
    fn from_counts_matches_manual_ratios() {
        let counts = Counts {
            sentences: 2,
            tokens: 6,
            tokens_no_punct: 4,
            periods_and_colons: 2,
            syllables: 4,
            characters: 14,
            words_1_syllable: 4,
            words_2_or_less_syllables: 4,
            words_3_or_more_syllables: 0,
            words_6_or_more_characters: 0,
        };
        let features = Features::from_counts(&counts);
        assert_eq!(features.mean_sentence_length_in_words, 2.0);
        assert_eq!(features.mean_word_length_in_syllables, 1.0);
        assert_eq!(features.mean_word_length_in_characters, 3.5);
        assert_eq!(features.one_syllable_word_ratio, 1.0);
        assert_eq!(features.three_or_more_syllable_word_ratio, 0.0);
        assert_eq!(features.six_or_more_character_word_ratio, 0.0);
        assert_eq!(features.sentence_word_ratio, 2.0 / 6.0);
        assert_eq!(features.word_period_colon_ratio, 2.0);
    }

    #[test]
    fn map_keys_are_stable() {
        let map = Features::default().to_map();
        assert_eq!(map.len(), 8);
        assert!(map.contains_key("FEAT_mean_sentence_length_in_words"));
        assert!(map.contains_key("FEAT_word_dot_ratio"));
    }
}

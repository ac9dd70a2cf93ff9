//! Count accumulation over tokenized sentences.
//!
//! A single pass walks every token of every sentence, classifies it against
//! the punctuation set, and accumulates the ten counters of [`Counts`].
//! Punctuation tokens are never examined for syllables or length; words
//! contribute to exactly one syllable bucket (none, 1, ≤2, ≥3 — where the
//! ≤2 bucket contains the 1-syllable words) and exactly one length bucket
//! (<6 or ≥6 characters).
//!
//! The accumulator carries no state between calls: each invocation builds a
//! fresh [`Counts`], so re-running on the same input yields identical
//! results.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::schema::CountSchema;
use crate::syllables::count_syllables;
use crate::tokens::{PunctuationSet, TokenClass, is_period_or_colon};

/// Raw counters for one document. All fields are plain accumulations; no
/// arithmetic here can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Counts {
    /// Total sentences.
    pub sentences: usize,
    /// Total tokens, punctuation included.
    pub tokens: usize,
    /// Total tokens excluding punctuation.
    pub tokens_no_punct: usize,
    /// Literal `.` or `:` tokens.
    pub periods_and_colons: usize,
    /// Total syllables across all words.
    pub syllables: usize,
    /// Total characters across all words.
    pub characters: usize,
    /// Words with exactly one syllable.
    pub words_1_syllable: usize,
    /// Words with two or fewer syllables (superset of the one-syllable count).
    pub words_2_or_less_syllables: usize,
    /// Words with three or more syllables.
    pub words_3_or_more_syllables: usize,
    /// Words with six or more characters.
    pub words_6_or_more_characters: usize,
}

impl Counts {
    /// Map the counters named by `schema` to their prefixed string keys.
    ///
    /// This is the serialization boundary: the typed struct stays the unit
    /// of computation, and only the keys the schema lists appear in the
    /// output map.
    pub fn to_map(&self, schema: &CountSchema) -> BTreeMap<String, f64> {
        schema
            .counters()
            .iter()
            .map(|counter| (counter.key(), counter.value(self) as f64))
            .collect()
    }
}

/// Observer for the diagnostic dump mode.
///
/// The accumulator reports every classification event; implementations may
/// record them (see [`crate::dump::DumpWriter`]) but can never alter the
/// counting itself. All methods default to no-ops.
#[allow(unused_variables)]
pub trait CountObserver {
    /// A sentence is about to be scanned. `index` is 1-based.
    fn on_sentence(&mut self, index: usize, tokens: &[String]) {}
    /// Any token was encountered.
    fn on_token(&mut self, token: &str) {}
    /// A token classified as punctuation.
    fn on_punctuation(&mut self, token: &str) {}
    /// A punctuation token that is literally `.` or `:`.
    fn on_period_or_colon(&mut self, token: &str) {}
    /// A token classified as a word.
    fn on_word(&mut self, token: &str) {}
    /// A word together with its heuristic syllable count.
    fn on_syllables(&mut self, token: &str, syllables: usize) {}
    /// A word with six or more characters.
    fn on_long_word(&mut self, token: &str) {}
}

/// The no-op observer used by the plain entry point.
impl CountObserver for () {}

/// Accumulate counts over pre-tokenized sentences.
///
/// Tokenization happens upstream; this function performs no segmentation.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn accumulate(sentences: &[Vec<String>], punctuation: &PunctuationSet) -> Counts {
    accumulate_observed(sentences, punctuation, &mut ())
}

/// Accumulate counts, reporting every classification event to `observer`.
pub fn accumulate_observed(
    sentences: &[Vec<String>],
    punctuation: &PunctuationSet,
    observer: &mut dyn CountObserver,
) -> Counts {
    let mut counts = Counts {
        sentences: sentences.len(),
        ..Counts::default()
    };

    for (index, sentence) in sentences.iter().enumerate() {
        observer.on_sentence(index + 1, sentence);
        counts.tokens += sentence.len();

        for token in sentence {
            observer.on_token(token);

            match punctuation.classify(token) {
                TokenClass::Punctuation => {
                    observer.on_punctuation(token);
                    if is_period_or_colon(token) {
                        counts.periods_and_colons += 1;
                        observer.on_period_or_colon(token);
                    }
                }
                TokenClass::Word => {
                    counts.tokens_no_punct += 1;
                    observer.on_word(token);

                    let syllables = count_syllables(token);
                    counts.syllables += syllables;
                    observer.on_syllables(token, syllables);
                    if syllables > 2 {
                        counts.words_3_or_more_syllables += 1;
                    } else if syllables > 0 {
                        counts.words_2_or_less_syllables += 1;
                        if syllables == 1 {
                            counts.words_1_syllable += 1;
                        }
                    }
                    // Vowel-free tokens land in no syllable bucket at all.

                    let chars = token.chars().count();
                    counts.characters += chars;
                    if chars > 5 {
                        counts.words_6_or_more_characters += 1;
                        observer.on_long_word(token);
                    }
                }
            }
        }
    }

    counts
}

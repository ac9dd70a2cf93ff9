//! Token classification.
//!
//! The pipeline consumes pre-tokenized sentences; the only per-token
//! decision it makes is membership in a fixed punctuation symbol set.
//! Every token is either punctuation or a word, never both.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Punctuation symbols recognized by default.
const DEFAULT_PUNCTUATION: &[&str] = &[
    ".", ":", ",", ";", "!", "?", "\"", "'", "(", ")", "[", "]", "{", "}", "<", ">", "/", "\\", "-",
];

/// Classification of a single token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// A member of the punctuation symbol set.
    Punctuation,
    /// Anything else.
    Word,
}

/// A fixed set of strings recognized as punctuation tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PunctuationSet {
    symbols: HashSet<String>,
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::new(DEFAULT_PUNCTUATION.iter().map(ToString::to_string))
    }
}

impl PunctuationSet {
    /// Build a punctuation set from arbitrary symbols.
    pub fn new(symbols: impl IntoIterator<Item = String>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Classify a token as punctuation or word.
    pub fn classify(&self, token: &str) -> TokenClass {
        if self.symbols.contains(token) {
            TokenClass::Punctuation
        } else {
            TokenClass::Word
        }
    }

    /// Whether the token is a member of this set.
    pub fn contains(&self, token: &str) -> bool {
        self.symbols.contains(token)
    }
}

/// Whether a token counts toward the periods-and-colons counter.
///
/// The subtype test is literal: only `.` and `:` qualify, regardless of
/// what else the punctuation set contains.
pub fn is_period_or_colon(token: &str) -> bool {
    token == "." || token == ":"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_covers_sentence_punctuation() {
        let punct = PunctuationSet::default();
        for sym in [".", ":", ",", ";", "!", "?", "(", ")", "-"] {
            assert_eq!(punct.classify(sym), TokenClass::Punctuation, "{sym}");
        }
    }

    #[test]
    fn words_are_not_punctuation() {
        let punct = PunctuationSet::default();
        assert_eq!(punct.classify("Hund"), TokenClass::Word);
        assert_eq!(punct.classify("läuft"), TokenClass::Word);
        // Multi-character symbol runs are not in the set either.
        assert_eq!(punct.classify("..."), TokenClass::Word);
    }

    #[test]
    fn period_colon_subtype() {
        assert!(is_period_or_colon("."));
        assert!(is_period_or_colon(":"));
        assert!(!is_period_or_colon(","));
        assert!(!is_period_or_colon("!"));
    }

    #[test]
    fn custom_set_overrides_default() {
        let punct = PunctuationSet::new(vec![".".to_string()]);
        assert!(punct.contains("."));
        assert!(!punct.contains(","));
    }
}

//! Count-definition schema.
//!
//! The set of counter names the pipeline exposes is driven by an external
//! newline-delimited source (one counter name per line). The schema decides
//! which keys the serialized counts map contains; the arithmetic itself is
//! typed and does not consult it. An unreadable source or an unknown name
//! is a configuration error — there is no silent fallback.

use std::str::FromStr;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::counts::Counts;
use crate::error::{ConfigError, ConfigResult};

/// The counters this pipeline computes.
///
/// Serialized keys carry the `COUNTS_` prefix used by downstream CSV
/// consumers; the definition-file lines use the unprefixed names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterName {
    /// Total sentences.
    Sentences,
    /// Total tokens, punctuation included.
    Tokens,
    /// Total tokens excluding punctuation ("words").
    TokensNoPunct,
    /// Literal `.` or `:` tokens.
    PeriodsAndColons,
    /// Total syllables across all words.
    Syllables,
    /// Total characters across all words.
    Characters,
    /// Words with exactly one syllable.
    Words1Syllable,
    /// Words with two or fewer syllables (includes the one-syllable words).
    Words2OrLessSyllables,
    /// Words with three or more syllables.
    Words3OrMoreSyllables,
    /// Words with six or more characters.
    Words6OrMoreCharacters,
}

impl CounterName {
    /// All counters, in definition-file order.
    pub const ALL: [Self; 10] = [
        Self::Sentences,
        Self::Tokens,
        Self::TokensNoPunct,
        Self::PeriodsAndColons,
        Self::Syllables,
        Self::Characters,
        Self::Words1Syllable,
        Self::Words2OrLessSyllables,
        Self::Words3OrMoreSyllables,
        Self::Words6OrMoreCharacters,
    ];

    /// The unprefixed name used in count-definition files.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sentences => "num_sentences",
            Self::Tokens => "num_tokens",
            Self::TokensNoPunct => "num_tokens_no_punct",
            Self::PeriodsAndColons => "num_periods_and_colons",
            Self::Syllables => "num_syllables",
            Self::Characters => "num_characters",
            Self::Words1Syllable => "num_words_1_syllable",
            Self::Words2OrLessSyllables => "num_words_2_or_less_syllables",
            Self::Words3OrMoreSyllables => "num_words_3_or_more_syllables",
            Self::Words6OrMoreCharacters => "num_words_6_or_more_characters",
        }
    }

    /// The prefixed key used in the serialized result record.
    pub fn key(self) -> String {
        format!("COUNTS_{}", self.name())
    }

    /// Read this counter's value out of a populated [`Counts`].
    pub const fn value(self, counts: &Counts) -> usize {
        match self {
            Self::Sentences => counts.sentences,
            Self::Tokens => counts.tokens,
            Self::TokensNoPunct => counts.tokens_no_punct,
            Self::PeriodsAndColons => counts.periods_and_colons,
            Self::Syllables => counts.syllables,
            Self::Characters => counts.characters,
            Self::Words1Syllable => counts.words_1_syllable,
            Self::Words2OrLessSyllables => counts.words_2_or_less_syllables,
            Self::Words3OrMoreSyllables => counts.words_3_or_more_syllables,
            Self::Words6OrMoreCharacters => counts.words_6_or_more_characters,
        }
    }
}

impl FromStr for CounterName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ConfigError::UnknownCounter {
                name: s.to_string(),
            })
    }
}

/// A validated list of counter names from a count-definition source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSchema {
    counters: Vec<CounterName>,
}

impl Default for CountSchema {
    /// The built-in schema listing all ten counters.
    fn default() -> Self {
        Self {
            counters: CounterName::ALL.to_vec(),
        }
    }
}

impl CountSchema {
    /// Parse a count-definition source: one counter name per line, blank
    /// lines ignored.
    pub fn parse(source: &str) -> ConfigResult<Self> {
        let counters = source
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(CounterName::from_str)
            .collect::<ConfigResult<Vec<_>>>()?;
        Ok(Self { counters })
    }

    /// Load a count-definition file.
    ///
    /// Fails with [`ConfigError::CountDefinitions`] if the file is missing
    /// or unreadable, and [`ConfigError::UnknownCounter`] for names this
    /// pipeline does not compute.
    #[tracing::instrument]
    pub fn from_path(path: &Utf8Path) -> ConfigResult<Self> {
        let source = std::fs::read_to_string(path.as_std_path()).map_err(|source| {
            ConfigError::CountDefinitions {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::parse(&source)
    }

    /// The counters this schema exposes, in source order.
    pub fn counters(&self) -> &[CounterName] {
        &self.counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schema_lists_all_counters() {
        let schema = CountSchema::default();
        assert_eq!(schema.counters().len(), 10);
    }

    #[test]
    fn parse_accepts_known_names() {
        let schema = CountSchema::parse("num_sentences\nnum_tokens\n").unwrap();
        assert_eq!(
            schema.counters(),
            &[CounterName::Sentences, CounterName::Tokens]
        );
    }

    #[test]
    fn parse_skips_blank_lines() {
        let schema = CountSchema::parse("\nnum_syllables\n\n  \n").unwrap();
        assert_eq!(schema.counters(), &[CounterName::Syllables]);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = CountSchema::parse("num_sentences\nnum_emoji\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownCounter { name } if name == "num_emoji"));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = CountSchema::from_path(Utf8Path::new("/nonexistent/counts.txt")).unwrap_err();
        assert!(matches!(err, ConfigError::CountDefinitions { .. }));
    }

    #[test]
    fn from_path_reads_definitions() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("counts.txt");
        std::fs::write(&path, "num_sentences\nnum_characters\n").unwrap();
        let path = camino::Utf8PathBuf::try_from(path).unwrap();

        let schema = CountSchema::from_path(&path).unwrap();
        assert_eq!(
            schema.counters(),
            &[CounterName::Sentences, CounterName::Characters]
        );
    }

    #[test]
    fn keys_carry_counts_prefix() {
        assert_eq!(CounterName::Sentences.key(), "COUNTS_num_sentences");
        assert_eq!(
            CounterName::Words6OrMoreCharacters.key(),
            "COUNTS_num_words_6_or_more_characters"
        );
    }
}

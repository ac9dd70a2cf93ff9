//! Core library for lesbar.
//!
//! Computes readability scores for pre-tokenized German documents in three
//! stages: the count accumulator walks tokenized sentences once and fills a
//! typed counter record, the feature normalizer turns counters into
//! ratio/average features (zero denominators yield 0, by design), and the
//! formula evaluator applies twelve published readability formulae (Flesch,
//! Wiener Sachtextformeln, Lix, Gunning Fog, Coleman-Liau, ARI, Miyazaki)
//! to the features. The merged result record is the output contract toward
//! CSV writers and statistical consumers.
//!
//! # Modules
//!
//! - [`counts`] - Count accumulation over tokenized sentences
//! - [`features`] - Ratio/average feature derivation
//! - [`formulae`] - Readability formulae
//! - [`record`] - The merged per-document result record
//! - [`schema`] - Count-definition schema loading
//! - [`syllables`] - The vowel-run syllable heuristic
//! - [`text`] - Default tokenizer collaborator
//! - [`tokens`] - Punctuation classification
//! - [`dump`] - Diagnostic trace-file observer
//! - [`config`] - Configuration loading and discovery
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use lesbar_core::record::score_sentences;
//! use lesbar_core::tokens::PunctuationSet;
//!
//! let sentences = lesbar_core::text::tokenize("Der Hund läuft. Ja.");
//! let record = score_sentences(&sentences, &PunctuationSet::default());
//! assert_eq!(record.counts.sentences, 2);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod counts;
pub mod dump;
pub mod error;
pub mod features;
pub mod formulae;
pub mod record;
pub mod schema;
pub mod syllables;
pub mod text;
pub mod tokens;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use counts::{CountObserver, Counts};
pub use error::{ConfigError, ConfigResult, DumpError, DumpResult};
pub use features::Features;
pub use formulae::Formulae;
pub use record::{ScoreRecord, score_sentences};
pub use schema::{CountSchema, CounterName};
pub use tokens::PunctuationSet;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

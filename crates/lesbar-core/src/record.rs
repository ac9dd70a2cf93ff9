//! The per-document result record.
//!
//! Ties the three pipeline stages together: counts → features → formulae.
//! Each stage reads its predecessor's output and mutates nothing; all three
//! are built fresh per document, so documents are fully independent and a
//! batch driver may process them in any order.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::counts::{self, CountObserver, Counts};
use crate::features::Features;
use crate::formulae::Formulae;
use crate::schema::CountSchema;
use crate::tokens::PunctuationSet;

/// Counts, features, and formula scores for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreRecord {
    /// Raw counters.
    pub counts: Counts,
    /// Normalized features.
    pub features: Features,
    /// Readability formula scores.
    pub formulae: Formulae,
}

impl ScoreRecord {
    /// Merge all three stages into one string-keyed numeric map.
    ///
    /// This is the sole output contract toward CSV writers and statistical
    /// consumers. The `BTreeMap` gives stable sorted key enumeration; the
    /// counts portion is filtered by the schema.
    pub fn to_map(&self, schema: &CountSchema) -> BTreeMap<String, f64> {
        let mut map = self.counts.to_map(schema);
        map.extend(self.features.to_map());
        map.extend(self.formulae.to_map());
        map
    }
}

/// Score one pre-tokenized document.
///
/// The tokenizer is an external collaborator; this entry point only
/// consumes its output shape (sentences of token strings).
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn score_sentences(sentences: &[Vec<String>], punctuation: &PunctuationSet) -> ScoreRecord {
    score_sentences_observed(sentences, punctuation, &mut ())
}

/// Score one document, reporting accumulator events to `observer`.
pub fn score_sentences_observed(
    sentences: &[Vec<String>],
    punctuation: &PunctuationSet,
    observer: &mut dyn CountObserver,
) -> ScoreRecord {
    let counts = counts::accumulate_observed(sentences, punctuation, observer);
    let features = Features::from_counts(&counts);
    let formulae = Formulae::from_features(&features);
    ScoreRecord {
        counts,
        features,
        formulae,
    }
}

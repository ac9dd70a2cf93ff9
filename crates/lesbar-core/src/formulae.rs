//! Published readability formulae.
//!
//! Each formula is a closed-form affine combination of one to four
//! normalized features, implemented as an independent function taking only
//! the features it reads. That keeps every formula directly unit-testable
//! and reusable for sensitivity sweeps (vary one feature, hold the rest).
//!
//! Coefficients are the published values; no rounding is applied here.
//! Callers round for display. Note that the Vienna and Coleman-Liau
//! formulae are applied to plain ratios (0–1), not percentages — the
//! coefficients below are calibrated against exactly the features produced
//! by [`crate::features`], including the syllable heuristic's quirks.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::features::Features;

/// Amstad's re-parameterization of Flesch Reading Ease for German (1978).
///
/// `180 − sentLen − wordLenSyll·58.5`. Higher values mean easier text.
pub fn amstad_readability_index(sent_len: f64, word_len_syll: f64) -> f64 {
    180.0 - sent_len - word_len_syll * 58.5
}

/// Flesch Reading Ease (1948), original English parameterization.
///
/// `206.853 − 1.015·sentLen − 84.6·wordLenSyll`. Higher values mean easier
/// text. Sometimes preferred over Amstad even for German.
pub fn flesch_reading_ease(sent_len: f64, word_len_syll: f64) -> f64 {
    206.853 - 1.015 * sent_len - 84.6 * word_len_syll
}

/// Flesch-Kincaid Grade Level: Flesch Reading Ease rescaled to school
/// grades.
///
/// `0.39·sentLen + 11.8·wordLenSyll − 15.59`.
pub fn flesch_kincaid_grade_level(sent_len: f64, word_len_syll: f64) -> f64 {
    0.39f64.mul_add(sent_len, 11.8 * word_len_syll) - 15.59
}

/// First Wiener Sachtextformel (Vienna formula for factual texts).
pub fn first_vienna_formula(
    ratio_3_syll: f64,
    sent_len: f64,
    ratio_6_char: f64,
    ratio_1_syll: f64,
) -> f64 {
    0.1935 * ratio_3_syll + 0.1672 * sent_len + 0.1297 * ratio_6_char - 0.0327 * ratio_1_syll
        - 0.875
}

/// Second Wiener Sachtextformel.
pub fn second_vienna_formula(ratio_3_syll: f64, sent_len: f64, ratio_6_char: f64) -> f64 {
    0.2007 * ratio_3_syll + 0.1682 * sent_len + 0.1373 * ratio_6_char - 2.779
}

/// Third Wiener Sachtextformel.
pub fn third_vienna_formula(ratio_3_syll: f64, sent_len: f64) -> f64 {
    0.2963 * ratio_3_syll + 0.1905 * sent_len - 1.1144
}

/// Fourth Wiener Sachtextformel.
pub fn fourth_vienna_formula(ratio_3_syll: f64, sent_len: f64) -> f64 {
    0.2744 * ratio_3_syll + 0.2656 * sent_len - 1.693
}

/// Lix readability index (Björnsson).
///
/// `sentLen + ratio6char`.
pub fn lix(sent_len: f64, ratio_6_char: f64) -> f64 {
    sent_len + ratio_6_char
}

/// Gunning Fog index.
///
/// `0.4·(sentLen + ratio3syll)`.
pub fn gunning_fog(sent_len: f64, ratio_3_syll: f64) -> f64 {
    0.4 * (sent_len + ratio_3_syll)
}

/// Coleman-Liau index.
///
/// `5.88·wordLenChar − 29.6·sentWordRatio − 15.8`.
pub fn coleman_liau(word_len_char: f64, sentence_word_ratio: f64) -> f64 {
    5.88 * word_len_char - 29.6 * sentence_word_ratio - 15.8
}

/// Automated Readability Index.
///
/// `4.71·wordLenChar + 0.5·sentLen − 21.43`.
pub fn automated_readability_index(word_len_char: f64, sent_len: f64) -> f64 {
    4.71f64.mul_add(word_len_char, 0.5 * sent_len) - 21.43
}

/// Miyazaki EFL Readability Index (Greenfield 1999).
///
/// `164.935 − 18.792·wordLenChar − 1.916·sentLen`. Calibrated for Japanese
/// L2 readers of English academic texts; average score around 50.
pub fn miyazaki_efl_index(word_len_char: f64, sent_len: f64) -> f64 {
    164.935 - 18.792 * word_len_char - 1.916 * sent_len
}

/// All formula scores for one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Formulae {
    /// Amstad Readability Index.
    pub amstad_readability_index: f64,
    /// Flesch Reading Ease.
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade_level: f64,
    /// First Wiener Sachtextformel.
    pub first_vienna_formula: f64,
    /// Second Wiener Sachtextformel.
    pub second_vienna_formula: f64,
    /// Third Wiener Sachtextformel.
    pub third_vienna_formula: f64,
    /// Fourth Wiener Sachtextformel.
    pub fourth_vienna_formula: f64,
    /// Lix readability index.
    pub lix: f64,
    /// Gunning Fog index.
    pub gunning_fog: f64,
    /// Coleman-Liau index.
    pub coleman_liau: f64,
    /// Automated Readability Index.
    pub automated_readability_index: f64,
    /// Miyazaki EFL Readability Index.
    pub miyazaki_efl_index: f64,
}

impl Formulae {
    /// Evaluate every formula against a populated feature set.
    ///
    /// Pure: reads the features, mutates nothing. Finite inputs always
    /// produce finite outputs — every formula is affine.
    #[tracing::instrument(skip_all)]
    pub fn from_features(features: &Features) -> Self {
        let sent_len = features.mean_sentence_length_in_words;
        let word_len_syll = features.mean_word_length_in_syllables;
        let word_len_char = features.mean_word_length_in_characters;
        let ratio_1_syll = features.one_syllable_word_ratio;
        let ratio_3_syll = features.three_or_more_syllable_word_ratio;
        let ratio_6_char = features.six_or_more_character_word_ratio;

        Self {
            amstad_readability_index: amstad_readability_index(sent_len, word_len_syll),
            flesch_reading_ease: flesch_reading_ease(sent_len, word_len_syll),
            flesch_kincaid_grade_level: flesch_kincaid_grade_level(sent_len, word_len_syll),
            first_vienna_formula: first_vienna_formula(
                ratio_3_syll,
                sent_len,
                ratio_6_char,
                ratio_1_syll,
            ),
            second_vienna_formula: second_vienna_formula(ratio_3_syll, sent_len, ratio_6_char),
            third_vienna_formula: third_vienna_formula(ratio_3_syll, sent_len),
            fourth_vienna_formula: fourth_vienna_formula(ratio_3_syll, sent_len),
            lix: lix(sent_len, ratio_6_char),
            gunning_fog: gunning_fog(sent_len, ratio_3_syll),
            coleman_liau: coleman_liau(word_len_char, features.sentence_word_ratio),
            automated_readability_index: automated_readability_index(word_len_char, sent_len),
            miyazaki_efl_index: miyazaki_efl_index(word_len_char, sent_len),
        }
    }

    /// Map the scores to their prefixed string keys for serialization.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            (
                "FLESCH_amstad_readability_index".to_string(),
                self.amstad_readability_index,
            ),
            (
                "FLESCH_flesch_reading_ease".to_string(),
                self.flesch_reading_ease,
            ),
            (
                "FLESCH_flesch_kincaid_grade_level".to_string(),
                self.flesch_kincaid_grade_level,
            ),
            (
                "VIENNA_1st_vienna_formula_for_factual_texts".to_string(),
                self.first_vienna_formula,
            ),
            (
                "VIENNA_2nd_vienna_formula_for_factual_texts".to_string(),
                self.second_vienna_formula,
            ),
            (
                "VIENNA_3rd_vienna_formula_for_factual_texts".to_string(),
                self.third_vienna_formula,
            ),
            (
                "VIENNA_4th_vienna_formula_for_factual_texts".to_string(),
                self.fourth_vienna_formula,
            ),
            ("OTHER_lix_readability_index".to_string(), self.lix),
            ("OTHER_gunning_fog_index".to_string(), self.gunning_fog),
            ("OTHER_coleman_liau_index".to_string(), self.coleman_liau),
            (
                "OTHER_automated_readability_index".to_string(),
                self.automated_readability_index,
            ),
            (
                "L2_miyazaki_efl_readability_index".to_string(),
                self.miyazaki_efl_index,
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn boundary_values_at_zero_features() {
        assert!(close(flesch_reading_ease(0.0, 0.0), 206.853));
        assert!(close(amstad_readability_index(0.0, 0.0), 180.0));
        assert!(close(lix(0.0, 0.0), 0.0));
        assert!(close(flesch_kincaid_grade_level(0.0, 0.0), -15.59));
        assert!(close(gunning_fog(0.0, 0.0), 0.0));
        assert!(close(coleman_liau(0.0, 0.0), -15.8));
        assert!(close(automated_readability_index(0.0, 0.0), -21.43));
        assert!(close(miyazaki_efl_index(0.0, 0.0), 164.935));
        assert!(close(first_vienna_formula(0.0, 0.0, 0.0, 0.0), -0.875));
        assert!(close(second_vienna_formula(0.0, 0.0, 0.0), -2.779));
        assert!(close(third_vienna_formula(0.0, 0.0), -1.1144));
        assert!(close(fourth_vienna_formula(0.0, 0.0), -1.693));
    }

    #[test]
    fn amstad_weights_syllables() {
        assert!(close(amstad_readability_index(10.0, 1.5), 180.0 - 10.0 - 87.75));
    }

    #[test]
    fn flesch_kincaid_matches_affine_form() {
        let sent_len = 12.0;
        let word_len_syll = 1.7;
        let expected = 0.39 * sent_len + 11.8 * word_len_syll - 15.59;
        assert!(close(
            flesch_kincaid_grade_level(sent_len, word_len_syll),
            expected
        ));
    }

    #[test]
    fn vienna_formulae_use_published_coefficients() {
        assert!(close(
            first_vienna_formula(0.2, 14.0, 0.3, 0.5),
            0.1935 * 0.2 + 0.1672 * 14.0 + 0.1297 * 0.3 - 0.0327 * 0.5 - 0.875
        ));
        assert!(close(
            second_vienna_formula(0.2, 14.0, 0.3),
            0.2007 * 0.2 + 0.1682 * 14.0 + 0.1373 * 0.3 - 2.779
        ));
    }

    #[test]
    fn all_formulae_finite_for_finite_features() {
        let features = Features {
            mean_sentence_length_in_words: 23.5,
            mean_word_length_in_syllables: 1.9,
            mean_word_length_in_characters: 6.2,
            one_syllable_word_ratio: 0.4,
            three_or_more_syllable_word_ratio: 0.25,
            six_or_more_character_word_ratio: 0.45,
            sentence_word_ratio: 0.04,
            word_period_colon_ratio: 21.0,
        };
        let formulae = Formulae::from_features(&features);
        for (key, value) in formulae.to_map() {
            assert!(value.is_finite(), "{key} is not finite");
        }
    }

    #[test]
    fn zero_features_produce_constant_terms() {
        let formulae = Formulae::from_features(&Features::default());
        assert!(close(formulae.flesch_reading_ease, 206.853));
        assert!(close(formulae.amstad_readability_index, 180.0));
        assert!(close(formulae.lix, 0.0));
        assert!(close(formulae.second_vienna_formula, -2.779));
    }

    #[test]
    fn map_has_all_twelve_scores() {
        let map = Formulae::default().to_map();
        assert_eq!(map.len(), 12);
        assert!(map.contains_key("FLESCH_flesch_reading_ease"));
        assert!(map.contains_key("VIENNA_4th_vienna_formula_for_factual_texts"));
        assert!(map.contains_key("L2_miyazaki_efl_readability_index"));
    }
}

//! Syllable counting via a vowel-run heuristic.
//!
//! Approximates German syllabification from the character sequence alone:
//! each vowel opens a syllable nucleus, and a following vowel (diphthong)
//! or any doubled letter is absorbed into the same nucleus instead of
//! starting a new scan position.
//!
//! The doubled-letter rule also absorbs doubled *consonants* ("ll", "mm"),
//! which has no phonetic justification. It is reproduced deliberately: the
//! readability formulae in this crate are calibrated against this exact
//! counting rule, so parity matters more than phonetics. This is an
//! approximation, not a dictionary lookup.

/// Vowels recognized by the heuristic, including German umlauts.
const fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'ü' | 'ä' | 'ö')
}

/// Count syllables in a single word.
///
/// Case-insensitive. Tokens without vowels (e.g. `"pst"`) count 0 syllables.
///
/// # Examples
///
/// ```
/// use lesbar_core::syllables::count_syllables;
///
/// assert_eq!(count_syllables("Haus"), 1);   // "au" collapses to one nucleus
/// assert_eq!(count_syllables("Straße"), 2);
/// ```
pub fn count_syllables(word: &str) -> usize {
    // Sentinels on both ends give every character a right-hand neighbor,
    // so the scan is a uniform walk over adjacent pairs.
    let mut chars: Vec<char> = Vec::with_capacity(word.len() + 2);
    chars.push('#');
    chars.extend(word.chars().flat_map(char::to_lowercase));
    chars.push('#');

    let mut syllables = 0;
    let mut skip = false;
    for pair in chars.windows(2) {
        if skip {
            skip = false;
            continue;
        }
        let cur = pair[0];
        let next = pair[1];

        if is_vowel(cur) {
            syllables += 1;
        }

        // Collapse diphthongs and doubled letters into the current nucleus
        // event: the next character never becomes a scan position.
        if (is_vowel(cur) && is_vowel(next)) || cur == next {
            skip = true;
        }
    }

    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diphthong_collapses() {
        assert_eq!(count_syllables("Haus"), 1);
        assert_eq!(count_syllables("läuft"), 1);
    }

    #[test]
    fn umlauts_are_vowels() {
        assert_eq!(count_syllables("Straße"), 2);
        assert_eq!(count_syllables("über"), 2);
    }

    #[test]
    fn doubled_vowel_collapses() {
        assert_eq!(count_syllables("aa"), 1);
        assert_eq!(count_syllables("Saal"), 1);
    }

    #[test]
    fn no_vowels_means_no_syllables() {
        assert_eq!(count_syllables("pst"), 0);
        assert_eq!(count_syllables(""), 0);
    }

    #[test]
    fn longer_words() {
        assert_eq!(count_syllables("Lesbarkeit"), 3);
        assert_eq!(count_syllables("Schifffahrt"), 2);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(count_syllables("HAUS"), count_syllables("haus"));
        assert_eq!(count_syllables("Über"), count_syllables("über"));
    }
}

//! Tokenization helpers.
//!
//! The scoring pipeline consumes pre-tokenized sentences and performs no
//! segmentation itself; this module is the default collaborator that
//! produces that shape from raw text. Any tokenizer emitting
//! sentences-of-token-strings can replace it.
//!
//! Word-punct tokenization splits maximal alphanumeric runs from maximal
//! symbol runs, so `"läuft."` becomes `["läuft", "."]` and sentence
//! punctuation surfaces as its own token for the punctuation counters.

use std::sync::LazyLock;

use regex::Regex;

/// Maximal word runs or maximal non-space symbol runs.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+|[^\w\s]+").expect("valid regex"));

/// Segment and tokenize a text into sentences of token strings.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    split_sentences(text)
        .iter()
        .map(|sentence| tokenize_sentence(sentence))
        .collect()
}

/// Tokenize a single sentence into word and symbol-run tokens.
pub fn tokenize_sentence(sentence: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(sentence)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Split text into sentences at terminator punctuation.
///
/// A character scan with two guards: a period between digits is a decimal
/// point, and a terminator followed by a lowercase letter does not end the
/// sentence. Deliberately simpler than a trained segmenter; adequate for
/// the plain-prose corpora this tool targets.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut sentences = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);

        if is_sentence_terminator(ch) && is_boundary(&chars, i) {
            let sentence = current.trim().to_string();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            current.clear();
        }
    }

    let sentence = current.trim().to_string();
    if !sentence.is_empty() {
        sentences.push(sentence);
    }

    sentences
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn is_boundary(chars: &[char], pos: usize) -> bool {
    // Decimal point: digit on both sides of a period.
    if chars[pos] == '.'
        && pos > 0
        && chars[pos - 1].is_ascii_digit()
        && chars.get(pos + 1).is_some_and(char::is_ascii_digit)
    {
        return false;
    }

    // Trailing terminator runs ("...", "?!") close with the last mark.
    if chars
        .get(pos + 1)
        .is_some_and(|&c| is_sentence_terminator(c))
    {
        return false;
    }

    // Next non-space character decides: lowercase continues the sentence.
    let next = chars[pos + 1..]
        .iter()
        .find(|c| !c.is_whitespace())
        .copied();
    match next {
        Some(c) => !c.is_lowercase(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_basic_sentences() {
        let sentences = split_sentences("Der Hund läuft. Die Katze schläft.");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0], "Der Hund läuft.");
    }

    #[test]
    fn decimal_numbers_are_not_boundaries() {
        let sentences = split_sentences("Es kostet 3.50 Euro. Das ist billig.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("3.50"));
    }

    #[test]
    fn lowercase_after_terminator_continues() {
        let sentences = split_sentences("Er kam gestern usw. und ging wieder. Noch einer.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].contains("usw. und"));
    }

    #[test]
    fn empty_input_yields_no_sentences() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n ").is_empty());
    }

    #[test]
    fn word_punct_tokenization() {
        assert_eq!(
            tokenize_sentence("Der Hund läuft."),
            vec!["Der", "Hund", "läuft", "."]
        );
        assert_eq!(tokenize_sentence("(Ja!)"), vec!["(", "Ja", "!)"]);
    }

    #[test]
    fn symbol_runs_stay_together() {
        assert_eq!(tokenize_sentence("Na ja..."), vec!["Na", "ja", "..."]);
    }

    #[test]
    fn tokenize_produces_pipeline_shape() {
        let sentences = tokenize("Der Hund läuft. Ja.");
        assert_eq!(
            sentences,
            vec![
                vec!["Der", "Hund", "läuft", "."],
                vec!["Ja", "."]
            ]
        );
    }
}

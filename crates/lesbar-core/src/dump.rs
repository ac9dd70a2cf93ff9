//! Diagnostic dump mode.
//!
//! [`DumpWriter`] is a [`CountObserver`] that records every classification
//! event the accumulator reports and, on [`DumpWriter::finish`], writes the
//! per-category trace files plus a per-document summary row appended to
//! `counts/counts.csv`. The layout mirrors the original corpus tooling: one
//! subdirectory per category next to the scored file, `.meta` files named
//! after the document.
//!
//! This is auditing I/O only — observers never influence the counts.

use std::fmt::Write as _;
use std::io::Write as _;

use camino::{Utf8Path, Utf8PathBuf};

use crate::counts::{CountObserver, Counts};
use crate::error::{DumpError, DumpResult};
use crate::schema::CountSchema;

/// One trace category: a running entry number and the buffered entries.
#[derive(Debug, Default)]
struct Category {
    count: usize,
    buf: String,
}

impl Category {
    fn push(&mut self, entry: &str) {
        self.count += 1;
        let _ = writeln!(self.buf, "{}: {entry}\n", self.count);
    }

    fn push_with_syllables(&mut self, entry: &str, syllables: usize) {
        self.count += 1;
        let _ = writeln!(self.buf, "{} ({syllables}): {entry}\n", self.count);
    }
}

/// Buffers classification events and writes them out as trace files.
#[derive(Debug)]
pub struct DumpWriter {
    dir: Utf8PathBuf,
    stem: String,
    sentences: Category,
    tokens: Category,
    punctuation: Category,
    punct_colon: Category,
    words: Category,
    syll1: Category,
    syll2less: Category,
    syll3plus: Category,
    char6plus: Category,
}

impl DumpWriter {
    /// Create a writer for the document at `path`.
    ///
    /// Trace directories are created next to the document; file names use
    /// the document's file name. Nothing touches the filesystem until
    /// [`Self::finish`].
    pub fn new(path: &Utf8Path) -> Self {
        let dir = path
            .parent()
            .map_or_else(Utf8PathBuf::new, Utf8Path::to_path_buf);
        let stem = path.file_name().unwrap_or("document").to_string();
        Self {
            dir,
            stem,
            sentences: Category::default(),
            tokens: Category::default(),
            punctuation: Category::default(),
            punct_colon: Category::default(),
            words: Category::default(),
            syll1: Category::default(),
            syll2less: Category::default(),
            syll3plus: Category::default(),
            char6plus: Category::default(),
        }
    }

    /// Write all trace files and append the summary row.
    ///
    /// The summary row lists the document name followed by the schema's
    /// counter values in sorted key order, matching the CSV the batch
    /// driver writes.
    #[tracing::instrument(skip_all, fields(document = %self.stem))]
    pub fn finish(self, counts: &Counts, schema: &CountSchema) -> DumpResult<()> {
        self.write_category("sentences", "sentences", &self.sentences)?;
        self.write_category("tokens", "tokens", &self.tokens)?;
        self.write_category("punctuation", "punct", &self.punctuation)?;
        self.write_category("punct_colon", "punct_colon", &self.punct_colon)?;
        self.write_category("word", "word", &self.words)?;
        self.write_category("syll1", "syll1", &self.syll1)?;
        self.write_category("syll2less", "syll2less", &self.syll2less)?;
        self.write_category("syll3plus", "syll3plus", &self.syll3plus)?;
        self.write_category("char6plus", "char6plus", &self.char6plus)?;

        let mut row = self.stem.clone();
        for value in counts.to_map(schema).values() {
            let _ = write!(row, ",{value}");
        }
        row.push('\n');

        let counts_dir = self.dir.join("counts");
        let csv_path = counts_dir.join("counts.csv");
        let io = |source| DumpError::Write {
            path: csv_path.clone(),
            source,
        };
        std::fs::create_dir_all(counts_dir.as_std_path()).map_err(io)?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(csv_path.as_std_path())
            .map_err(io)?;
        file.write_all(row.as_bytes()).map_err(io)?;
        Ok(())
    }

    fn write_category(&self, dir_name: &str, suffix: &str, category: &Category) -> DumpResult<()> {
        let dir = self.dir.join(dir_name);
        let path = dir.join(format!("{}.{suffix}.meta", self.stem));
        let io = |source| DumpError::Write {
            path: path.clone(),
            source,
        };
        std::fs::create_dir_all(dir.as_std_path()).map_err(io)?;
        std::fs::write(path.as_std_path(), &category.buf).map_err(io)?;
        Ok(())
    }
}

impl CountObserver for DumpWriter {
    fn on_sentence(&mut self, index: usize, tokens: &[String]) {
        // Keep the running number in sync with the accumulator's 1-based index.
        debug_assert_eq!(self.sentences.count + 1, index);
        self.sentences.push(&format!("{tokens:?}"));
    }

    fn on_token(&mut self, token: &str) {
        self.tokens.push(token);
    }

    fn on_punctuation(&mut self, token: &str) {
        self.punctuation.push(token);
    }

    fn on_period_or_colon(&mut self, token: &str) {
        self.punct_colon.push(token);
    }

    fn on_word(&mut self, token: &str) {
        self.words.push(token);
    }

    fn on_syllables(&mut self, token: &str, syllables: usize) {
        if syllables > 2 {
            self.syll3plus.push_with_syllables(token, syllables);
        } else if syllables > 0 {
            self.syll2less.push_with_syllables(token, syllables);
            if syllables == 1 {
                self.syll1.push_with_syllables(token, syllables);
            }
        }
    }

    fn on_long_word(&mut self, token: &str) {
        self.char6plus.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counts::accumulate_observed;
    use crate::tokens::PunctuationSet;

    fn sentences(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|s| s.iter().map(ToString::to_string).collect())
            .collect()
    }

    #[test]
    fn writes_category_files_and_summary_row() {
        let tmp = tempfile::TempDir::new().unwrap();
        let doc = Utf8PathBuf::try_from(tmp.path().join("probe.txt")).unwrap();

        let input = sentences(&[&["Der", "Hund", "läuft", "."], &["Ja", "."]]);
        let mut writer = DumpWriter::new(&doc);
        let counts = accumulate_observed(&input, &PunctuationSet::default(), &mut writer);
        writer.finish(&counts, &CountSchema::default()).unwrap();

        let base = doc.parent().unwrap();
        let words = std::fs::read_to_string(base.join("word/probe.txt.word.meta")).unwrap();
        assert!(words.contains("1: Der"));
        assert!(words.contains("4: Ja"));

        let syll1 = std::fs::read_to_string(base.join("syll1/probe.txt.syll1.meta")).unwrap();
        assert!(syll1.contains("(1): Hund"));

        let punct =
            std::fs::read_to_string(base.join("punct_colon/probe.txt.punct_colon.meta")).unwrap();
        assert_eq!(punct.matches(": .").count(), 2);

        let csv = std::fs::read_to_string(base.join("counts/counts.csv")).unwrap();
        assert!(csv.starts_with("probe.txt,"));
        // Ten counter values after the document name
        assert_eq!(csv.trim_end().split(',').count(), 11);
    }

    #[test]
    fn summary_rows_append_across_documents() {
        let tmp = tempfile::TempDir::new().unwrap();
        let punct = PunctuationSet::default();
        let schema = CountSchema::default();

        for name in ["a.txt", "b.txt"] {
            let doc = Utf8PathBuf::try_from(tmp.path().join(name)).unwrap();
            let input = sentences(&[&["Ja", "."]]);
            let mut writer = DumpWriter::new(&doc);
            let counts = accumulate_observed(&input, &punct, &mut writer);
            writer.finish(&counts, &schema).unwrap();
        }

        let csv_path = Utf8PathBuf::try_from(tmp.path().join("counts/counts.csv")).unwrap();
        let csv = std::fs::read_to_string(csv_path).unwrap();
        assert_eq!(csv.lines().count(), 2);
    }
}

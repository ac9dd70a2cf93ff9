//! Score command — readability formulae for a file or a corpus directory.

use std::collections::BTreeMap;
use std::io::Write as _;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, info, instrument};

use lesbar_core::config::Config;
use lesbar_core::dump::DumpWriter;
use lesbar_core::record::{score_sentences, score_sentences_observed};
use lesbar_core::schema::CountSchema;
use lesbar_core::text;
use lesbar_core::tokens::PunctuationSet;

use super::read_input_file;

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// File to score, or a directory to scan recursively for .txt files.
    pub path: Utf8PathBuf,

    /// CSV output path for directory scoring.
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Write per-category diagnostic trace files next to each document.
    #[arg(long)]
    pub save_counts: bool,
}

/// Score readability of a file or every .txt file under a directory.
#[instrument(name = "cmd_score", skip_all, fields(path = %args.path))]
pub fn cmd_score(
    args: ScoreArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(path = %args.path, save_counts = args.save_counts, "executing score command");

    let schema = config
        .count_schema()
        .context("failed to load count definitions")?;
    let punctuation = config.punctuation_set();
    let save_counts = args.save_counts || config.save_counts;

    if args.path.is_dir() {
        let output = args
            .output
            .or_else(|| config.output.clone())
            .unwrap_or_else(|| Utf8PathBuf::from("lesbar_results.csv"));
        score_directory(
            &args.path,
            &output,
            global_json,
            &punctuation,
            &schema,
            save_counts,
            max_input_bytes,
        )
    } else {
        let scores = score_document(
            &args.path,
            &punctuation,
            &schema,
            save_counts,
            max_input_bytes,
        )?;
        if global_json {
            println!("{}", serde_json::to_string_pretty(&scores)?);
        } else {
            print_scores(&args.path, &scores);
        }
        Ok(())
    }
}

/// Score a single document into its merged key→value map.
fn score_document(
    path: &Utf8Path,
    punctuation: &PunctuationSet,
    schema: &CountSchema,
    save_counts: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<BTreeMap<String, f64>> {
    let content = read_input_file(path, max_input_bytes)?;
    let sentences = text::tokenize(&content);

    let record = if save_counts {
        let mut writer = DumpWriter::new(path);
        let record = score_sentences_observed(&sentences, punctuation, &mut writer);
        writer
            .finish(&record.counts, schema)
            .with_context(|| format!("failed to write diagnostic files for {path}"))?;
        record
    } else {
        score_sentences(&sentences, punctuation)
    };

    Ok(record.to_map(schema))
}

/// Score every .txt file under `dir` and write one CSV row per document.
fn score_directory(
    dir: &Utf8Path,
    output: &Utf8Path,
    global_json: bool,
    punctuation: &PunctuationSet,
    schema: &CountSchema,
    save_counts: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let files = collect_txt_files(dir)?;
    if files.is_empty() {
        anyhow::bail!("no .txt files found under {dir}");
    }

    let progress = ProgressBar::new(files.len() as u64).with_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}").expect("valid template"),
    );

    let mut out = std::fs::File::create(output.as_std_path())
        .with_context(|| format!("failed to create {output}"))?;

    // Every record shares the same schema, so the sorted key set — and with
    // it the CSV column order — is known before the first document.
    let keys: Vec<String> = lesbar_core::ScoreRecord::default()
        .to_map(schema)
        .into_keys()
        .collect();
    let mut header = String::from("file");
    for key in &keys {
        header.push(',');
        header.push_str(key);
    }
    header.push('\n');
    out.write_all(header.as_bytes())
        .with_context(|| format!("failed to write {output}"))?;

    for file in &files {
        progress.set_message(file.to_string());
        let scores = score_document(file, punctuation, schema, save_counts, max_input_bytes)?;

        let mut row = file.to_string();
        for key in &keys {
            row.push(',');
            row.push_str(&scores[key].to_string());
        }
        row.push('\n');
        out.write_all(row.as_bytes())
            .with_context(|| format!("failed to write {output}"))?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    info!(files = files.len(), output = %output, "corpus scored");
    if global_json {
        println!(
            "{}",
            serde_json::json!({ "files": files.len(), "output": output })
        );
    } else {
        println!(
            "{} {} file(s) processed. Results written to {}",
            "DONE:".green(),
            files.len(),
            output,
        );
    }
    Ok(())
}

/// Recursively collect .txt files under `dir`, sorted for stable output.
fn collect_txt_files(dir: &Utf8Path) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];

    while let Some(current) = stack.pop() {
        let entries = std::fs::read_dir(current.as_std_path())
            .with_context(|| format!("failed to read directory {current}"))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("failed to read directory {current}"))?;
            let path = Utf8PathBuf::try_from(entry.path()).map_err(|e| {
                anyhow::anyhow!("path is not valid UTF-8: {}", e.into_path_buf().display())
            })?;
            if path.is_dir() {
                stack.push(path);
            } else if path.extension() == Some("txt") {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Human-readable formula listing for a single document.
fn print_scores(path: &Utf8Path, scores: &BTreeMap<String, f64>) {
    println!("{} {path}", "Scores for".bold());
    for (key, value) in scores {
        // Counts and features are inspection detail; `counts` shows them.
        if key.starts_with("COUNTS_") || key.starts_with("FEAT_") {
            continue;
        }
        println!("  {key}: {value:.3}");
    }
}

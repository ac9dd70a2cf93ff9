//! Counts command — raw accumulator output for a single file.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use lesbar_core::config::Config;
use lesbar_core::counts::accumulate;
use lesbar_core::text;

use super::read_input_file;

/// Arguments for the `counts` subcommand.
#[derive(Args, Debug)]
pub struct CountsArgs {
    /// File to analyze.
    pub file: Utf8PathBuf,
}

/// Show the raw counters for one document.
#[instrument(name = "cmd_counts", skip_all, fields(file = %args.file))]
pub fn cmd_counts(
    args: CountsArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing counts command");

    let schema = config
        .count_schema()
        .context("failed to load count definitions")?;
    let content = read_input_file(&args.file, max_input_bytes)?;

    let sentences = text::tokenize(&content);
    let counts = accumulate(&sentences, &config.punctuation_set());
    let map = counts.to_map(&schema);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        println!("{} {}", "Counts for".bold(), args.file);
        for (key, value) in &map {
            println!("  {key}: {value}");
        }
    }

    Ok(())
}

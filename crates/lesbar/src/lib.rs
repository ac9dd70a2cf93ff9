//! Library interface for the `lesbar` CLI.
//!
//! Exposes the argument parser ([`Cli`], [`Commands`]) and the command
//! implementations ([`commands`]) so integration tests can drive them; the
//! actual entry point lives in `main.rs`.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Follow terminal capabilities.
    #[default]
    Auto,
    /// Force colors on.
    Always,
    /// Force colors off.
    Never,
}

impl ColorChoice {
    /// Apply this choice to the global color state.
    pub fn apply(self) {
        match self {
            // owo-colors detects terminal support on its own for Auto.
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG             Log filter (e.g., debug, lesbar=trace)
    LESBAR_LOG_DIR       Log directory
    LESBAR_COUNTS_FILE   Count-definition file
    LESBAR_SAVE_COUNTS   Write diagnostic trace files (true/false)
";

/// Command-line interface definition for lesbar.
#[derive(Parser)]
#[command(name = "lesbar")]
#[command(about = "Readability scoring for German-language corpora", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this configuration file instead of discovery
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before doing anything else
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Suppress everything below error level
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log detail (repeatable: -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// When to colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Emit machine-readable JSON instead of human output
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Score readability of a file or a directory of .txt files
    Score(commands::score::ScoreArgs),

    /// Show raw counts for a single file
    Counts(commands::counts::CountsArgs),

    /// Show package and configuration information
    Info(commands::info::InfoArgs),
}

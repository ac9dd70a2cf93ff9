//! Logging and tracing setup for the CLI.
//!
//! Console output goes to stderr through an env-filtered fmt layer;
//! `RUST_LOG` overrides the level derived from config and the
//! `--quiet`/`--verbose` flags. When a log directory is known (config,
//! `LESBAR_LOG_DIR`, or the platform data dir), a second JSONL layer writes
//! structured events through a non-blocking appender.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where file logging should go, if anywhere.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Directory for JSONL log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve the log directory from environment and config.
    ///
    /// Precedence: `LESBAR_LOG_DIR`, then the config file's `log_dir`,
    /// then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_dir = std::env::var_os("LESBAR_LOG_DIR")
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                directories::ProjectDirs::from("", "", "lesbar")
                    .map(|dirs| dirs.data_local_dir().join("logs"))
            });
        Self { log_dir }
    }
}

/// Build the console filter from CLI flags and the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global subscriber.
///
/// Returns the appender guard; dropping it flushes buffered file output,
/// so the caller must hold it for the process lifetime.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, "lesbar.jsonl");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file = fmt::layer().json().with_writer(writer);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(file)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            Ok(None)
        }
    }
}

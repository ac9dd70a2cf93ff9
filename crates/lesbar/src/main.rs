//! lesbar CLI
#![deny(unsafe_code)]

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use lesbar::{Cli, Commands, commands};
use lesbar_core::config::{Config, ConfigLoader, ConfigSources};
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    // arg_required_else_help ensures we have a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let (config, config_sources) = resolve_config(cli.config.as_deref())?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        chdir = ?cli.chdir,
        "CLI initialized"
    );

    let max_input = config
        .max_input_bytes
        .or(Some(lesbar_core::DEFAULT_MAX_INPUT_BYTES));

    let result = match command {
        Commands::Score(args) => commands::score::cmd_score(args, cli.json, &config, max_input),
        Commands::Counts(args) => commands::counts::cmd_counts(args, cli.json, &config, max_input),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &config_sources),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}

/// Discover and merge configuration, starting the project search at the
/// (possibly `--chdir`-adjusted) working directory.
fn resolve_config(explicit: Option<&std::path::Path>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = into_utf8(cwd, "current directory")?;

    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(path) = explicit {
        loader = loader.with_file(into_utf8(path.to_path_buf(), "config path")?);
    }
    loader.load().context("failed to load configuration")
}

fn into_utf8(path: std::path::PathBuf, what: &str) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path)
        .map_err(|e| anyhow::anyhow!("{what} is not valid UTF-8: {}", e.into_path_buf().display()))
}

//! Info command — package and configuration report.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::instrument;

use lesbar_core::config::{Config, ConfigSources, user_config_dir};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Show version, config sources, and effective settings.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    if global_json {
        let payload = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "config": config,
            "config_sources": sources,
            "user_config_dir": user_config_dir(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!(
        "{} {}",
        env!("CARGO_PKG_NAME").bold(),
        env!("CARGO_PKG_VERSION")
    );
    match sources.primary_file() {
        Some(path) => println!("config: {path}"),
        None => println!("config: defaults (no file found)"),
    }
    if let Some(dir) = user_config_dir() {
        println!("user config dir: {dir}");
    }
    println!("log level: {}", config.log_level.as_str());
    match &config.counts_file {
        Some(path) => println!("count definitions: {path}"),
        None => println!("count definitions: built-in"),
    }
    println!("save counts: {}", config.save_counts);

    Ok(())
}

//! Configuration loading and discovery.
//!
//! Discovery walks up from the current directory looking for a project
//! config (`lesbar.<ext>` or `.lesbar.<ext>`, where `<ext>` is `toml`,
//! `yaml`, `yml`, or `json`), merges in the user config from the XDG config
//! directory, explicit `--config` files, and finally `LESBAR_`-prefixed
//! environment variables. Later sources win; all merging goes through
//! figment.
//!
//! Configuration is injected into the pipeline explicitly — the counting
//! code never reads files or globals on its own, which keeps tests free to
//! use synthetic schemas and punctuation sets.

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::schema::CountSchema;
use crate::tokens::PunctuationSet;

/// The configuration for lesbar.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application.
    pub log_level: LogLevel,
    /// Directory for JSONL log files (platform default if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Default output CSV path for batch scoring.
    pub output: Option<Utf8PathBuf>,
    /// Count-definition file; the built-in schema is used if unset.
    pub counts_file: Option<Utf8PathBuf>,
    /// Punctuation symbols recognized as non-word tokens; the built-in
    /// list is used if unset.
    pub punctuation: Option<Vec<String>>,
    /// Write per-category diagnostic trace files while scoring.
    pub save_counts: bool,
    /// Maximum input size in bytes (default: 5 MiB). Guards against
    /// oversized inputs; `None` keeps the default.
    pub max_input_bytes: Option<usize>,
}

impl Config {
    /// The punctuation set to classify tokens against.
    pub fn punctuation_set(&self) -> PunctuationSet {
        self.punctuation
            .as_ref()
            .map_or_else(PunctuationSet::default, |symbols| {
                PunctuationSet::new(symbols.iter().cloned())
            })
    }

    /// Load the count schema, either from the configured definition file
    /// or the built-in default.
    ///
    /// A configured-but-unreadable file is a fatal configuration error,
    /// never a silent fallback.
    pub fn count_schema(&self) -> ConfigResult<CountSchema> {
        self.counts_file
            .as_deref()
            .map_or_else(|| Ok(CountSchema::default()), CountSchema::from_path)
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from the XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files (e.g., from `--config`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "lesbar";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/lesbar/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Disable the boundary marker (search to the filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file; later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest): environment, explicit files, project
    /// config, user config, defaults.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = Self::find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let discovered = self.find_project_configs(root);
            for path in &discovered {
                figment = Self::merge_file(figment, path);
            }
            sources.project_files = discovered;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // LESBAR_LOG_LEVEL=debug, LESBAR_SAVE_COUNTS=true, etc.
        figment = figment.merge(Env::prefixed("LESBAR_").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Find project config files by walking up from `start`.
    ///
    /// Returns all matches from the closest directory that has any,
    /// ordered low-to-high precedence: dotfiles before regular files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            // Dotfiles merge before regular files, so the regular file wins
            // when both are present.
            let dir_ref = &dir;
            let found: Vec<Utf8PathBuf> = [".", ""]
                .iter()
                .flat_map(|prefix| {
                    CONFIG_EXTENSIONS
                        .iter()
                        .map(move |ext| dir_ref.join(format!("{prefix}{APP_NAME}.{ext}")))
                })
                .filter(|candidate| candidate.is_file())
                .collect();

            if !found.is_empty() {
                return found;
            }

            // Check for the boundary marker after the config files, so a
            // config next to the marker is still found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in the XDG config directory.
    fn find_user_config() -> Option<Utf8PathBuf> {
        let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
        let config_dir = proj_dirs.config_dir();

        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|candidate| candidate.is_file())
            .and_then(|candidate| Utf8PathBuf::from_path_buf(candidate).ok())
    }

    /// Merge a config file into the figment, detecting format by extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// `~/.config/lesbar/` on Linux, `~/Library/Application Support/lesbar/`
/// on macOS, and equivalent elsewhere.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

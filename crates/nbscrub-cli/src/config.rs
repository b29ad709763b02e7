//! Configuration for the nbscrub CLI.
//!
//! Provides the [`NbscrubConfig`] struct that loads from TOML files,
//! environment variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `NBSCRUB_CONFIG` environment variable
//! 3. XDG default: `~/.config/nbscrub/config.toml`
//! 4. Built-in defaults
//!
//! `NBSCRUB_*` environment variables are layered on top of whichever file
//! was found, e.g. `NBSCRUB_NOTEBOOKS_EXTENSION=nb`.

use confyg::{Confygery, env};
use nbscrub_core::{DEFAULT_INDENT, Error, NOTEBOOK_EXTENSION, Result};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::path::PathBuf;

const ENV_PREFIX: &str = "NBSCRUB";
const CONFIG_ENV_VAR: &str = "NBSCRUB_CONFIG";
const ENV_SECTIONS: [&str; 2] = ["notebooks", "output"];

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for the nbscrub CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NbscrubConfig {
    /// Which notebooks to scrub.
    pub notebooks: NotebooksConfig,

    /// How scrubbed notebooks are written.
    pub output: OutputConfig,
}

/// Notebook discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotebooksConfig {
    /// Directory to scan. Defaults to the current working directory.
    pub directory: Option<String>,

    /// File extension, without the dot.
    pub extension: String,
}

/// Output formatting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Spaces per nesting level.
    ///
    /// Environment overrides arrive as strings, so `"2"` is accepted too.
    #[serde(deserialize_with = "usize_or_string")]
    pub indent: usize,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for NotebooksConfig {
    fn default() -> Self {
        Self {
            directory: None,
            extension: NOTEBOOK_EXTENSION.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl NbscrubConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config path that does not exist is not an error; the defaults
    /// (plus any environment overrides) are used instead.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        for section in ENV_SECTIONS {
            env_opts.add_section(section);
        }
        let overlay = env::scan(env_opts.top_level(), env_opts.sections()).toml();
        Self::load_with_overlay(config_path, &overlay)
    }

    /// Load configuration from file and defaults, then apply `overlay`.
    ///
    /// `overlay` is TOML in the form produced by scanning `NBSCRUB_*`
    /// variables, where every value is a string.
    pub fn load_with_overlay(config_path: Option<&str>, overlay: &str) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        builder
            .add_str(overlay)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))?;

        Ok(config)
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        resolve_with_env(explicit, std::env::var(CONFIG_ENV_VAR).ok())
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("nbscrub").join("config.toml"))
    }

    /// Directory to scan for notebooks.
    pub fn notebook_dir(&self) -> Result<PathBuf> {
        match &self.notebooks.directory {
            Some(dir) => Ok(PathBuf::from(dir)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine current directory: {e}"))),
        }
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

fn usize_or_string<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(usize),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid number {text:?}: {e}"))),
    }
}

fn resolve_with_env(explicit: Option<&str>, from_env: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = from_env.filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    NbscrubConfig::default_config_path()
}

// ============================================================================
// Tests
// ============================================================================

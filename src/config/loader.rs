//! Configuration loading and discovery for `lexband.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::Settings;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up during config discovery.
pub const CONFIG_FILENAME: &str = "lexband.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse lexband.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override the popular band fraction
    pub popular: Option<f64>,
    /// Override the common band fraction
    pub common: Option<f64>,
    /// Override the rare band fraction
    pub rare: Option<f64>,
    /// Override the minimum word length
    pub min_word_len: Option<usize>,
    /// Override the letter exclusion characters
    pub exclude_letters: Option<String>,
    /// Override the report output directory
    pub out_dir: Option<PathBuf>,
    /// Number of worker threads
    pub jobs: Option<usize>,
}

/// Find lexband.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for lexband.toml
/// 2. Check XDG_CONFIG_HOME/lexband/lexband.toml (or ~/.config/lexband/lexband.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find lexband.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("lexband").join(CONFIG_FILENAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find lexband.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load and validate settings from a config file.
pub fn load_config(path: &Path) -> Result<Settings, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&contents)?;

    let issues = settings.validate();
    if !issues.is_empty() {
        return Err(ConfigError::Validation(issues));
    }

    Ok(settings)
}

/// Resolve the effective settings for a run.
///
/// Loads from `path` when given, otherwise from a discovered config file,
/// otherwise starts from built-in defaults. CLI overrides are applied on
/// top and the merged result is validated again, so an invalid flag
/// combination is rejected before any input is read.
pub fn resolve(path: Option<&Path>, overrides: &CliOverrides) -> Result<Settings, ConfigError> {
    let mut settings = match path {
        Some(explicit) => load_config(explicit)?,
        None => match find_config() {
            Some(found) => load_config(&found)?,
            None => Settings::default(),
        },
    };

    apply_overrides(&mut settings, overrides);

    let issues = settings.validate();
    if !issues.is_empty() {
        return Err(ConfigError::Validation(issues));
    }

    Ok(settings)
}

fn apply_overrides(settings: &mut Settings, overrides: &CliOverrides) {
    if let Some(popular) = overrides.popular {
        settings.bands.popular = popular;
    }
    if let Some(common) = overrides.common {
        settings.bands.common = common;
    }
    if let Some(rare) = overrides.rare {
        settings.bands.rare = rare;
    }
    if let Some(min_word_len) = overrides.min_word_len {
        settings.tokens.min_word_len = min_word_len;
    }
    if let Some(exclude) = &overrides.exclude_letters {
        settings.tokens.exclude_letters = exclude.clone();
    }
    if let Some(out_dir) = &overrides.out_dir {
        settings.output.dir = Some(out_dir.clone());
    }
    if let Some(jobs) = overrides.jobs {
        settings.runtime.jobs = jobs;
    }
}

//! Configuration schema types for `lexband.toml`
//!
//! Defines the structure, defaults, and validation rules for lexband
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::profile::TokenRules;
use crate::thresholds::BandFractions;

/// Band width fractions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandsConfig {
    /// Fraction of ranks classed popular
    #[serde(default = "default_fraction")]
    pub popular: f64,
    /// Fraction of ranks classed common
    #[serde(default = "default_fraction")]
    pub common: f64,
    /// Fraction of ranks classed rare
    #[serde(default = "default_fraction")]
    pub rare: f64,
}

impl Default for BandsConfig {
    fn default() -> Self {
        Self {
            popular: default_fraction(),
            common: default_fraction(),
            rare: default_fraction(),
        }
    }
}

fn default_fraction() -> f64 {
    0.05
}

/// Tokenization settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokensConfig {
    /// Minimum word length kept by word extraction
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    /// Characters skipped during letter extraction
    #[serde(default = "default_exclude_letters")]
    pub exclude_letters: String,
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            min_word_len: default_min_word_len(),
            exclude_letters: default_exclude_letters(),
        }
    }
}

fn default_min_word_len() -> usize {
    2
}

fn default_exclude_letters() -> String {
    " -".to_string()
}

/// Report output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default directory for written reports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Execution settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Worker threads for aggregation (0 = rayon default)
    #[serde(default)]
    pub jobs: usize,
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub bands: BandsConfig,
    #[serde(default)]
    pub tokens: TokensConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub runtime: RuntimeConfig,
}

impl Settings {
    /// Collect validation problems. An empty result means the settings
    /// are usable.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let fractions = [
            ("bands.popular", self.bands.popular),
            ("bands.common", self.bands.common),
            ("bands.rare", self.bands.rare),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || value < 0.0 {
                issues.push(format!("{name} must be a non-negative number (got {value})"));
            } else if value > 1.0 {
                issues.push(format!("{name} must not exceed 1.0 (got {value})"));
            }
        }

        let sum = self.bands.popular + self.bands.common + self.bands.rare;
        if sum.is_finite() && sum > 1.0 + 1e-9 {
            issues.push(format!("band fractions sum to {sum}, must not exceed 1.0"));
        }

        if self.tokens.min_word_len == 0 {
            issues.push("tokens.min_word_len must be at least 1".to_string());
        }

        issues
    }

    /// Band fractions in the form the threshold math consumes.
    pub fn fractions(&self) -> BandFractions {
        BandFractions {
            popular: self.bands.popular,
            common: self.bands.common,
            rare: self.bands.rare,
        }
    }

    /// Tokenization rules in the form the pipeline consumes.
    pub fn token_rules(&self) -> TokenRules {
        TokenRules {
            min_word_len: self.tokens.min_word_len,
            letter_excludes: self.tokens.exclude_letters.chars().collect(),
        }
    }
}

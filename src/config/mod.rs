//! Project configuration (`lexband.toml`)
//!
//! Settings can come from a discovered or explicit config file, with CLI
//! flags overriding individual values. Validation happens before any
//! input is read.

mod loader;
mod schema;

pub use loader::{
    find_config, find_config_from, find_xdg_config, load_config, resolve, CliOverrides,
    ConfigError, CONFIG_FILENAME,
};
pub use schema::{BandsConfig, OutputConfig, RuntimeConfig, Settings, TokensConfig};

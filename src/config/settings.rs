//! Application settings loaded from `config.toml`.
//!
//! The file is optional. It currently lists the tags to seed into an empty tag
//! store on first run:
//!
//! ```toml
//! [[tags]]
//! title = "Driver"
//!
//! [[tags]]
//! title = "Putter"
//! ```

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default config file location used when `DISCFLIP_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Tags inserted when the tag store is empty at startup
    #[serde(default)]
    pub tags: Vec<TagConfig>,
}

/// Configuration for a single seed tag
#[derive(Debug, Deserialize, Clone)]
pub struct TagConfig {
    /// Title of the tag
    pub title: String,
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML is invalid or fields have the wrong type.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file.
///
/// A missing file yields the default (empty) configuration.
///
/// # Errors
/// Returns `Error::Io` if the file exists but cannot be read, and
/// `Error::Config` if it cannot be parsed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    debug!("Attempting to load configuration from: {path:?}");

    if !path.exists() {
        info!("No config file at {path:?}; using defaults");
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Loads configuration from `DISCFLIP_CONFIG`, or `./config.toml` when unset.
pub fn load_default_config() -> Result<Config> {
    let path = std::env::var("DISCFLIP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config(path)
}

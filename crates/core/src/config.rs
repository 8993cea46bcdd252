//! Configuration system for the loader and disassembler.
//!
//! This module defines the settings that parameterize loading and listing
//! output. It provides:
//! 1. **Defaults:** Fallback load address, prompt limit, and hex row width.
//! 2. **Structures:** `LoaderConfig` and `ListingConfig` grouped under `Config`.
//!
//! Configuration is supplied as JSON; every field is optional and falls back
//! to its default. Use `Config::default()` when no file is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::XexError;

/// Default configuration constants.
mod defaults {
    use crate::common::constants;

    /// Load address for buffers with no parseable segments.
    pub const FALLBACK_ADDRESS: u16 = constants::DEFAULT_LOAD_ADDRESS;

    /// Maximum instruction lines in a prompt listing.
    pub const PROMPT_LIMIT: usize = constants::PROMPT_INSTRUCTION_LIMIT;

    /// Bytes per hex dump row.
    pub const HEX_WIDTH: usize = constants::HEX_ROW_WIDTH;
}

/// Root configuration.
///
/// # Example
///
/// ```
/// use xexray_core::config::Config;
///
/// let json = r#"{
///     "loader": { "fallback_address": 4096 },
///     "listing": { "prompt_limit": 50, "show_bytes": true }
/// }"#;
///
/// let config = Config::from_json_str(json).unwrap();
/// assert_eq!(config.loader.fallback_address, 0x1000);
/// assert_eq!(config.listing.prompt_limit, 50);
/// assert_eq!(config.listing.hex_width, 16);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Segment loader settings
    #[serde(default)]
    pub loader: LoaderConfig,
    /// Listing and prompt rendering settings
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`XexError::Config`] on malformed JSON or wrongly typed fields.
    pub fn from_json_str(json: &str) -> Result<Self, XexError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`XexError::Io`] if the file cannot be read, or
    /// [`XexError::Config`] if it cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, XexError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| XexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Segment loader settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoaderConfig {
    /// Load address used when no segment header parses
    #[serde(default = "LoaderConfig::default_fallback_address")]
    pub fallback_address: u16,
}

impl LoaderConfig {
    /// Returns the default raw-image load address.
    const fn default_fallback_address() -> u16 {
        defaults::FALLBACK_ADDRESS
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            fallback_address: defaults::FALLBACK_ADDRESS,
        }
    }
}

/// Listing, prompt and hex-dump rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingConfig {
    /// Maximum instruction lines forwarded in a prompt
    #[serde(default = "ListingConfig::default_prompt_limit")]
    pub prompt_limit: usize,

    /// Include the raw instruction bytes column
    #[serde(default)]
    pub show_bytes: bool,

    /// Bytes per hex dump row
    #[serde(default = "ListingConfig::default_hex_width")]
    pub hex_width: usize,
}

impl ListingConfig {
    /// Returns the default prompt instruction limit.
    const fn default_prompt_limit() -> usize {
        defaults::PROMPT_LIMIT
    }

    /// Returns the default hex dump row width.
    const fn default_hex_width() -> usize {
        defaults::HEX_WIDTH
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            prompt_limit: defaults::PROMPT_LIMIT,
            show_bytes: false,
            hex_width: defaults::HEX_WIDTH,
        }
    }
}

//! Explicit configuration for the text operations.
//!
//! Every entry point that has tunable behavior takes one of these sections
//! by reference. Nothing is read from the environment; the CLI loads a
//! [`TextConfig`] from an optional JSON file and passes it down.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum length for [`TruncateConfig`].
pub const DEFAULT_MAX_LENGTH: usize = 160;

/// Default suffix appended by truncation.
pub const DEFAULT_SUFFIX: &str = "...";

/// Default `alt` text inserted into images that lack one.
pub const DEFAULT_IMAGE_ALT: &str = "TEC Generated Image";

/// Errors raised while loading a [`TextConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for [`TextConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Top-level configuration, one section per operation family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Plain-text extraction settings.
    pub extract: ExtractConfig,
    /// Truncation settings.
    pub truncate: TruncateConfig,
    /// WordPress content helper settings.
    pub content: ContentConfig,
}

impl TextConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the JSON is malformed or a field has
    /// the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are not a valid config.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// Settings for plain-text extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfig {
    /// Keep the contents of `script` and `style` elements as text.
    pub include_raw_text: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            include_raw_text: true,
        }
    }
}

/// Settings for word-boundary truncation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateConfig {
    /// Maximum output length in characters.
    pub max_length: usize,
    /// Appended when the text is shortened.
    pub suffix: String,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Settings for the WordPress content helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Longest post title kept before it is cut with `...`.
    pub title_max_length: usize,
    /// Longest URL slug.
    pub slug_max_length: usize,
    /// Longest SEO title kept before it is cut with `...`.
    pub seo_title_max_length: usize,
    /// Characters of extracted text kept in an SEO excerpt.
    pub excerpt_length: usize,
    /// `alt` text given to images without one.
    pub image_alt_placeholder: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            title_max_length: 100,
            slug_max_length: 60,
            seo_title_max_length: 60,
            excerpt_length: 157,
            image_alt_placeholder: DEFAULT_IMAGE_ALT.to_string(),
        }
    }
}

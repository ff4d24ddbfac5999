//! Import configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{FacepipeError, FacepipeResult},
    track::builder::DuplicatePolicy,
};

/// Whether the last CSV column holds per-row rate hints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateColumn {
    /// Treat the last column as rate hints when any of them parse.
    #[default]
    Auto,
    Present,
    /// Every column is a channel; the source rate must come from `fallback_rate`.
    Absent,
}

/// Settings for one import run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Field delimiter, a single ASCII character.
    pub delimiter: char,

    /// Playback rate of the host scene. Without it no baked track is produced.
    pub target_rate: Option<f64>,

    /// Source rate used when the CSV carries no usable rate hints.
    pub fallback_rate: Option<f64>,

    /// Produce a copy retimed to `target_rate` alongside the recorded track.
    pub bake: bool,

    pub rate_column: RateColumn,

    pub duplicate_policy: DuplicatePolicy,

    /// Track base name; the input file stem when unset.
    pub display_name: Option<String>,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "facepipe=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path; stderr when unset.
    pub file: Option<PathBuf>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            target_rate: None,
            fallback_rate: None,
            bake: true,
            rate_column: RateColumn::Auto,
            duplicate_policy: DuplicatePolicy::Overwrite,
            display_name: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl ImportConfig {
    /// Load from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> FacepipeResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FacepipeError::io(format!("read config '{}': {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> FacepipeResult<Self> {
        serde_json::from_str(text).map_err(|e| FacepipeError::serde(format!("config: {e}")))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;

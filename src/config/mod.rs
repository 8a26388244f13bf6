//! Configuration module for DistVis-RS
//!
//! This module handles application configuration including:
//! - Application config (`config.toml`): default data set, summary and logging options
//! - Display settings (`display_settings.json`): theme, language and accent colour
//!
//! Neither is ever consulted by the parser, the filter engine or the grouping
//! engine; both are passed explicitly to the code that presents results.
//!
//! # App Data Location
//!
//! Application data is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.distvis.distvis-rs/`
//! - **macOS**: `~/Library/Application Support/dev.distvis.distvis-rs/`
//! - **Windows**: `%APPDATA%\dev.distvis.distvis-rs\`
//!
//! # Example
//!
//! ```ignore
//! use distvis_rs::config::{AppConfig, DisplaySettings};
//!
//! let config = AppConfig::load_or_default();
//! let display = DisplaySettings::load_or_default();
//! display.apply();
//! ```

pub mod settings;

pub use settings::*;

use crate::analytics::{DEFAULT_PREVIEW_ROWS, PREVIEW_SIZES};
use crate::error::{DistVisError, Result, ResultExt};
use crate::summary::{SummaryModel, DEFAULT_INSTRUCTION, DEFAULT_SAMPLE_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.distvis.distvis-rs";

/// App config filename
pub const APP_CONFIG_FILE: &str = "config.toml";

/// Directory (inside the app data dir) for rolling log files
pub const LOG_DIR: &str = "logs";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info,distvis_rs=debug";

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        DistVisError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            DistVisError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the app config file
pub fn app_config_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_CONFIG_FILE))
}

// ==================== App Config ====================

/// Data set options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Data set loaded when no input is given
    #[serde(default)]
    pub default_path: Option<PathBuf>,

    /// Rows shown by the data preview
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_preview_rows() -> usize {
    DEFAULT_PREVIEW_ROWS
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            default_path: None,
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

/// AI summary options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Model used for summaries
    #[serde(default)]
    pub model: SummaryModel,

    /// Number of filtered records sent with a request
    #[serde(default = "default_sample_limit")]
    pub sample_limit: usize,

    /// Instruction used when none is given
    #[serde(default = "default_instruction")]
    pub instruction: String,
}

fn default_sample_limit() -> usize {
    DEFAULT_SAMPLE_LIMIT
}

fn default_instruction() -> String {
    DEFAULT_INSTRUCTION.to_string()
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            model: SummaryModel::default(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
            instruction: DEFAULT_INSTRUCTION.to_string(),
        }
    }
}

/// Logging options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Also write logs to a daily rolling file in the app data directory
    #[serde(default)]
    pub log_to_file: bool,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_to_file: false,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Application configuration, stored as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub summary: SummaryConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the config from the default location
    ///
    /// A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let path = app_config_path().ok_or_else(|| {
            DistVisError::Config("Could not determine app config path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load the config, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load app config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Load a config file from an explicit path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DistVisError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            DistVisError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save the config to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(APP_CONFIG_FILE))
    }

    /// Save the config to an explicit path
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DistVisError::Serialization(format!("Failed to serialize config: {}", e)))?;

        let path = path.as_ref();
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {:?}", path))
    }

    /// Reject values that would make the dashboard misbehave
    pub fn validate(&self) -> Result<()> {
        if self.summary.sample_limit == 0 {
            return Err(DistVisError::Config(
                "summary.sample_limit must be at least 1".to_string(),
            ));
        }
        if !PREVIEW_SIZES.contains(&self.dataset.preview_rows) {
            return Err(DistVisError::Config(format!(
                "dataset.preview_rows must be one of {:?}",
                PREVIEW_SIZES
            )));
        }
        Ok(())
    }
}

// ==================== Tests ====================

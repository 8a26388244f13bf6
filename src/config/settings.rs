//! Display settings that can be changed while the dashboard is running
//!
//! Theme, language and accent colour are presentation concerns only. They are
//! held in an explicit [`DisplaySettings`] value that callers pass to whatever
//! renders results; the data pipeline never reads them.
//!
//! # Main Types
//!
//! - [`DisplaySettings`] - Persisted theme, language and accent colour
//! - [`Theme`] - Light or dark appearance
//! - [`AccentColor`] - A named palette entry

use super::ensure_app_data_dir;
use crate::error::{DistVisError, Result};
use crate::i18n::{self, Language};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Display settings filename
pub const DISPLAY_SETTINGS_FILE: &str = "display_settings.json";

/// A named accent colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Accent colours offered by the settings panel
pub const PANTONE_COLORS: [AccentColor; 10] = [
    AccentColor { name: "Classic Blue", hex: "#0F4C81" },
    AccentColor { name: "Living Coral", hex: "#FF6F61" },
    AccentColor { name: "Ultra Violet", hex: "#5F4B8B" },
    AccentColor { name: "Greenery", hex: "#88B04B" },
    AccentColor { name: "Rose Quartz", hex: "#F7CAC9" },
    AccentColor { name: "Serenity", hex: "#92A8D1" },
    AccentColor { name: "Marsala", hex: "#955251" },
    AccentColor { name: "Radiant Orchid", hex: "#AD5E99" },
    AccentColor { name: "Emerald", hex: "#009473" },
    AccentColor { name: "Tangerine Tango", hex: "#DD4124" },
];

impl AccentColor {
    /// Look up a palette entry by hex code (case-insensitive)
    pub fn from_hex(hex: &str) -> Option<Self> {
        PANTONE_COLORS
            .iter()
            .copied()
            .find(|c| c.hex.eq_ignore_ascii_case(hex))
    }

    /// RGB components of the colour
    pub fn rgb(&self) -> [u8; 3] {
        parse_hex_color(self.hex).unwrap_or([0, 0, 0])
    }
}

/// Parse a `#RRGGBB` colour
pub fn parse_hex_color(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Light or dark appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Persisted display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub language: Language,

    /// Accent colour as `#RRGGBB`
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

fn default_accent_color() -> String {
    PANTONE_COLORS[0].hex.to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: Language::English,
            accent_color: default_accent_color(),
        }
    }
}

impl DisplaySettings {
    /// Path of the settings file in the app data directory
    pub fn default_path() -> Option<PathBuf> {
        super::app_data_dir().map(|p| p.join(DISPLAY_SETTINGS_FILE))
    }

    /// Load settings from the default location
    pub fn load() -> Result<Self> {
        let path = Self::default_path().ok_or_else(|| {
            DistVisError::Config("Could not determine display settings path".to_string())
        })?;

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load settings, returning defaults on any error
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load display settings, using defaults: {}", e);
            Self::default()
        })
    }

    /// Load settings from an explicit path
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DistVisError::Config(format!("Failed to read display settings: {}", e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            DistVisError::Config(format!("Failed to parse display settings: {}", e))
        })
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<()> {
        let dir = ensure_app_data_dir()?;
        self.save_to(dir.join(DISPLAY_SETTINGS_FILE))
    }

    /// Save settings to an explicit path
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            DistVisError::Serialization(format!("Failed to serialize display settings: {}", e))
        })?;

        std::fs::write(path.as_ref(), content)
            .map_err(|e| DistVisError::Config(format!("Failed to write display settings: {}", e)))
    }

    /// Change the accent colour; accepts any `#RRGGBB` value
    pub fn set_accent_color(&mut self, hex: &str) -> Result<()> {
        if parse_hex_color(hex).is_none() {
            return Err(DistVisError::Config(format!("Invalid colour: {}", hex)));
        }
        self.accent_color = hex.to_uppercase();
        Ok(())
    }

    /// Palette entry matching the current accent colour, if any
    pub fn accent(&self) -> Option<AccentColor> {
        AccentColor::from_hex(&self.accent_color)
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.apply();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Make the chosen language the active translation locale
    pub fn apply(&self) {
        i18n::set_language(self.language);
    }
}

//! User settings - layout, gesture tuning and logging, stored as JSON.
//!
//! Missing fields take their defaults, so an empty `{}` file is valid.
//! [`Settings::load`] never fails: a missing or broken file logs a warning and
//! yields defaults. Use [`Settings::load_from`] to see the error.

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_CLICK_TOLERANCE, DEFAULT_COLUMNS, DEFAULT_ITEM_GAP,
    DEFAULT_ITEM_HEIGHT, DEFAULT_ITEM_WIDTH, DEFAULT_LOG_FILTER, DEFAULT_SPATIAL_INDEX_THRESHOLD,
    SETTINGS_FILE_NAME,
};
use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub item_width: f32,
    pub item_height: f32,
    pub gap: f32,
    pub columns: usize,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            item_width: DEFAULT_ITEM_WIDTH,
            item_height: DEFAULT_ITEM_HEIGHT,
            gap: DEFAULT_ITEM_GAP,
            columns: DEFAULT_COLUMNS,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutSettings,
    /// Per-axis pointer travel still treated as a click, in pixels
    pub click_tolerance: f32,
    /// Catalogs this large or larger hit-test through the R-tree
    pub spatial_index_threshold: usize,
    /// `tracing` filter directive; `RUST_LOG` overrides it
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutSettings::default(),
            click_tolerance: DEFAULT_CLICK_TOLERANCE,
            spatial_index_threshold: DEFAULT_SPATIAL_INDEX_THRESHOLD,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// `<config dir>/fruitpicker/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default path, falling back to defaults on any error.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            warn!("No config directory, using default settings");
            return Self::default();
        };
        Self::load_or_default(&path)
    }

    /// Load `path`, warning and falling back to defaults if it is broken.
    /// A missing file is not worth a warning.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring settings file");
                Self::default()
            }
        }
    }

    /// Load and validate a settings file.
    pub fn load_from(path: &Path) -> SettingsResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| SettingsError::io(path, e))?;
        let settings: Settings = serde_json::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Write as pretty JSON, creating parent directories.
    pub fn save_to(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SettingsError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|e| SettingsError::io(path, e))
    }

    pub fn validate(&self) -> SettingsResult<()> {
        let layout = &self.layout;
        if !is_positive(layout.item_width) {
            return Err(SettingsError::invalid("layout.item_width", "must be positive"));
        }
        if !is_positive(layout.item_height) {
            return Err(SettingsError::invalid("layout.item_height", "must be positive"));
        }
        if !is_non_negative(layout.gap) {
            return Err(SettingsError::invalid("layout.gap", "must not be negative"));
        }
        if layout.columns == 0 {
            return Err(SettingsError::invalid("layout.columns", "must be at least 1"));
        }
        if !is_non_negative(self.click_tolerance) {
            return Err(SettingsError::invalid("click_tolerance", "must not be negative"));
        }
        Ok(())
    }

    /// Whether a catalog of `len` items should hit-test through the R-tree.
    pub fn use_spatial_index(&self, len: usize) -> bool {
        len >= self.spatial_index_threshold
    }
}

// NaN fails both checks
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Application configuration
///
/// Loaded once at startup from a JSON file. Every field has a default, so a
/// partial file (or no file at all) still yields a usable gallery.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::catalog::Catalog;
use super::cell::ZoomPolicy;
use crate::error::ConfigError;

/// Environment variable that can point at a config file
pub const CONFIG_ENV_VAR: &str = "PHOTO_GRID_CONFIG";

/// Grid layout and zoom behaviour
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Number of columns in the grid
    pub columns: usize,
    /// Gap between cells in pixels
    pub spacing: f32,
    /// Padding around the whole grid in pixels
    pub padding: f32,
    /// Zoom progression applied to every cell
    pub zoom: ZoomPolicy,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            spacing: 8.0,
            padding: 12.0,
            zoom: ZoomPolicy::default(),
        }
    }
}

/// The two source lists the catalog is built from
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub primary: Vec<String>,
    /// May be shorter than `primary`
    pub fallback: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let picsum = |id: u32| format!("https://picsum.photos/id/{}/400/400", id);

        Self {
            primary: [10, 11, 12, 13, 14, 15, 16, 17, 18]
                .into_iter()
                .map(picsum)
                .collect(),
            fallback: [20, 21, 22, 23, 24, 25]
                .into_iter()
                .map(picsum)
                .collect(),
        }
    }
}

impl CatalogConfig {
    pub fn build(&self) -> Catalog {
        Catalog::from_sources(self.primary.iter().cloned(), self.fallback.iter().cloned())
    }
}

/// Text shown on the identity card screen
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IdentityConfig {
    pub name: String,
    pub number: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            name: "ANDI CITRA AYU LESTARI".to_string(),
            number: "105841101722".to_string(),
        }
    }
}

/// Top-level configuration file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub gallery: GalleryConfig,
    pub catalog: CatalogConfig,
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// Parse a config from a JSON string and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Convert to a pretty JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Check that the values can drive a working gallery
    pub fn validate(&self) -> Result<(), ConfigError> {
        let gallery = &self.gallery;

        if gallery.columns == 0 {
            return Err(ConfigError::Invalid("columns must be at least 1".into()));
        }
        if !(gallery.spacing.is_finite() && gallery.spacing >= 0.0) {
            return Err(ConfigError::Invalid("spacing must be a non-negative number".into()));
        }
        if !(gallery.padding.is_finite() && gallery.padding >= 0.0) {
            return Err(ConfigError::Invalid("padding must be a non-negative number".into()));
        }
        if !(gallery.zoom.step.is_finite() && gallery.zoom.step > 1.0) {
            return Err(ConfigError::Invalid("zoom step must be greater than 1.0".into()));
        }
        if !(gallery.zoom.cap.is_finite() && gallery.zoom.cap > 1.0) {
            return Err(ConfigError::Invalid("zoom cap must be greater than 1.0".into()));
        }
        if self.catalog.primary.is_empty() {
            return Err(ConfigError::Invalid("catalog needs at least one primary source".into()));
        }

        Ok(())
    }

    /// Resolve and load the configuration.
    ///
    /// Lookup order: explicit path (command line), then `PHOTO_GRID_CONFIG`,
    /// then the per-user config file. An explicitly named file must load;
    /// a broken per-user file is reported and the defaults are used.
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let explicit = explicit.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));

        if let Some(path) = explicit {
            log::info!("📄 Loading config from {}", path.display());
            return Self::from_file(&path);
        }

        if let Some(path) = Self::default_path().filter(|p| p.exists()) {
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("📄 Loaded config from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("⚠️  Ignoring {}: {}", path.display(), e);
                }
            }
        }

        log::info!("📄 Using built-in configuration");
        Ok(Self::default())
    }

    /// Where the per-user config file lives:
    /// - Linux: ~/.config/photo-grid/config.json
    /// - macOS: ~/Library/Application Support/photo-grid/config.json
    /// - Windows: %APPDATA%\photo-grid\config.json
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("photo-grid");
        path.push("config.json");
        Some(path)
    }
}

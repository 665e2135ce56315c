//! Configuration system
//!
//! Designer-facing minimap settings, loadable from TOML or RON.

pub use serde::{Serialize, Deserialize};
use std::path::Path;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            ConfigFormat::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            ConfigFormat::Ron => ron::ser::to_string_pretty(self, Default::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

enum ConfigFormat {
    Toml,
    Ron,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("ron") => Ok(Self::Ron),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Settings of the minimap icons widget
///
/// Distances are world units, angles are degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapWidgetConfig {
    /// Orthographic width of the top-down capture the minimap shows
    pub ortho_width: f32,

    /// Zoom applied by the minimap material (2.0 = twice as close)
    pub material_zoom: f32,

    /// Clamp icons to the visible circle (half the effective world width)
    pub auto_clamp_to_visible: bool,

    /// Manual clamp radius, used only when `auto_clamp_to_visible` is off
    pub clamp_world_radius_override: f32,

    /// Rotate icons by the tracked entity's yaw relative to the observer
    pub icons_use_actor_yaw: bool,

    /// Hide entries whose altitude differs from the observer's by more than
    /// this; values <= 0 disable the filter
    pub z_tolerance: f32,

    /// Mirror icon offsets horizontally
    pub flip_x: bool,

    /// Mirror icon offsets vertically
    pub flip_y: bool,

    /// Added to the pawn's yaw so the pawn's forward axis points up the map
    pub observer_yaw_offset_degrees: f32,

    /// Instance capacity of the icon buffer
    pub max_icons: usize,
}

impl Default for MinimapWidgetConfig {
    fn default() -> Self {
        Self {
            ortho_width: 10_000.0,
            material_zoom: 1.0,
            auto_clamp_to_visible: true,
            clamp_world_radius_override: 2_500.0,
            icons_use_actor_yaw: true,
            z_tolerance: 100_000.0,
            flip_x: false,
            flip_y: false,
            observer_yaw_offset_degrees: 90.0,
            max_icons: crate::render::instancing::DEFAULT_MAX_ICONS,
        }
    }
}

/// Top-level minimap settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapSettings {
    /// Icons widget settings
    pub widget: MinimapWidgetConfig,

    /// Icon texture paths, indexed by icon style
    pub icon_styles: Vec<String>,
}

impl Config for MinimapSettings {}

//! Drawing configuration.
//!
//! Parsed from YAML; every field has a default, so an empty document is a
//! valid configuration.
//!
//! ```yaml
//! version: 1
//! background: { r: 0, g: 0, b: 0 }
//! foreground: { r: 255, g: 255, b: 255 }
//! dragon:
//!   max_depth: 16
//!   darken_step: 3
//!   color_policy: clamp   # or: strict
//! ```

use crate::canvas::Canvas;
use crate::color::{ColorPolicy, Rgb};
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::render::DragonCurve;
use serde::{Deserialize, Serialize};

/// Dragon curve settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragonConfig {
    /// Deepest folding level accepted.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Amount subtracted from every channel per level.
    #[serde(default = "default_darken_step")]
    pub darken_step: u8,

    /// What happens when darkening would underflow a channel.
    #[serde(default)]
    pub color_policy: ColorPolicy,
}

fn default_max_depth() -> u32 {
    16
}
fn default_darken_step() -> u8 {
    3
}

impl Default for DragonConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            darken_step: default_darken_step(),
            color_policy: ColorPolicy::default(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Fill color for new canvases.
    #[serde(default = "default_background")]
    pub background: Rgb,

    /// Default drawing color.
    #[serde(default = "default_foreground")]
    pub foreground: Rgb,

    /// Dragon curve settings.
    #[serde(default)]
    pub dragon: DragonConfig,
}

fn default_version() -> u32 {
    1
}
fn default_background() -> Rgb {
    Rgb::BLACK
}
fn default_foreground() -> Rgb {
    Rgb::WHITE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            background: default_background(),
            foreground: default_foreground(),
            dragon: DragonConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Serializes the configuration to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self).map_err(|e| Error::ConfigParse {
            line: 0,
            message: e.to_string(),
        })
    }

    /// Create a canvas filled with the configured background.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn canvas(&self, width: u32, height: u32) -> Result<Canvas> {
        Canvas::create(width, height, self.background)
    }

    /// Build a dragon curve using the configured limits and color policy.
    #[must_use]
    pub fn dragon_curve(&self, start: Point, end: Point, depth: u32) -> DragonCurve {
        DragonCurve::new(start, end, depth).with_config(self.dragon)
    }
}

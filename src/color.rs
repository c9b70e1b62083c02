//! Color types and channel derivation policy.
//!
//! Channels are plain `u8`s, so a stored color is always valid. Colors that
//! are *derived* (the curve generator darkens its color at every level) go
//! through either [`Rgb::darken`], which saturates at zero, or
//! [`Rgb::checked_darken`], which reports the underflow. [`ColorPolicy`]
//! names the choice.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// RGB color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue.
    pub const BLUE: Self = Self::new(0, 0, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from wide integer channels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if any channel lies outside `[0, 255]`.
    pub fn try_from_channels(r: i32, g: i32, b: i32) -> Result<Self> {
        let channel = |name: &str, v: i32| {
            u8::try_from(v)
                .map_err(|_| Error::InvalidColor(format!("{name}={v} is outside [0, 255]")))
        };
        Ok(Self::new(channel("r", r)?, channel("g", g)?, channel("b", b)?))
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Subtract `step` from every channel, saturating at zero.
    #[must_use]
    pub const fn darken(self, step: u8) -> Self {
        Self::new(
            self.r.saturating_sub(step),
            self.g.saturating_sub(step),
            self.b.saturating_sub(step),
        )
    }

    /// Subtract `step` from every channel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if any channel would drop below zero.
    pub fn checked_darken(self, step: u8) -> Result<Self> {
        Self::try_from_channels(
            i32::from(self.r) - i32::from(step),
            i32::from(self.g) - i32::from(step),
            i32::from(self.b) - i32::from(step),
        )
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(arr: [u8; 3]) -> Self {
        Self::from_array(arr)
    }
}

/// How derived colors treat channels that would leave `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorPolicy {
    /// Saturate each channel at the range boundary.
    #[default]
    Clamp,
    /// Fail with [`Error::InvalidColor`].
    Strict,
}

impl ColorPolicy {
    /// Darken `color` by `step` under this policy.
    ///
    /// # Errors
    ///
    /// Only [`ColorPolicy::Strict`] can fail, with [`Error::InvalidColor`].
    pub fn darken(self, color: Rgb, step: u8) -> Result<Rgb> {
        match self {
            Self::Clamp => Ok(color.darken(step)),
            Self::Strict => color.checked_darken(step),
        }
    }
}

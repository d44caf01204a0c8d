//! Simulator configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default grid width in pixels per scanline.
pub const DEFAULT_WIDTH: usize = 30;

/// Default grid height in scanlines.
pub const DEFAULT_HEIGHT: usize = 100;

/// Suggested interval between `update()` calls (about 33 frames per second).
///
/// Scheduling belongs to the display; this is only the cadence the effect was tuned for.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(30);

/// Grid dimensions and random seed for a [`crate::FireSimulator`].
///
/// Dimensions are fixed for the lifetime of the simulator.
///
/// # Example
///
/// ```
/// use fire_effect_core::FireConfig;
///
/// let config = FireConfig::new(64, 48).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.buffer_len(), 64 * 48 * 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireConfig {
    /// Pixels per scanline
    pub width: usize,
    /// Number of scanlines
    pub height: usize,
    /// Seed for the heat injection generator; `None` seeds from the OS
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl FireConfig {
    /// Unseeded configuration with the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed: None,
        }
    }

    /// Use a fixed seed so every run produces the same frames.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the dimensions can back a grid and an RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] for a zero width or height and
    /// [`ConfigError::TooLarge`] if `3 * width * height` overflows `usize`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { name: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { name: "height" });
        }
        self.width
            .checked_mul(self.height)
            .and_then(|cells| cells.checked_mul(3))
            .map(|_| ())
            .ok_or(ConfigError::TooLarge {
                width: self.width,
                height: self.height,
            })
    }

    /// Number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Length of the rendered RGB buffer.
    pub fn buffer_len(&self) -> usize {
        self.cell_count() * 3
    }

    /// Bytes per scanline of the rendered buffer.
    pub fn stride(&self) -> usize {
        self.width * 3
    }
}

//! Heat → color lookup table
//!
//! The fire palette ramps black → red → orange → yellow → white. Hue sweeps from red
//! (`0`) to yellow (`1/6`) across the table while lightness reaches full brightness at
//! the midpoint and stays there.

use crate::color::{hsl_to_rgb, to_byte};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of palette entries; heat values are reduced modulo this.
pub const PALETTE_SIZE: usize = 256;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in buffer order.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Immutable 256-entry color table indexed by heat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: [Rgb8; PALETTE_SIZE],
}

impl Palette {
    /// Build the classic fire ramp.
    ///
    /// # Errors
    ///
    /// Propagates a [`ColorError`] from the HSL conversion. The inputs used here are all
    /// in range, so this only fails if the conversion itself is broken.
    pub fn fire() -> Result<Self, ColorError> {
        let mut entries = [Rgb8::default(); PALETTE_SIZE];
        for (x, entry) in entries.iter_mut().enumerate() {
            let hue = x as f64 / 255.0;
            let lit = (hue * 2.0).min(1.0);
            let rgb = hsl_to_rgb(hue / 3.0, 1.0, lit)?;
            *entry = Rgb8::new(to_byte(rgb.r), to_byte(rgb.g), to_byte(rgb.b));
        }

        debug!(
            "Built fire palette: first={:?}, last={:?}",
            entries[0],
            entries[PALETTE_SIZE - 1]
        );

        Ok(Self { entries })
    }

    /// Color for a heat value, reduced modulo [`PALETTE_SIZE`].
    #[inline]
    pub fn get(&self, heat: u32) -> Rgb8 {
        self.entries[heat as usize % PALETTE_SIZE]
    }

    /// All entries in intensity order.
    pub fn entries(&self) -> &[Rgb8; PALETTE_SIZE] {
        &self.entries
    }

    /// Always [`PALETTE_SIZE`].
    #[allow(clippy::unused_self)]
    pub fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// A palette is never empty.
    #[allow(clippy::unused_self)]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `color` is one of the palette entries.
    pub fn contains(&self, color: Rgb8) -> bool {
        self.entries.contains(&color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_endpoints() {
        let palette = Palette::fire().unwrap();
        assert_eq!(palette.len(), 256);
        assert_eq!(palette.get(0), Rgb8::new(0, 0, 0));
        // Hue 1/3 at full lightness is white
        assert_eq!(palette.get(255), Rgb8::new(255, 255, 255));
    }

    #[test]
    fn test_palette_is_a_flame_ramp() {
        let palette = Palette::fire().unwrap();
        let entries = palette.entries();

        for pair in entries.windows(2) {
            assert!(pair[1].r >= pair[0].r, "red must not decrease: {pair:?}");
        }
        // Red saturates by the midpoint, green and blue arrive later
        assert_eq!(entries[128].r, 255);
        assert_eq!(entries[64], Rgb8::new(255, 128, 1));
        assert_eq!(entries[1], Rgb8::new(4, 0, 0));
    }

    #[test]
    fn test_get_reduces_modulo_256() {
        let palette = Palette::fire().unwrap();
        assert_eq!(palette.get(256), palette.get(0));
        assert_eq!(palette.get(300), palette.get(44));
    }

    #[test]
    fn test_contains() {
        let palette = Palette::fire().unwrap();
        assert!(palette.contains(palette.get(77)));
        assert!(!palette.contains(Rgb8::new(0, 0, 255)));
    }
}

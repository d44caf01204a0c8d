//! Conversion of normalized channels to bytes

use super::convert::clamp01;
use super::tables::GAMMA_2_8;
use crate::error::ColorError;

/// Map a `[0,1]` channel to one of 256 equal-width bins.
///
/// The bin index is shifted down by one (`floor(x * 256) - 1`, clamped to `0..=255`), so
/// `0.0` and everything below `2/256` land in bin `0` and `1.0` lands in bin `255`.
///
/// # Errors
///
/// Returns [`ColorError::OutOfTolerance`] if `real_color` is not within tolerance of `[0,1]`.
pub fn upscale(real_color: f64) -> Result<u8, ColorError> {
    let real_color = clamp01(real_color)?;
    let bin = (real_color * 256.0).floor() - 1.0;
    Ok(bin.clamp(0.0, 255.0) as u8)
}

/// Scale a `[0,1]` channel to a byte, rounding half away from zero.
///
/// Values outside `[0,1]` saturate at `0` or `255`.
#[inline]
pub fn to_byte(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Apply the 2.8 LED gamma curve to a byte channel.
#[inline]
pub fn gamma_correct(channel: u8) -> u8 {
    GAMMA_2_8[usize::from(channel)]
}

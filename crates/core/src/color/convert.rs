//! HSL/HSV ↔ RGB conversion on normalized `[0,1]` components
//!
//! Hue is a fraction of a full turn. Conversions validate their results against a
//! tolerance band and then snap into `[0,1]`; anything outside the band is a
//! [`ColorError`], never silently clamped.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// Default tolerance for [`clamp01`] and the RGB → HSL/HSV conversion.
pub const CLAMP_TOLERANCE: f64 = 0.00001;

/// Tolerance applied to channels produced by [`hslv_to_rgb`].
pub const CONVERSION_TOLERANCE: f64 = 0.005;

/// Saturation below this is treated as achromatic.
const ACHROMATIC_SATURATION: f64 = 0.000001;

/// Normalized RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Normalized hue, saturation, lightness.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// Normalized hue, saturation, value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// Full result of [`rgb_to_hslv`]: one hue, both saturations, lightness and value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hslv {
    pub h: f64,
    /// Saturation in the HSL model
    pub s_hsl: f64,
    /// Saturation in the HSV model
    pub s_hsv: f64,
    pub l: f64,
    pub v: f64,
}

/// Which third component [`hslv_to_rgb`] interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorModel {
    /// Third component is lightness (HSL)
    Lightness,
    /// Third component is value (HSV)
    Value,
}

/// Snap `value` into `[0,1]` using the default tolerance.
///
/// # Errors
///
/// Returns [`ColorError::OutOfTolerance`] if `value` is further than
/// [`CLAMP_TOLERANCE`] outside `[0,1]` (or NaN).
pub fn clamp01(value: f64) -> Result<f64, ColorError> {
    clamp01_within(value, CLAMP_TOLERANCE)
}

/// Snap `value` into `[0,1]` if it lies within `tolerance` of the interval.
///
/// # Errors
///
/// Returns [`ColorError::OutOfTolerance`] if `value` is further than `tolerance`
/// outside `[0,1]` (or NaN).
pub fn clamp01_within(value: f64, tolerance: f64) -> Result<f64, ColorError> {
    if (0.0..=1.0).contains(&value) {
        return Ok(value);
    }
    if value < 0.0 && -tolerance < value {
        return Ok(0.0);
    }
    if value > 1.0 && 1.0 + tolerance > value {
        return Ok(1.0);
    }
    Err(ColorError::OutOfTolerance { value, tolerance })
}

/// Map any real to `[0,1)`.
#[inline]
pub fn wrap01(value: f64) -> f64 {
    value - value.floor()
}

/// Convert HSL (lightness mode) or HSV (value mode) to RGB.
///
/// Hue `0` is red and the circle runs red → yellow → green → cyan → blue → magenta.
///
/// # Errors
///
/// Returns [`ColorError::OutOfTolerance`] if a resulting channel lies more than
/// [`CONVERSION_TOLERANCE`] outside `[0,1]`, which happens for inputs outside `[0,1]`,
/// and for a hue that is NaN or infinite.
pub fn hslv_to_rgb(h: f64, s: f64, lv: f64, model: ColorModel) -> Result<Rgb, ColorError> {
    if !h.is_finite() {
        return Err(ColorError::OutOfTolerance {
            value: h,
            tolerance: CONVERSION_TOLERANCE,
        });
    }
    let h = wrap01(h);

    if s.abs() < ACHROMATIC_SATURATION {
        return Ok(Rgb::new(lv, lv, lv));
    }

    let (c, m) = match model {
        ColorModel::Value => {
            let c = lv * s;
            (c, lv - c)
        }
        ColorModel::Lightness => {
            let c = (1.0 - (2.0 * lv - 1.0).abs()) * s;
            (c, lv - c * 0.5)
        }
    };

    let hp = 6.0 * h;
    let hp_mod_2 = (hp / 2.0 - (hp / 2.0).floor()) * 2.0;
    let x = c * (1.0 - (hp_mod_2 - 1.0).abs());

    // hp can reach 6.0 when h rounds up to 1.0; that falls through to black + m
    let (r, g, b) = if hp < 1.0 {
        (c, x, 0.0)
    } else if hp < 2.0 {
        (x, c, 0.0)
    } else if hp < 3.0 {
        (0.0, c, x)
    } else if hp < 4.0 {
        (0.0, x, c)
    } else if hp < 5.0 {
        (x, 0.0, c)
    } else if hp < 6.0 {
        (c, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    Ok(Rgb::new(
        settle_channel(r + m)?,
        settle_channel(g + m)?,
        settle_channel(b + m)?,
    ))
}

/// Validate a freshly converted channel against the tolerance band, then clamp it.
fn settle_channel(value: f64) -> Result<f64, ColorError> {
    if !(-CONVERSION_TOLERANCE..=1.0 + CONVERSION_TOLERANCE).contains(&value) {
        return Err(ColorError::OutOfTolerance {
            value,
            tolerance: CONVERSION_TOLERANCE,
        });
    }
    clamp01_within(value, CONVERSION_TOLERANCE)
}

/// Convert HSL to RGB.
///
/// # Errors
///
/// See [`hslv_to_rgb`].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<Rgb, ColorError> {
    hslv_to_rgb(h, s, l, ColorModel::Lightness)
}

/// Convert HSV to RGB.
///
/// # Errors
///
/// See [`hslv_to_rgb`].
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Result<Rgb, ColorError> {
    hslv_to_rgb(h, s, v, ColorModel::Value)
}

/// Convert RGB in `[0,1]` to hue, both saturations, lightness and value.
///
/// Hue defaults to `0` for achromatic input. HSV saturation is `0` when value is `0`;
/// HSL saturation is `0` when lightness is `0` or `1`.
///
/// # Errors
///
/// Returns [`ColorError::ChannelOutOfRange`] if any input channel is outside `[0,1]`.
pub fn rgb_to_hslv(r: f64, g: f64, b: f64) -> Result<Hslv, ColorError> {
    for (channel, value) in [("r", r), ("g", g), ("b", b)] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorError::ChannelOutOfRange { channel, value });
        }
    }

    let (max, min) = if r > g {
        (r.max(b), g.min(b))
    } else {
        (g.max(b), r.min(b))
    };
    let c = max - min;

    let mut h = 0.0;
    if c.abs() > CLAMP_TOLERANCE {
        if (max - r).abs() < CLAMP_TOLERANCE {
            h = (g - b) / c;
            if h < 0.0 {
                h += 6.0;
            }
        } else if (max - g).abs() < CLAMP_TOLERANCE {
            h = (b - r) / c + 2.0;
        } else if (max - b).abs() < CLAMP_TOLERANCE {
            h = (r - g) / c + 4.0;
        }
    }
    h /= 6.0;
    if h >= 1.0 {
        h -= 1.0;
    }

    let v = max;
    let l = (min + max) / 2.0;

    let s_hsv = if v.abs() > CLAMP_TOLERANCE {
        clamp01(c / v)?
    } else {
        0.0
    };

    let s_hsl = if CLAMP_TOLERANCE < l && l < 1.0 - CLAMP_TOLERANCE {
        clamp01(c / (1.0 - (2.0 * l - 1.0).abs()))?
    } else {
        0.0
    };

    Ok(Hslv {
        h,
        s_hsl,
        s_hsv,
        l,
        v,
    })
}

/// Convert RGB in `[0,1]` to HSL.
///
/// # Errors
///
/// See [`rgb_to_hslv`].
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> Result<Hsl, ColorError> {
    let hslv = rgb_to_hslv(r, g, b)?;
    Ok(Hsl {
        h: hslv.h,
        s: hslv.s_hsl,
        l: hslv.l,
    })
}

/// Convert RGB in `[0,1]` to HSV.
///
/// # Errors
///
/// See [`rgb_to_hslv`].
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> Result<Hsv, ColorError> {
    let hslv = rgb_to_hslv(r, g, b)?;
    Ok(Hsv {
        h: hslv.h,
        s: hslv.s_hsv,
        v: hslv.v,
    })
}
